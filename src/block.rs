use anyhow::Result;

/// A block of interleaved audio samples sharing a single timestamp.
///
/// `pts` counts in ticks of the producing link's time base. `None` means
/// the producer did not know the presentation time.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBlock<S> {
    data: Vec<S>,
    channels: u16,
    pts: Option<i64>,
}

impl<S> SampleBlock<S> {
    /// Create a block from interleaved samples.
    ///
    /// Returns an error if the data length is not a whole number of frames.
    pub fn new(data: Vec<S>, channels: u16, pts: Option<i64>) -> Result<Self> {
        if channels == 0 {
            anyhow::bail!("channel count must be non-zero");
        }
        if data.len() % channels as usize != 0 {
            anyhow::bail!(
                "data length {} must be a multiple of channels {}",
                data.len(),
                channels
            );
        }
        Ok(Self {
            data,
            channels,
            pts,
        })
    }

    /// Build a block from parts already known to be whole frames.
    pub(crate) fn from_raw(data: Vec<S>, channels: u16, pts: Option<i64>) -> Self {
        debug_assert_eq!(data.len() % channels as usize, 0);
        Self {
            data,
            channels,
            pts,
        }
    }

    /// Returns the number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.data.len() / self.channels as usize
    }

    /// Returns the number of channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Presentation timestamp of the first frame, if known.
    pub fn pts(&self) -> Option<i64> {
        self.pts
    }

    /// Access the interleaved sample data.
    pub fn data(&self) -> &[S] {
        &self.data
    }

    /// Consumes the block and returns the raw samples.
    pub fn into_inner(self) -> Vec<S> {
        self.data
    }
}
