//! A FIFO accumulator for interleaved audio samples.
//!
//! Deliveries of any size are appended at the tail; whole sample frames are
//! drained from the head. Lengths are counted in frames, not raw samples.

use std::collections::VecDeque;

use crate::error::SinkError;

/// An interleaved sample queue with a fixed channel count.
///
/// The queue allocates nothing until the first reservation or append, and
/// all growth is fallible: allocation failure surfaces as
/// [`SinkError::OutOfMemory`] with the queued samples intact.
pub struct SampleFifo<S> {
    samples: VecDeque<S>,
    channels: usize,
}

impl<S: Copy> SampleFifo<S> {
    /// Create an empty queue for frames of `channels` interleaved samples.
    ///
    /// Panics if `channels` is zero.
    pub fn new(channels: usize) -> Self {
        assert!(channels > 0, "channel count must be non-zero");
        Self {
            samples: VecDeque::new(),
            channels,
        }
    }

    /// Returns the number of whole sample frames queued.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Grow capacity by room for `frames` more sample frames.
    ///
    /// A hint, not a limit; the queue keeps growing past it on demand.
    pub fn reserve_frames(&mut self, frames: usize) -> Result<(), SinkError> {
        let samples = frames
            .checked_mul(self.channels)
            .ok_or(SinkError::OutOfMemory)?;
        self.samples.try_reserve(samples)?;
        Ok(())
    }

    /// Append interleaved samples at the tail.
    ///
    /// Panics if `samples` is not a whole number of frames.
    pub fn append(&mut self, samples: &[S]) -> Result<(), SinkError> {
        assert_eq!(
            samples.len() % self.channels,
            0,
            "appended {} samples, not a multiple of {} channels",
            samples.len(),
            self.channels
        );
        self.samples.try_reserve(samples.len())?;
        self.samples.extend(samples.iter().copied());
        Ok(())
    }

    /// Remove `frames` whole sample frames from the head.
    ///
    /// Panics if fewer frames are queued.
    pub fn drain_frames(&mut self, frames: usize) -> Result<Vec<S>, SinkError> {
        assert!(
            frames <= self.frames(),
            "draining {} frames but only {} are queued",
            frames,
            self.frames()
        );
        let count = frames * self.channels;
        let mut out = Vec::new();
        out.try_reserve_exact(count)?;
        out.extend(self.samples.drain(..count));
        Ok(out)
    }
}
