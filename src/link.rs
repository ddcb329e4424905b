//! The boundary between a sink and the graph feeding it.
//!
//! [`LinkSpec`] carries the properties the host graph negotiated for the
//! input link; [`Upstream`] is the contract the stage on the far side of
//! that link implements.

use crate::error::SinkError;
use crate::sink::handoff::FrameSlot;
use crate::time::{self, Rational};

/// Negotiated properties of the link feeding an audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub time_base: Rational,
}

impl LinkSpec {
    pub fn new(sample_rate: u32, channels: u16, time_base: Rational) -> Self {
        Self {
            sample_rate,
            channels,
            time_base,
        }
    }

    /// Negotiation must produce a non-zero rate and channel count and a
    /// valid time base; anything else is a host bug.
    pub fn is_valid(&self) -> bool {
        self.sample_rate > 0 && self.channels > 0 && self.time_base.is_valid()
    }

    /// Ticks of this link's time base covered by `frames` sample frames.
    pub fn frames_to_ticks(&self, frames: usize) -> i64 {
        time::samples_to_ticks(frames, self.sample_rate, self.time_base)
    }
}

/// The stage on the far side of a sink's input link.
///
/// `request_frame` runs as much upstream graph work as needed to produce
/// one frame, which it hands over through the [`FrameSlot`]. The call may
/// recurse arbitrarily deep into the graph before returning; the sink only
/// sees the final outcome.
///
/// End of stream and every other failure travel back as [`SinkError`]
/// values. The sink forwards them to its caller unchanged.
pub trait Upstream {
    type Frame;

    /// Returns how many frames this stage could deliver without doing new
    /// upstream work.
    fn poll_frames(&mut self) -> Result<usize, SinkError>;

    /// Produce one frame into `slot`, or fail.
    ///
    /// Success with an empty slot is a contract violation; the sink reports
    /// it as [`SinkError::InvalidState`]. Delivering into an occupied slot
    /// panics.
    fn request_frame(&mut self, slot: &mut FrameSlot<Self::Frame>) -> Result<(), SinkError>;
}
