//! The pull driver: a sink returning frames exactly as upstream made them.

use std::fmt;

use crate::error::SinkError;
use crate::link::Upstream;
use crate::sink::Sink;
use crate::sink::handoff::FrameSlot;

/// A terminal sink for whole frames.
///
/// Owns the upstream stage and the handoff slot between them. A read
/// drives upstream synchronously until a frame lands in the slot, then
/// moves it out. Frames are opaque; this is the video path, and the
/// un-batched audio path when wrapped by [`SampleSink`].
///
/// [`SampleSink`]: crate::sink::SampleSink
pub struct FrameSink<U: Upstream> {
    upstream: U,
    slot: FrameSlot<U::Frame>,
}

impl<U: Upstream> FrameSink<U> {
    pub fn new(upstream: U) -> Self {
        Self {
            upstream,
            slot: FrameSlot::new(),
        }
    }

    /// Consumes the sink and returns the upstream stage.
    pub fn into_upstream(self) -> U {
        self.upstream
    }
}

impl<U: Upstream> fmt::Debug for FrameSink<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSink")
            .field("slot_empty", &self.slot.is_empty())
            .finish_non_exhaustive()
    }
}

impl<U: Upstream> Sink for FrameSink<U> {
    type Frame = U::Frame;

    fn poll(&mut self) -> Result<usize, SinkError> {
        self.upstream.poll_frames()
    }

    fn read(&mut self) -> Result<U::Frame, SinkError> {
        self.upstream.request_frame(&mut self.slot)?;
        // A successful request must have filled the slot.
        self.slot.take().ok_or(SinkError::InvalidState)
    }
}
