//! Single-slot frame handoff between an upstream stage and its sink.

/// Holds at most one frame in flight from upstream to the sink.
///
/// Upstream delivers into the slot during a request; the sink takes the
/// frame out once the request returns. The slot never queues: a second
/// delivery while one is pending is a protocol violation and panics.
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Place a frame in the slot.
    ///
    /// Panics if a frame is already pending.
    pub fn deliver(&mut self, frame: T) {
        assert!(
            self.pending.is_none(),
            "frame delivered while another is still pending"
        );
        self.pending = Some(frame);
    }

    /// Move the pending frame out, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Whether no frame is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
