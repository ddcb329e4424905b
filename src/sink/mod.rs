//! Terminal sink stages and their capability traits.
//!
//! A sink sits at the end of a pull-driven graph and hands finished output
//! to the caller:
//!
//! - [`FrameSink`] - returns frames exactly as upstream produced them
//! - [`SampleSink`] - re-chunks audio deliveries into caller-sized blocks
//! - [`FrameSlot`] - the single-slot handoff both are fed through
//! - [`SinkTable`] - name-keyed registry of available sink kinds
//!
//! Every sink implements [`Sink`]; only audio sinks implement
//! [`ReadSamples`], so fixed-size reads against a video sink are not
//! expressible.

pub mod frame_sink;
pub mod handoff;
pub mod registry;
pub mod sample_sink;

pub use frame_sink::FrameSink;
pub use handoff::FrameSlot;
pub use registry::{FRAME_SINK, MediaKind, RegistryError, SAMPLE_SINK, SinkKind, SinkTable};
pub use sample_sink::SampleSink;

use crate::error::SinkError;

/// Operations every terminal sink offers.
pub trait Sink {
    type Frame;

    /// Returns how many frames are ready without driving new upstream work.
    fn poll(&mut self) -> Result<usize, SinkError>;

    /// Drive the graph until one frame is available and return it.
    fn read(&mut self) -> Result<Self::Frame, SinkError>;
}

/// Fixed-size reads, offered by audio sinks only.
pub trait ReadSamples: Sink {
    /// Return exactly `frames` sample frames, pulling upstream as needed.
    ///
    /// The only short block is the final one before end of stream.
    fn read_samples(&mut self, frames: usize) -> Result<Self::Frame, SinkError>;
}
