//! Terminal sinks for a pull-driven media graph.
//!
//! The last stage of a media graph owns everything above it: a caller asks
//! the sink for output and the sink drives upstream stages until one frame
//! arrives through a single-slot handoff. The audio variant additionally
//! re-chunks deliveries into caller-sized blocks, interpolating a
//! presentation timestamp for each block along the way.
//!
//! # Sinks
//! - [`FrameSink`] - returns frames exactly as upstream produced them
//! - [`SampleSink`] - batches audio into fixed-size [`SampleBlock`]s
//! - [`Sink`] / [`ReadSamples`] - the capability traits callers consume
//!
//! # Graph boundary
//! - [`Upstream`] - the contract of the stage feeding a sink
//! - [`FrameSlot`] - the handoff upstream delivers into, one frame at a time
//! - [`LinkSpec`] - negotiated sample rate, channel count, and time base
//!
//! # Registry
//! - [`SinkTable`] - caller-owned table of [`SinkKind`]s, seeded with the
//!   builtin [`FRAME_SINK`] and [`SAMPLE_SINK`]
//!
//! Everything here is single-threaded and synchronous: operations take
//! `&mut self`, drive the graph to completion, and return.

pub mod block;
pub mod error;
pub mod fifo;
pub mod link;
pub mod sample;
pub mod sink;
pub mod time;

pub use block::SampleBlock;
pub use error::SinkError;
pub use fifo::SampleFifo;
pub use link::{LinkSpec, Upstream};
pub use sample::AudioSample;
pub use sink::{
    FRAME_SINK, FrameSink, FrameSlot, MediaKind, ReadSamples, RegistryError, SAMPLE_SINK,
    SampleSink, Sink, SinkKind, SinkTable,
};
pub use time::Rational;
