//! Named sink kinds and the table hosts look them up in.

use std::fmt;

use thiserror::Error;

use crate::block::SampleBlock;
use crate::link::{LinkSpec, Upstream};
use crate::sample::AudioSample;
use crate::sink::frame_sink::FrameSink;
use crate::sink::sample_sink::SampleSink;

/// The class of stream a sink kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Audio => write!(f, "audio"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("sink kind {name:?} is already registered")]
    DuplicateName { name: &'static str },

    #[error("sink kind {name:?} handles {actual} streams, not {requested}")]
    MediaMismatch {
        name: &'static str,
        requested: MediaKind,
        actual: MediaKind,
    },
}

/// A named, registrable kind of sink.
///
/// Kinds describe what a sink does and which media class it accepts; the
/// typed `build_*` methods turn a kind into a running sink over a concrete
/// upstream stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkKind {
    pub name: &'static str,
    pub description: &'static str,
    pub media: MediaKind,
}

/// Hands finished video frames to the caller at the end of the graph.
pub const FRAME_SINK: SinkKind = SinkKind {
    name: "framesink",
    description: "Return finished video frames to the caller at the end of the graph",
    media: MediaKind::Video,
};

/// Batches audio into caller-sized sample blocks at the end of the graph.
pub const SAMPLE_SINK: SinkKind = SinkKind {
    name: "samplesink",
    description: "Batch audio samples into caller-sized blocks at the end of the graph",
    media: MediaKind::Audio,
};

impl SinkKind {
    /// Build a whole-frame sink over `upstream`.
    ///
    /// Fails unless this kind handles video streams.
    pub fn build_frame_sink<U: Upstream>(
        &self,
        upstream: U,
    ) -> Result<FrameSink<U>, RegistryError> {
        self.expect_media(MediaKind::Video)?;
        Ok(FrameSink::new(upstream))
    }

    /// Build a batching sample sink over `upstream` with the link's
    /// negotiated properties.
    ///
    /// Fails unless this kind handles audio streams.
    pub fn build_sample_sink<U, S>(
        &self,
        upstream: U,
        spec: LinkSpec,
    ) -> Result<SampleSink<U, S>, RegistryError>
    where
        U: Upstream<Frame = SampleBlock<S>>,
        S: AudioSample,
    {
        self.expect_media(MediaKind::Audio)?;
        Ok(SampleSink::new(upstream, spec))
    }

    fn expect_media(&self, requested: MediaKind) -> Result<(), RegistryError> {
        if self.media != requested {
            return Err(RegistryError::MediaMismatch {
                name: self.name,
                requested,
                actual: self.media,
            });
        }
        Ok(())
    }
}

/// A caller-owned table of sink kinds, keyed by name.
pub struct SinkTable {
    kinds: Vec<SinkKind>,
}

impl SinkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Create a table seeded with the builtin kinds.
    pub fn with_builtins() -> Self {
        Self {
            kinds: vec![FRAME_SINK, SAMPLE_SINK],
        }
    }

    /// Register a sink kind. Names must be unique.
    pub fn register(&mut self, kind: SinkKind) -> Result<(), RegistryError> {
        if self.kinds.iter().any(|k| k.name == kind.name) {
            return Err(RegistryError::DuplicateName { name: kind.name });
        }
        self.kinds.push(kind);
        Ok(())
    }

    /// Look up a sink kind by name.
    pub fn get(&self, name: &str) -> Option<&SinkKind> {
        self.kinds.iter().find(|k| k.name == name)
    }

    /// Iterate registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &SinkKind> {
        self.kinds.iter()
    }
}

impl Default for SinkTable {
    fn default() -> Self {
        Self::new()
    }
}
