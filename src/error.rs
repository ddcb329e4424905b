//! Error taxonomy shared by every sink operation.

use thiserror::Error;

/// Why a sink operation did not return a frame.
///
/// Upstream failures pass through a sink unchanged; only the first three
/// variants originate in the sink itself. Protocol violations (double
/// delivery, ragged blocks, a zero-sized request) are panics, not errors.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sample queue or an output block could not be allocated.
    /// Fatal to the call; already queued samples are kept.
    #[error("allocation failed")]
    OutOfMemory,

    /// Upstream reported success without delivering a frame.
    #[error("upstream reported success without delivering a frame")]
    InvalidState,

    /// The stream ended normally and nothing is left to return.
    #[error("end of stream")]
    EndOfStream,

    /// Any other upstream failure, forwarded as-is.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl SinkError {
    /// Whether this is the normal end-of-stream condition.
    pub fn is_eof(&self) -> bool {
        matches!(self, SinkError::EndOfStream)
    }
}

impl From<std::collections::TryReserveError> for SinkError {
    fn from(_: std::collections::TryReserveError) -> Self {
        SinkError::OutOfMemory
    }
}
