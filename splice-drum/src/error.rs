//! Pattern decoding error types

use std::io;

/// Result type alias for pattern decoding
pub type Result<T> = std::result::Result<T, DrumError>;

/// Errors that can occur while decoding a `.splice` pattern
///
/// Every variant is terminal: the decoder stops at the first one and never
/// hands back a partially populated pattern.
#[derive(Debug, thiserror::Error)]
pub enum DrumError {
    /// Source shorter than the prologue, or the `SPLICE` tag is absent
    #[error("missing marker")]
    MissingMarker,

    /// Declared payload length cannot hold the fixed header
    #[error("header too short: declared length {0} (min 36)")]
    InvalidHeaderLength(u8),

    /// Source ended inside the version/tempo header
    #[error("truncated header")]
    TruncatedHeader,

    /// Source ended inside a track record
    #[error("truncated track record at index {index}")]
    TruncatedTrack {
        /// Zero-based position of the track that failed to decode
        index: usize,
    },

    /// IO error from the underlying byte source
    #[error("IO error: {0}")]
    Io(#[source] io::Error),
}

impl DrumError {
    /// Map an IO error to `eof` when it is a short read, otherwise pass it through
    pub(crate) fn short_read_or(e: io::Error, eof: DrumError) -> DrumError {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            eof
        } else {
            DrumError::Io(e)
        }
    }
}
