use std::collections::TryReserveError;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::Direction;

/// Alias for the result type of compression and decompression operations.
pub type DeflateResult<T> = Result<T, DeflateError>;

/// Errors that can occur when using a [`Compressor`](crate::Compressor) or
/// [`Decompressor`](crate::Decompressor).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DeflateError {
    /// The codec session could not be created
    #[error(transparent)]
    Init(#[from] InitError),

    /// A single run did not complete
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The session could not be prepared for the next run
    #[error(transparent)]
    Reset(#[from] ResetError),

    /// Decompressed bytes are not valid UTF-8
    #[error("Decompressed data is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Failure to open a codec session. Fatal to the owner.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// Compression level outside `0..=9`
    #[error("Invalid compression level {0}, expected 0..=9")]
    InvalidLevel(u32),
}

/// Failure of one compress or decompress run.
///
/// The session is reset after every run, so the owner stays usable as long as
/// that reset succeeds.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine did not reach the end of the stream in finish mode.
    ///
    /// When compressing, the output buffer was too small. When decompressing,
    /// the declared original size is too small or the input is truncated.
    #[error(
        "{direction} did not reach end of stream: consumed {consumed} input bytes, \
         wrote {written} of {capacity} output bytes (wrong size or corrupt input)"
    )]
    Incomplete {
        direction: Direction,
        consumed: usize,
        written: usize,
        capacity: usize,
    },

    /// The compressed input is not a valid stream
    #[error("Corrupt compressed input: {0}")]
    Corrupt(#[from] flate2::DecompressError),

    /// The compression engine rejected the call
    #[error("Compression engine error: {0}")]
    Stream(#[from] flate2::CompressError),

    /// The stream ended before filling the declared original size
    #[error("Stream ended after {written} bytes, but the original size was declared as {expected}")]
    SizeMismatch { expected: usize, written: usize },

    /// The output buffer could not be allocated
    #[error("Cannot allocate a {requested} byte output buffer")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Failure to return a session to its initial state. Fatal to the owner.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    /// The engine still reports stream progress after a reset
    #[error("{direction} session reset was rejected: {total_in} bytes in, {total_out} bytes out")]
    Rejected {
        direction: Direction,
        total_in: u64,
        total_out: u64,
    },

    /// An earlier reset failed, the session must be recreated
    #[error("{0} session is unusable after a failed reset")]
    Poisoned(Direction),
}

impl DeflateError {
    /// Returns `true` if the owner of the session must be recreated.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DeflateError::Init(_) | DeflateError::Reset(_))
    }
}
