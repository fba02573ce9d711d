#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

#[cfg(not(any(feature = "miniz", feature = "zlib")))]
compile_error!("At least one of the features 'miniz' or 'zlib' must be enabled");

mod bound;
mod codec;
mod compressor;
mod config;
mod decompressor;
mod engine;
mod error;
mod session;

pub use bound::deflate_bound;
pub use codec::Codec;
pub use compressor::Compressor;
pub use config::{CompressOptions, CompressionLevel, DecompressOptions, Framing};
pub use decompressor::Decompressor;
pub use engine::Direction;
pub use error::{DeflateError, DeflateResult, EngineError, InitError, ResetError};

/// Low-level compression interface using caller-provided buffers.
///
/// Codecs write into pre-allocated slices and return a sub-slice showing exactly
/// what was written. Allows buffer reuse across calls.
///
/// # Type Parameters
///
/// - `In`: Uncompressed data type (bytes for DEFLATE)
/// - `Out`: Compressed output type (defaults to `In`)
///
/// # Buffer Sizing
///
/// Caller must ensure output buffers are large enough. For compression, use
/// [`deflate_bound`] or [`Compressor::compress_bound`]. For decompression, the
/// output length is the declared size of the original data: the call only
/// succeeds if the stream decodes to exactly `output.len()` items.
pub trait CodecToSlice<In, Out = In> {
    /// Error type returned by compression/decompression operations.
    type Error;

    /// Compresses input into output buffer, returning slice of data written.
    fn compress_to_slice<'out>(
        &mut self,
        input: &[In],
        output: &'out mut [Out],
    ) -> Result<&'out [Out], Self::Error>;

    /// Decompresses input into output buffer, returning slice of data written.
    fn decompress_to_slice<'out>(
        &mut self,
        input: &[Out],
        output: &'out mut [In],
    ) -> Result<&'out [In], Self::Error>;
}
