use crate::{
    CodecToSlice, CompressOptions, CompressionLevel, Compressor, DecompressOptions, Decompressor,
    DeflateError, DeflateResult,
};

/// A [`Compressor`] and a [`Decompressor`] sharing one framing.
///
/// Convenient when the same component produces and consumes streams, and
/// usable wherever a [`CodecToSlice`] is expected.
#[derive(Debug)]
pub struct Codec {
    compressor: Compressor,
    decompressor: Decompressor,
}

impl Codec {
    /// Opens both sessions with zlib framing.
    pub fn new(level: CompressionLevel) -> DeflateResult<Self> {
        Self::with_options(CompressOptions::default().with_level(level))
    }

    /// Opens both sessions; the decompressor takes its framing from `options`.
    pub fn with_options(options: CompressOptions) -> DeflateResult<Self> {
        Ok(Codec {
            compressor: Compressor::with_options(options)?,
            decompressor: Decompressor::with_options(DecompressOptions::from(options))?,
        })
    }

    pub fn compress(&mut self, input: &[u8]) -> DeflateResult<Vec<u8>> {
        self.compressor.compress(input)
    }

    pub fn decompress(&mut self, input: &[u8], original_size: usize) -> DeflateResult<Vec<u8>> {
        self.decompressor.decompress(input, original_size)
    }

    pub fn compressor(&mut self) -> &mut Compressor {
        &mut self.compressor
    }

    pub fn decompressor(&mut self) -> &mut Decompressor {
        &mut self.decompressor
    }
}

impl CodecToSlice<u8> for Codec {
    type Error = DeflateError;

    fn compress_to_slice<'out>(
        &mut self,
        input: &[u8],
        output: &'out mut [u8],
    ) -> Result<&'out [u8], Self::Error> {
        self.compressor.compress_to_slice(input, output)
    }

    fn decompress_to_slice<'out>(
        &mut self,
        input: &[u8],
        output: &'out mut [u8],
    ) -> Result<&'out [u8], Self::Error> {
        self.decompressor.decompress_to_slice(input, output)
    }
}

impl From<(Compressor, Decompressor)> for Codec {
    fn from((compressor, decompressor): (Compressor, Decompressor)) -> Self {
        Codec {
            compressor,
            decompressor,
        }
    }
}
