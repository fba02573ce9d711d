use crate::engine::InflateEngine;
use crate::session::{output_buffer, Session};
use crate::{DecompressOptions, DeflateResult, EngineError, Framing};

/// Reusable one-shot DEFLATE decompressor.
///
/// The caller declares the exact size of the original data. The stream cannot
/// describe its own length, so the only check is that the stream ends within
/// `original_size` bytes. A stream ending early leaves the rest of the output
/// zeroed, unless [`DecompressOptions::exact_size`] is set.
pub struct Decompressor {
    session: Session<InflateEngine>,
    options: DecompressOptions,
}

impl Decompressor {
    /// Opens a zlib-framed decompress session.
    pub fn new() -> DeflateResult<Self> {
        Self::with_options(DecompressOptions::default())
    }

    pub fn with_options(options: DecompressOptions) -> DeflateResult<Self> {
        Ok(Decompressor {
            session: Session::open(options)?,
            options,
        })
    }

    /// Decompresses a complete stream into a buffer of `original_size` bytes.
    ///
    /// A declared size that is too small, or a truncated stream, fails with
    /// [`EngineError::Incomplete`]. A declared size that is too large yields
    /// `original_size` bytes padded with zeros, or fails with
    /// [`EngineError::SizeMismatch`] when the session checks exact sizes.
    pub fn decompress(&mut self, input: &[u8], original_size: usize) -> DeflateResult<Vec<u8>> {
        let mut output = output_buffer(original_size)?;
        self.decompress_to_slice(input, &mut output)?;
        Ok(output)
    }

    /// Decompresses a stream holding UTF-8 text of `original_size` bytes.
    pub fn decompress_to_string(
        &mut self,
        input: &[u8],
        original_size: usize,
    ) -> DeflateResult<String> {
        let bytes = self.decompress(input, original_size)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Decompresses into `output`, whose length is the declared original size.
    ///
    /// Bytes past the end of the stream are zeroed.
    pub fn decompress_to_slice<'out>(
        &mut self,
        input: &[u8],
        output: &'out mut [u8],
    ) -> DeflateResult<&'out [u8]> {
        let written = self.session.run_to_completion(input, output)?;
        if written != output.len() {
            if self.options.exact_size {
                return Err(EngineError::SizeMismatch {
                    expected: output.len(),
                    written,
                }
                .into());
            }
            output[written..].fill(0);
        }
        Ok(output)
    }

    pub fn framing(&self) -> Framing {
        self.options.framing
    }

    /// Returns `true` once a failed reset made this decompressor unusable.
    pub fn is_poisoned(&self) -> bool {
        self.session.is_poisoned()
    }
}

impl std::fmt::Debug for Decompressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decompressor")
            .field("options", &self.options)
            .field("poisoned", &self.is_poisoned())
            .finish_non_exhaustive()
    }
}
