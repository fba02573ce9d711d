use crate::engine::DeflateEngine;
use crate::session::{output_buffer, Session};
use crate::{CompressOptions, CompressionLevel, DeflateResult, Framing};

/// Reusable one-shot DEFLATE compressor.
///
/// Owns one compress session for its whole lifetime. Every call compresses the
/// complete input into a complete stream, then resets the session, so calls are
/// independent of each other.
///
/// ```
/// use oneshot_deflate::{CompressionLevel, Compressor, Decompressor};
///
/// let mut compressor = Compressor::new(CompressionLevel::Best)?;
/// let compressed = compressor.compress(b"AAAAAAAAAA")?;
///
/// let mut decompressor = Decompressor::new()?;
/// assert_eq!(decompressor.decompress(&compressed, 10)?, b"AAAAAAAAAA");
/// # Ok::<(), oneshot_deflate::DeflateError>(())
/// ```
pub struct Compressor {
    session: Session<DeflateEngine>,
    options: CompressOptions,
}

impl Compressor {
    /// Opens a zlib-framed compress session with the given level.
    pub fn new(level: CompressionLevel) -> DeflateResult<Self> {
        Self::with_options(CompressOptions::default().with_level(level))
    }

    /// Opens a compress session.
    ///
    /// Fails with [`InitError`](crate::InitError) if the engine rejects the options.
    pub fn with_options(options: CompressOptions) -> DeflateResult<Self> {
        Ok(Compressor {
            session: Session::open(options)?,
            options,
        })
    }

    /// Compresses the whole input into a new buffer sized to the produced stream.
    pub fn compress(&mut self, input: &[u8]) -> DeflateResult<Vec<u8>> {
        let mut output = output_buffer(self.compress_bound(input.len()))?;
        let written = self.session.run_to_completion(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }

    /// Compresses UTF-8 text. The result is a binary stream.
    pub fn compress_str(&mut self, input: &str) -> DeflateResult<Vec<u8>> {
        self.compress(input.as_bytes())
    }

    /// Compresses into a caller-provided buffer, returning the written part.
    ///
    /// A buffer smaller than [`compress_bound`](Self::compress_bound) may be too
    /// small, which fails with [`EngineError::Incomplete`](crate::EngineError::Incomplete)
    /// and leaves the compressor usable.
    pub fn compress_to_slice<'out>(
        &mut self,
        input: &[u8],
        output: &'out mut [u8],
    ) -> DeflateResult<&'out [u8]> {
        let written = self.session.run_to_completion(input, output)?;
        Ok(&output[..written])
    }

    /// Largest stream this compressor can produce for `input_len` bytes.
    pub fn compress_bound(&self, input_len: usize) -> usize {
        self.session.bound(input_len)
    }

    pub fn level(&self) -> CompressionLevel {
        self.options.level
    }

    pub fn framing(&self) -> Framing {
        self.options.framing
    }

    /// Returns `true` once a failed reset made this compressor unusable.
    pub fn is_poisoned(&self) -> bool {
        self.session.is_poisoned()
    }
}

impl std::fmt::Debug for Compressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compressor")
            .field("options", &self.options)
            .field("poisoned", &self.is_poisoned())
            .finish_non_exhaustive()
    }
}
