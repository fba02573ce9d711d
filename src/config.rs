use flate2::Compression;

use crate::InitError;

/// Required level of compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    /// Stored blocks only (level 0)
    None,
    /// Fastest compression (level 1)
    Fastest,
    /// Smallest output (level 9)
    Best,
    /// Engine-chosen balance between speed and size
    #[default]
    Default,
    /// Explicit level, valid range is `0..=9`
    Precise(u32),
}

impl CompressionLevel {
    /// Highest level accepted by the engine.
    pub const MAX: u32 = 9;

    /// Converts to the engine's level, rejecting anything above [`Self::MAX`].
    pub(crate) fn to_compression(self) -> Result<Compression, InitError> {
        Ok(match self {
            CompressionLevel::None => Compression::none(),
            CompressionLevel::Fastest => Compression::fast(),
            CompressionLevel::Best => Compression::best(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Precise(level) if level <= Self::MAX => Compression::new(level),
            CompressionLevel::Precise(level) => return Err(InitError::InvalidLevel(level)),
        })
    }
}

/// Wrapper around the raw DEFLATE blocks.
///
/// Both sides of a round-trip must use the same framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framing {
    /// zlib stream (RFC 1950): 2-byte header and Adler-32 trailer
    #[default]
    Zlib,
    /// Bare DEFLATE blocks (RFC 1951)
    Raw,
}

impl Framing {
    pub(crate) fn zlib_header(self) -> bool {
        matches!(self, Framing::Zlib)
    }

    /// Bytes the framing adds around the DEFLATE blocks.
    pub(crate) fn overhead(self) -> usize {
        match self {
            Framing::Zlib => 6,
            Framing::Raw => 0,
        }
    }
}

/// Parameters of a compress-direction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressOptions {
    pub level: CompressionLevel,
    pub framing: Framing,
}

impl CompressOptions {
    #[must_use]
    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }
}

/// Parameters of a decompress-direction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecompressOptions {
    pub framing: Framing,
    /// Fail when the stream ends before filling the declared original size.
    ///
    /// Off by default: such output is returned zero-padded to the declared size.
    pub exact_size: bool,
}

impl DecompressOptions {
    #[must_use]
    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    #[must_use]
    pub fn with_exact_size(mut self, exact_size: bool) -> Self {
        self.exact_size = exact_size;
        self
    }
}

impl From<CompressOptions> for DecompressOptions {
    fn from(options: CompressOptions) -> Self {
        DecompressOptions {
            framing: options.framing,
            ..DecompressOptions::default()
        }
    }
}
