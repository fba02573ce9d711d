use oneshot_deflate::{CompressOptions, CompressionLevel, Framing};

#[derive(arbitrary::Arbitrary)]
pub struct FuzzInput {
    pub data: Vec<u8>,
    pub level: FuzzLevel,
    pub raw: bool,
}

impl FuzzInput {
    pub fn options(&self) -> CompressOptions {
        let framing = if self.raw { Framing::Raw } else { Framing::Zlib };
        CompressOptions::default()
            .with_level(self.level.into())
            .with_framing(framing)
    }
}

impl std::fmt::Debug for FuzzInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInput")
            .field("level", &self.level)
            .field("raw", &self.raw)
            .field("data", &HexSlice(&self.data))
            .finish()
    }
}

#[derive(arbitrary::Arbitrary, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FuzzLevel {
    None,
    Fastest,
    Best,
    Default,
    Precise(u8),
}

impl From<FuzzLevel> for CompressionLevel {
    fn from(level: FuzzLevel) -> Self {
        match level {
            FuzzLevel::None => CompressionLevel::None,
            FuzzLevel::Fastest => CompressionLevel::Fastest,
            FuzzLevel::Best => CompressionLevel::Best,
            FuzzLevel::Default => CompressionLevel::Default,
            FuzzLevel::Precise(level) => {
                CompressionLevel::Precise(u32::from(level) % (CompressionLevel::MAX + 1))
            }
        }
    }
}

pub struct HexSlice<'a>(pub &'a [u8]);

impl<'a> std::fmt::Debug for HexSlice<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const MAX: usize = 32;

        let total = self.0.len();
        let shown = total.min(MAX);

        let mut list = f.debug_list();

        for v in &self.0[..shown] {
            list.entry(&format_args!("{:#04x}", v));
        }

        if total > MAX {
            list.entry(&format_args!(".. out of {} total", total));
        }

        list.finish()
    }
}
