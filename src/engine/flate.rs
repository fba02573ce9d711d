//! Engines backed by the low-level [`flate2`] streams.

use flate2::{Compress, Decompress, FlushCompress, FlushDecompress, Status};

use crate::bound::Bound;
use crate::engine::{Direction, Engine, RunOutcome};
use crate::{
    deflate_bound, CompressOptions, DecompressOptions, EngineError, Framing, InitError, ResetError,
};

/// DEFLATE compressor state.
pub(crate) struct DeflateEngine {
    inner: Compress,
    framing: Framing,
}

impl Engine for DeflateEngine {
    type Params = CompressOptions;
    const DIRECTION: Direction = Direction::Compress;

    fn open(params: CompressOptions) -> Result<Self, InitError> {
        let level = params.level.to_compression()?;
        Ok(DeflateEngine {
            inner: Compress::new(level, params.framing.zlib_header()),
            framing: params.framing,
        })
    }

    fn run(&mut self, input: &[u8], output: &mut [u8]) -> Result<RunOutcome, EngineError> {
        let (in_before, out_before) = (self.inner.total_in(), self.inner.total_out());
        let status = self.inner.compress(input, output, FlushCompress::Finish)?;
        Ok(RunOutcome {
            consumed: (self.inner.total_in() - in_before) as usize,
            written: (self.inner.total_out() - out_before) as usize,
            completed: status == Status::StreamEnd,
        })
    }

    fn reset(&mut self) -> Result<(), ResetError> {
        self.inner.reset();
        check_reset(Self::DIRECTION, self.inner.total_in(), self.inner.total_out())
    }
}

impl Bound for DeflateEngine {
    fn bound(&self, input_len: usize) -> usize {
        deflate_bound(input_len, self.framing)
    }
}

/// DEFLATE decompressor state.
pub(crate) struct InflateEngine {
    inner: Decompress,
    framing: Framing,
}

impl Engine for InflateEngine {
    type Params = DecompressOptions;
    const DIRECTION: Direction = Direction::Decompress;

    fn open(params: DecompressOptions) -> Result<Self, InitError> {
        Ok(InflateEngine {
            inner: Decompress::new(params.framing.zlib_header()),
            framing: params.framing,
        })
    }

    fn run(&mut self, input: &[u8], output: &mut [u8]) -> Result<RunOutcome, EngineError> {
        let (in_before, out_before) = (self.inner.total_in(), self.inner.total_out());
        let status = self.inner.decompress(input, output, FlushDecompress::Finish)?;
        Ok(RunOutcome {
            consumed: (self.inner.total_in() - in_before) as usize,
            written: (self.inner.total_out() - out_before) as usize,
            completed: status == Status::StreamEnd,
        })
    }

    fn reset(&mut self) -> Result<(), ResetError> {
        self.inner.reset(self.framing.zlib_header());
        check_reset(Self::DIRECTION, self.inner.total_in(), self.inner.total_out())
    }
}

/// A reset engine must not report any stream progress.
fn check_reset(direction: Direction, total_in: u64, total_out: u64) -> Result<(), ResetError> {
    if total_in == 0 && total_out == 0 {
        Ok(())
    } else {
        Err(ResetError::Rejected {
            direction,
            total_in,
            total_out,
        })
    }
}
