use std::fmt;

use crate::{EngineError, InitError, ResetError};

mod flate;

pub(crate) use flate::{DeflateEngine, InflateEngine};

/// Which transform a codec session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Compress,
    Decompress,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Compress => "compress",
            Direction::Decompress => "decompress",
        })
    }
}

/// What a single finish-mode run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunOutcome {
    /// Input bytes consumed by this run
    pub consumed: usize,
    /// Output bytes written by this run
    pub written: usize,
    /// The engine reported the end of the stream
    pub completed: bool,
}

/// Primitive interface of an external codec engine.
///
/// An engine owns the state of one direction. It is opened once, run in finish
/// mode with fully bound input and output regions, reset between runs and
/// closed once.
pub(crate) trait Engine: Sized {
    /// Parameters needed to open the engine.
    type Params: Copy;

    /// Direction of every engine of this type.
    const DIRECTION: Direction;

    /// Creates engine state.
    fn open(params: Self::Params) -> Result<Self, InitError>;

    /// Runs the transform over the whole input, expecting it to finish within `output`.
    fn run(&mut self, input: &[u8], output: &mut [u8]) -> Result<RunOutcome, EngineError>;

    /// Returns the state to the freshly opened one.
    fn reset(&mut self) -> Result<(), ResetError>;

    /// Releases engine state. Called at most once; failures are not reported.
    fn close(&mut self) {}
}
