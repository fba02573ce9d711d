use log::{debug, trace, warn};

use crate::bound::Bound;
use crate::engine::Engine;
use crate::{DeflateResult, EngineError, ResetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Freshly opened or freshly reset
    Ready,
    /// A reset failed, the engine state is unknown
    Poisoned,
}

/// Exclusively owned codec session.
///
/// Every run is followed by a reset, whatever the run's outcome, so a session
/// is always either ready for an independent operation or poisoned. The
/// engine is closed exactly once, when the session is dropped.
pub(crate) struct Session<E: Engine> {
    engine: E,
    state: State,
    closed: bool,
}

impl<E: Engine> Session<E> {
    pub fn open(params: E::Params) -> DeflateResult<Self> {
        let engine = E::open(params)?;
        debug!("Opened {} session", E::DIRECTION);
        Ok(Session {
            engine,
            state: State::Ready,
            closed: false,
        })
    }

    /// Runs the engine once over the whole input and returns the number of
    /// bytes written to `output`.
    pub fn run_to_completion(&mut self, input: &[u8], output: &mut [u8]) -> DeflateResult<usize> {
        let engine = self.ready_engine()?;
        let run = engine.run(input, output);
        let reset = engine.reset();

        if let Err(err) = reset {
            warn!("Poisoning {} session: {err}", E::DIRECTION);
            if let Err(run_err) = &run {
                warn!("Dropping {} error superseded by reset failure: {run_err}", E::DIRECTION);
            }
            self.state = State::Poisoned;
            return Err(err.into());
        }

        let outcome = run?;
        trace!(
            "{} run: {} of {} input bytes, {} of {} output bytes, completed: {}",
            E::DIRECTION,
            outcome.consumed,
            input.len(),
            outcome.written,
            output.len(),
            outcome.completed,
        );
        if !outcome.completed {
            return Err(EngineError::Incomplete {
                direction: E::DIRECTION,
                consumed: outcome.consumed,
                written: outcome.written,
                capacity: output.len(),
            }
            .into());
        }
        Ok(outcome.written)
    }

    pub fn is_poisoned(&self) -> bool {
        self.state == State::Poisoned
    }

    fn ready_engine(&mut self) -> Result<&mut E, ResetError> {
        match self.state {
            State::Ready if !self.closed => Ok(&mut self.engine),
            _ => Err(ResetError::Poisoned(E::DIRECTION)),
        }
    }

    fn close(&mut self) {
        if !self.closed {
            self.engine.close();
            self.closed = true;
            debug!("Closed {} session", E::DIRECTION);
        }
    }
}

impl<E: Engine + Bound> Session<E> {
    /// Output capacity needed to compress `input_len` bytes with this session.
    pub fn bound(&self, input_len: usize) -> usize {
        self.engine.bound(input_len)
    }
}

/// Allocates a zeroed output buffer without aborting on huge sizes.
pub(crate) fn output_buffer(len: usize) -> Result<Vec<u8>, EngineError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| EngineError::OutOfMemory {
            requested: len,
            source,
        })?;
    buffer.resize(len, 0);
    Ok(buffer)
}

impl<E: Engine> Drop for Session<E> {
    fn drop(&mut self) {
        self.close();
    }
}
