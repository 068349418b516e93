use thiserror::Error;
use warren_core::WarrenError;

use crate::RunState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] WarrenError),

    #[error("cannot {op} while {actual:?} (requires {expected:?})")]
    InvalidState {
        expected: RunState,
        actual:   RunState,
        op:       &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
