use rr_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("{what} count {got} does not match configured count {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} at index {index} has id {id}; ids must equal their index")]
    IdMismatch {
        index: usize,
        id:    u32,
        what:  &'static str,
    },

    #[error("{what} {index} at position {position} is off a road of length {length}")]
    PositionOutOfRange {
        index:    usize,
        position: u32,
        length:   u32,
        what:     &'static str,
    },

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
