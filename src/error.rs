//! Errors reported by the predictor and the console session.

use crate::models::state::StateKey;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cumulative walk over a frequency table did not select a move.
    /// This means that the counts and the total of the state went out of
    /// sync, and the state can no longer be trusted.
    #[error("state {key} generated {choice} out of {total}")]
    SamplingExhausted {
        key: StateKey,
        total: u32,
        choice: u32,
    },
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
