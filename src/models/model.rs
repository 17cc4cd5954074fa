use crate::error::Result;
use crate::rules::{Move, Outcome};

/// A trait that defines the interface for playing against an opponent.
pub trait Model {
    /// Return the throw to play in the next round, using the internal state.
    #[must_use = "the counter-move should be played"]
    fn predict(&mut self) -> Result<Move>;

    /// Update the internal state with the opponent's throw 'observed' and the
    /// 'outcome' of the round.
    fn update(&mut self, observed: Move, outcome: Outcome);
}
