//! A single state of the Markov chain: a frequency table over the opponent's
//! next throw, given what happened in the last round.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::rules::{Move, Outcome};

/// Identifies a state of the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// No round was played yet.
    Start,
    /// The opponent threw the move, and the round ended with the outcome.
    Context(Move, Outcome),
}

impl StateKey {
    /// Number of 'Context' keys.
    pub const NUM_CONTEXTS: usize = Move::ALL.len() * Outcome::ALL.len();

    /// Return the dense index of a context key, or None for 'Start'.
    pub fn context_index(&self) -> Option<usize> {
        match self {
            StateKey::Start => None,
            StateKey::Context(m, o) => Some(m.index() * Outcome::ALL.len() + o.index()),
        }
    }

    /// All of the context keys, in the order of 'context_index'.
    pub fn contexts() -> impl Iterator<Item = StateKey> {
        Move::ALL
            .into_iter()
            .flat_map(|m| Outcome::ALL.into_iter().map(move |o| StateKey::Context(m, o)))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Start => f.write_str("Start"),
            StateKey::Context(m, o) => write!(f, "{}{}", m, o),
        }
    }
}

/// Counts how often each move followed the context 'key'.
/// The counts start at one for each move, so the table is never empty.
#[derive(Debug, Clone)]
pub struct OutcomeState {
    key: StateKey,
    /// Indexed by 'Move::index'.
    counts: [u32; 3],
    /// Always equal to the sum of 'counts'.
    total: u32,
}

impl OutcomeState {
    /// Create a state with a uniform prior.
    pub fn new(key: StateKey) -> Self {
        Self {
            key,
            counts: [1; 3],
            total: Move::ALL.len() as u32,
        }
    }

    pub fn key(&self) -> StateKey {
        self.key
    }

    pub fn counts(&self) -> &[u32; 3] {
        &self.counts
    }

    pub fn count(&self, m: Move) -> u32 {
        self.counts[m.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Select the move whose cumulative count range contains 'choice'.
    /// Moves are walked in the fixed order Rock, Paper, Scissors.
    pub(crate) fn select(&self, choice: u32) -> Result<Move> {
        let mut acc = 0;
        for m in Move::ALL {
            acc += self.counts[m.index()];
            if choice < acc {
                return Ok(m);
            }
        }

        Err(Error::SamplingExhausted {
            key: self.key,
            total: self.total,
            choice,
        })
    }

    /// Draw the opponent's next throw from the table, weighted by the counts.
    pub fn sample_prediction<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Move> {
        let choice = rng.gen_range(0..self.total);
        self.select(choice)
    }

    /// Draw a predicted throw and return the move that beats it.
    pub fn sample_counter_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Move> {
        let predicted = self.sample_prediction(rng)?;
        log::trace!("{}: predicted {}", self.key, predicted);
        Ok(predicted.beaten_by())
    }

    /// Record that the opponent threw 'observed' after this context.
    pub fn record_observation(&mut self, observed: Move) {
        self.counts[observed.index()] += 1;
        self.total += 1;
    }
}

impl fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n   ", self.key)?;
        for m in Move::ALL {
            write!(f, "[{}:{}]", m, self.counts[m.index()])?;
        }
        writeln!(f)
    }
}

#[test]
fn test_uniform_prior() {
    let state = OutcomeState::new(StateKey::Start);
    assert_eq!(state.counts(), &[1, 1, 1]);
    assert_eq!(state.total(), 3);
    assert_eq!(state.select(0).unwrap(), Move::Rock);
    assert_eq!(state.select(1).unwrap(), Move::Paper);
    assert_eq!(state.select(2).unwrap(), Move::Scissors);
}

#[test]
fn test_select_walks_cumulative_counts() {
    let mut state = OutcomeState::new(StateKey::Context(Move::Paper, Outcome::Draw));
    for _ in 0..4 {
        state.record_observation(Move::Paper);
    }
    // counts = [1, 5, 1]
    assert_eq!(state.total(), 7);
    assert_eq!(state.select(0).unwrap(), Move::Rock);
    for choice in 1..6 {
        assert_eq!(state.select(choice).unwrap(), Move::Paper);
    }
    assert_eq!(state.select(6).unwrap(), Move::Scissors);
}

#[test]
fn test_select_out_of_range_is_an_error() {
    let state = OutcomeState::new(StateKey::Context(Move::Rock, Outcome::Win));
    match state.select(3) {
        Err(Error::SamplingExhausted { key, total, choice }) => {
            assert_eq!(key, StateKey::Context(Move::Rock, Outcome::Win));
            assert_eq!(total, 3);
            assert_eq!(choice, 3);
        }
        other => panic!("expected an invariant violation, got {:?}", other),
    }

    let message = state.select(7).unwrap_err().to_string();
    assert_eq!(message, "state RockWin generated 7 out of 3");
}

#[test]
fn test_counter_beats_prediction() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut state = OutcomeState::new(StateKey::Start);
    state.record_observation(Move::Scissors);
    state.record_observation(Move::Rock);

    // Two generators with the same seed make the same draws, so the counter
    // can be checked against the prediction it was derived from.
    let mut rng0 = StdRng::seed_from_u64(7);
    let mut rng1 = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let predicted = state.sample_prediction(&mut rng0).unwrap();
        let counter = state.sample_counter_move(&mut rng1).unwrap();
        assert!(counter.beats(predicted));
    }
}

#[test]
fn test_display() {
    let mut state = OutcomeState::new(StateKey::Context(Move::Scissors, Outcome::Lose));
    state.record_observation(Move::Rock);
    assert_eq!(
        state.to_string(),
        "ScissorsLose:\n   [Rock:2][Paper:1][Scissors:1]\n"
    );
}
