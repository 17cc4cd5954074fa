//! A first-order Markov chain over the outcome of the last round. Each state
//! learns what the opponent tends to throw next, and the predictor plays the
//! move that beats a throw sampled from the current state.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Model;
use super::state::{OutcomeState, StateKey};
use crate::error::Result;
use crate::rules::{Move, Outcome};

pub struct Predictor<R: Rng = StdRng> {
    /// The state before any round was played.
    start: OutcomeState,
    /// One state per context, indexed by 'StateKey::context_index'.
    states: Vec<OutcomeState>,
    /// The state that the next prediction is drawn from.
    current: StateKey,
    rng: R,
}

impl Predictor<StdRng> {
    /// Create a predictor with a generator seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a predictor that makes reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Predictor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Predictor<R> {
    pub fn with_rng(rng: R) -> Self {
        let states: Vec<OutcomeState> = StateKey::contexts().map(OutcomeState::new).collect();
        debug_assert_eq!(states.len(), StateKey::NUM_CONTEXTS);
        Self {
            start: OutcomeState::new(StateKey::Start),
            states,
            current: StateKey::Start,
            rng,
        }
    }

    /// Return the state that is selected by 'key'.
    pub fn state(&self, key: StateKey) -> &OutcomeState {
        match key.context_index() {
            Some(idx) => &self.states[idx],
            None => &self.start,
        }
    }

    fn state_mut(&mut self, key: StateKey) -> &mut OutcomeState {
        match key.context_index() {
            Some(idx) => &mut self.states[idx],
            None => &mut self.start,
        }
    }

    pub fn current_key(&self) -> StateKey {
        self.current
    }

    pub fn current(&self) -> &OutcomeState {
        self.state(self.current)
    }

    /// Iterate over the context states, without the start state.
    pub fn states(&self) -> impl Iterator<Item = &OutcomeState> {
        self.states.iter()
    }

    /// Sample the throw that beats the opponent's predicted next move.
    pub fn get_counter_move(&mut self) -> Result<Move> {
        let idx = self.current.context_index();
        let state = match idx {
            Some(idx) => &self.states[idx],
            None => &self.start,
        };
        let counter = state.sample_counter_move(&mut self.rng)?;
        log::debug!("Playing {} from state {}", counter, self.current);
        Ok(counter)
    }

    /// Attribute the opponent's throw 'observed' to the current state, and
    /// move to the state of the round that just ended.
    pub fn record_round(&mut self, observed: Move, outcome: Outcome) {
        let from = self.current;
        self.state_mut(from).record_observation(observed);
        self.current = StateKey::Context(observed, outcome);
        log::debug!("Transition {} -> {}", from, self.current);
    }
}

impl<R: Rng> Model for Predictor<R> {
    fn predict(&mut self) -> Result<Move> {
        self.get_counter_move()
    }

    fn update(&mut self, observed: Move, outcome: Outcome) {
        self.record_round(observed, outcome);
    }
}

impl<R: Rng> fmt::Display for Predictor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

#[test]
fn test_initial_state() {
    let predictor = Predictor::with_seed(1);
    assert_eq!(predictor.current_key(), StateKey::Start);
    assert_eq!(predictor.states().count(), 9);
    for state in predictor.states() {
        assert_eq!(state.counts(), &[1, 1, 1]);
        assert_eq!(state.total(), 3);
    }
    assert_eq!(predictor.current().total(), 3);
}

#[test]
fn test_states_are_keyed_by_context() {
    let predictor = Predictor::with_seed(1);
    for key in StateKey::contexts() {
        assert_eq!(predictor.state(key).key(), key);
    }
    assert_eq!(predictor.state(StateKey::Start).key(), StateKey::Start);
}

#[test]
fn test_record_into_old_state() {
    let mut predictor = Predictor::with_seed(3);
    predictor.record_round(Move::Scissors, Outcome::Lose);
    assert_eq!(predictor.state(StateKey::Start).count(Move::Scissors), 2);
    let key = StateKey::Context(Move::Scissors, Outcome::Lose);
    assert_eq!(predictor.current_key(), key);
    // The new state has not seen anything yet.
    assert_eq!(predictor.state(key).total(), 3);

    predictor.record_round(Move::Paper, Outcome::Draw);
    assert_eq!(predictor.state(key).count(Move::Paper), 2);
    assert_eq!(predictor.state(key).total(), 4);
}

#[test]
fn test_dump_lists_contexts() {
    let mut predictor = Predictor::with_seed(0);
    predictor.record_round(Move::Rock, Outcome::Win);
    predictor.record_round(Move::Rock, Outcome::Win);
    let dump = predictor.to_string();
    assert_eq!(dump.lines().count(), 18);
    assert!(dump.starts_with("RockWin:\n   [Rock:2][Paper:1][Scissors:1]\n"));
    assert!(!dump.contains("Start"));
}
