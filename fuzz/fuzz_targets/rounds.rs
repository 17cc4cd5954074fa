#![no_main]

use libfuzzer_sys::fuzz_target;
use rochambeau::{judge, Move, Predictor, StateKey};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // The first byte seeds the predictor, the rest are the human's throws.
    let mut predictor = Predictor::with_seed(data[0] as u64);
    for b in &data[1..] {
        let human = Move::ALL[(*b % 3) as usize];
        let counter = predictor.get_counter_move().unwrap();
        let outcome = judge(human, counter);
        predictor.record_round(human, outcome);
        assert_eq!(predictor.current_key(), StateKey::Context(human, outcome));
    }

    // Every observation lands in exactly one state.
    let mut seen = predictor.state(StateKey::Start).total() - 3;
    for state in predictor.states() {
        let sum: u32 = state.counts().iter().sum();
        assert_eq!(sum, state.total());
        assert!(state.counts().iter().all(|c| *c >= 1));
        seen += state.total() - 3;
    }
    assert_eq!(seen as usize, data.len() - 1);
});
