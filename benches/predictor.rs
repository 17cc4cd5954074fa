//! A benchmark for the predictor.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rochambeau::{judge, Move, Predictor};

fn play_rounds(rounds: usize) {
    let mut predictor = Predictor::with_seed(0);
    for i in 0..rounds {
        let human = Move::ALL[(i * 7 + i / 3) % 3];
        let counter = predictor.get_counter_move().unwrap();
        predictor.record_round(human, judge(human, counter));
    }
    black_box(predictor.current().total());
}

fn sample_trained() {
    let mut predictor = Predictor::with_seed(0);
    for _ in 0..1000 {
        predictor.record_round(Move::Paper, rochambeau::Outcome::Draw);
    }
    for _ in 0..100_000 {
        black_box(predictor.get_counter_move().unwrap());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("play 1k rounds", |b| b.iter(|| play_rounds(1_000)));
    c.bench_function("play 100k rounds", |b| b.iter(|| play_rounds(100_000)));
    c.bench_function("sample trained state", |b| b.iter(sample_trained));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
