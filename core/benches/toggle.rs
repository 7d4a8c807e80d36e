use criterion::{Criterion, criterion_group, criterion_main};
use lights_out_core::*;
use std::hint::black_box;

fn generate(rows: Ix, cols: Ix) -> Board {
    let config = GameConfig::new(rows, cols, 0.5).unwrap();
    RandomBoardGenerator::new(1234, StartLayout::Unsolved)
        .generate(config)
        .unwrap()
}

fn bench_toggle_around(c: &mut Criterion) {
    let board = generate(5, 5);
    c.bench_function("toggle_around_5x5", |b| {
        b.iter(|| black_box(&board).toggle_around(black_box((2, 2))))
    });

    let board = generate(64, 64);
    c.bench_function("toggle_around_64x64", |b| {
        b.iter(|| black_box(&board).toggle_around(black_box((31, 31))))
    });
}

fn bench_has_won(c: &mut Criterion) {
    let dark = Board::unlit(64, 64).unwrap();
    c.bench_function("has_won_dark_64x64", |b| b.iter(|| black_box(&dark).has_won()));
}

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("generate_scrambled_5x5", |b| {
        b.iter(|| {
            RandomBoardGenerator::new(black_box(99), StartLayout::Scrambled)
                .generate(config)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_toggle_around, bench_has_won, bench_generate);
criterion_main!(benches);
