use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::core::{
    prepare, AlternativesEntry, Board, GameSession, PairEntry, SimpleRng, WordPairDataset,
};

fn pairs_dataset(n: usize) -> WordPairDataset {
    WordPairDataset::Pairs(
        (0..n)
            .map(|i| PairEntry::new(format!("left{}", i), format!("right{}", i)))
            .collect(),
    )
}

fn alternatives_dataset(n: usize) -> WordPairDataset {
    WordPairDataset::Alternatives(
        (0..n)
            .map(|i| AlternativesEntry::new((0..4).map(|j| format!("w{}_{}", i, j))))
            .collect(),
    )
}

fn bench_prepare(c: &mut Criterion) {
    let pairs = pairs_dataset(500);
    let alternatives = alternatives_dataset(500);

    c.bench_function("prepare_pairs_500", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| prepare(black_box(&pairs), 10, &mut rng))
    });
    c.bench_function("prepare_alternatives_500", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| prepare(black_box(&alternatives), 10, &mut rng))
    });
}

fn bench_deal(c: &mut Criterion) {
    let dataset = pairs_dataset(50);
    let mut rng = SimpleRng::new(1);
    let prepared = match prepare(&dataset, 10, &mut rng) {
        Ok(prepared) => prepared,
        Err(e) => panic!("prepare failed: {}", e),
    };

    c.bench_function("build_board_20", |b| {
        b.iter(|| Board::build(black_box(prepared.pairs()), &mut rng))
    });
    c.bench_function("new_game_20", |b| {
        b.iter(|| GameSession::new(black_box(prepared.clone()), 7))
    });
}

fn bench_turn(c: &mut Criterion) {
    let dataset = pairs_dataset(10);
    let session = match GameSession::from_dataset(&dataset, 10, 99) {
        Ok(session) => session,
        Err(e) => panic!("deal failed: {}", e),
    };

    c.bench_function("match_one_pair", |b| {
        b.iter(|| {
            let mut s = session.clone();
            let first = s.board().position_of("left0").unwrap_or(0);
            let second = s.board().position_of("right0").unwrap_or(1);
            s.select(first);
            s.select(second);
            black_box(s.take_effects())
        })
    });

    c.bench_function("snapshot_fingerprint", |b| {
        let mut snap = session.snapshot();
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(snap.fingerprint())
        })
    });
}

criterion_group!(benches, bench_prepare, bench_deal, bench_turn);
criterion_main!(benches);
