use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use swiss_rounds::{
    event::{Match, MatchScore, Username},
    pairing::{compute_standings, pair_band, plan_round, score_bands},
};

/// Helper to create a field of N participants
fn field(n: usize) -> Vec<Username> {
    (0..n).map(|i| Username::from(format!("player{i}"))).collect()
}

/// Helper to play out a number of rounds, returning the accumulated history.
/// Results cycle through first win, second win and draw so the standings
/// spread out the way a real event does.
fn play_rounds(names: &[Username], rounds: usize) -> Vec<Match> {
    let mut history = Vec::new();
    for _ in 0..rounds {
        let standings = compute_standings(names, &history);
        let mut new_matches = plan_round(&standings, &history);
        for (i, m) in new_matches.iter_mut().enumerate() {
            if m.is_bye() {
                continue;
            }
            let score = match i % 3 {
                0 => MatchScore::new(1, 0),
                1 => MatchScore::new(0, 1),
                _ => MatchScore::new(1, 1),
            };
            m.record_score(score);
        }
        history.append(&mut new_matches);
    }
    history
}

/// Benchmark standings recomputation with different field sizes
fn bench_compute_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_standings");

    for n in [8, 32, 64, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n)),
            n,
            |b, &n| {
                let names = field(n);
                let history = play_rounds(&names, 3);
                b.iter(|| compute_standings(&names, &history));
            },
        );
    }

    group.finish();
}

/// Benchmark planning the opening round, where everybody shares one band
fn bench_plan_first_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_first_round");

    for n in [8, 32, 64, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n)),
            n,
            |b, &n| {
                let names = field(n);
                let standings = compute_standings(&names, &[]);
                b.iter(|| plan_round(&standings, &[]));
            },
        );
    }

    group.finish();
}

/// Benchmark planning a late round over an accumulated history
fn bench_plan_late_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_late_round");

    for n in [8, 32, 64, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n)),
            n,
            |b, &n| {
                let names = field(n);
                let history = play_rounds(&names, 3);
                let standings = compute_standings(&names, &history);
                b.iter(|| plan_round(&standings, &history));
            },
        );
    }

    group.finish();
}

/// Benchmark matching one large band where every prior round was drawn,
/// so the whole field stays level and the rematch constraints pile up
fn bench_pair_band_all_draws(c: &mut Criterion) {
    let names = field(32);
    let mut history = Vec::new();
    for _ in 0..4 {
        let standings = compute_standings(&names, &history);
        let mut new_matches = plan_round(&standings, &history);
        for m in new_matches.iter_mut() {
            m.record_score(MatchScore::new(1, 1));
        }
        history.append(&mut new_matches);
    }
    let band = compute_standings(&names, &history);

    c.bench_function("pair_band_32_players_4_drawn_rounds", |b| {
        b.iter(|| pair_band(&band, &history));
    });
}

/// Benchmark splitting sorted standings into score bands
fn bench_score_bands(c: &mut Criterion) {
    let names = field(64);
    let history = play_rounds(&names, 4);
    let standings = compute_standings(&names, &history);

    c.bench_function("score_bands_64_players", |b| {
        b.iter(|| score_bands(&standings));
    });
}

criterion_group!(
    standings,
    bench_compute_standings,
    bench_score_bands,
);

criterion_group!(
    pairing,
    bench_plan_first_round,
    bench_plan_late_round,
    bench_pair_band_all_draws,
);

criterion_main!(standings, pairing);
