//! Benchmarks for the statics solver

use beam_core::{analyze, compute_diagrams, compute_reactions, Beam, BeamProblem, PointLoad};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn spread_loads(length: f64, count: usize) -> Vec<PointLoad> {
    (0..count)
        .map(|i| {
            let position = length * (i as f64 + 0.5) / count as f64;
            PointLoad::new(position, 10.0 + i as f64)
        })
        .collect()
}

fn bench_reactions(c: &mut Criterion) {
    let beam = Beam::new(12.0);
    let loads = spread_loads(beam.length_m, 20);

    c.bench_function("reactions_20_loads", |b| {
        b.iter(|| compute_reactions(black_box(&beam), black_box(&loads)))
    });
}

fn bench_diagrams(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagrams");
    let beam = Beam::new(12.0);

    for &(load_count, samples) in &[(2usize, 201usize), (20, 201), (20, 1001), (100, 1001)] {
        let loads = spread_loads(beam.length_m, load_count);
        let reactions = compute_reactions(&beam, &loads).unwrap();

        group.bench_with_input(
            BenchmarkId::new(format!("{}_loads", load_count), samples),
            &samples,
            |b, &samples| {
                b.iter(|| compute_diagrams(black_box(&beam), black_box(&loads), &reactions, samples))
            },
        );
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let problem = spread_loads(10.0, 10)
        .into_iter()
        .fold(BeamProblem::new("bench", 10.0), |p, load| {
            p.with_load(load.position_m, load.magnitude_kn)
        });

    c.bench_function("analyze_10_loads", |b| b.iter(|| analyze(black_box(&problem))));
}

criterion_group!(benches, bench_reactions, bench_diagrams, bench_analyze);
criterion_main!(benches);
