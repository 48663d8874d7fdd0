//! Criterion benchmarks for the ant colony search.
//!
//! Uses uniformly random Euclidean instances so timings reflect
//! construction and pheromone-update cost only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_aco::aco::{AcoConfig, AcoRunner, HeuristicMatrix, PheromoneMatrix, TourConstructor};
use u_aco::random::create_rng;
use u_aco::tsp::{generate_cities, CityLayout, DistanceMatrix};

fn instance(n: usize) -> DistanceMatrix {
    let cities = generate_cities(n, CityLayout::default(), &mut create_rng(42))
        .expect("valid instance");
    DistanceMatrix::from_cities(&cities).expect("at least two cities")
}

fn bench_construct_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_tour");

    for &n in &[20usize, 100, 300] {
        let distances = instance(n);
        let heuristic = HeuristicMatrix::build(&distances);
        let pheromone = PheromoneMatrix::initialize(n);
        let builder = TourConstructor::new(&pheromone, &heuristic, 2.0, 0.9);
        let mut rng = create_rng(1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(builder.construct(0, &mut rng)))
        });
    }
    group.finish();
}

fn bench_aco_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_run");
    group.sample_size(10);

    for (n, ants, iters) in [(20usize, 10usize, 50usize), (50, 20, 30), (100, 20, 20)] {
        let distances = instance(n);
        let config = AcoConfig {
            num_ants: ants,
            max_iterations: iters,
            seed: Some(42),
            ..AcoConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_a{}_i{}", n, ants, iters), n),
            &(distances, config),
            |b, (d, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(d), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_construct_tour, bench_aco_run);
criterion_main!(benches);
