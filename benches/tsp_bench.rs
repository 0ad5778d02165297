//! Criterion benchmarks for the u-tsp solvers.
//!
//! Uses seeded uniform instances in the unit square so every run
//! measures the same point sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::graph::Graph;
use u_tsp::hds::{Exploration, HdsConfig, HdsRunner};
use u_tsp::opt_ppp::{MoveStrategy, OptPppConfig, OptPppRunner};
use u_tsp::opt_prim::{OptPrimConfig, OptPrimRunner};
use u_tsp::ppp::{Construction, PppConfig, PppRunner};

const SEED: u64 = 42;

fn bench_ppp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppp");

    for n in [50, 200, 1000] {
        let graph = Graph::random(n, SEED).unwrap();
        for construction in [
            Construction::NearestNeighbor,
            Construction::NearestInsertion,
            Construction::NearestAttach,
        ] {
            let config = PppConfig::default().with_construction(construction);
            group.bench_with_input(
                BenchmarkId::new(format!("{construction:?}"), n),
                &(graph.clone(), config),
                |b, (g, c)| b.iter(|| PppRunner::run(black_box(g), c).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_opt_ppp(c: &mut Criterion) {
    let mut group = c.benchmark_group("opt_ppp");
    group.sample_size(10);

    for n in [50, 200] {
        let graph = Graph::random(n, SEED).unwrap();
        let initial = PppRunner::run(&graph, &PppConfig::default()).unwrap().tour.cycle;
        for strategy in [
            MoveStrategy::FirstImprovement,
            MoveStrategy::Sweep,
            MoveStrategy::BestImprovement,
        ] {
            let config = OptPppConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &(graph.clone(), config),
                |b, (g, c)| b.iter(|| OptPppRunner::run(black_box(g), &initial, c).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_opt_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("opt_prim");

    for n in [50, 200, 1000] {
        let graph = Graph::random(n, SEED).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| OptPrimRunner::run(black_box(g), &OptPrimConfig::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_hds(c: &mut Criterion) {
    let mut group = c.benchmark_group("hds");
    group.sample_size(10);

    for n in [8, 10, 12] {
        let graph = Graph::random(n, SEED).unwrap();
        for (name, config) in [
            ("half_sum", HdsConfig::default()),
            ("simple", HdsConfig::default().with_simple_bound(true)),
            (
                "depth_first",
                HdsConfig::default().with_exploration(Exploration::DepthFirst),
            ),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, n),
                &(graph.clone(), config),
                |b, (g, c)| b.iter(|| HdsRunner::run(black_box(g), c)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_ppp, bench_opt_ppp, bench_opt_prim, bench_hds);
criterion_main!(benches);
