use broadphase_lab::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::hint::black_box;

fn prepare_bodies(count: usize) -> Vec<Body> {
    let bounds = Bounds::default();
    let mut factory = BodyFactory::new();
    let mut rng = SmallRng::seed_from_u64(0xB0D1E5);
    (0..count)
        .map(|_| factory.create_random(&mut rng, &bounds))
        .collect()
}

fn strategies() -> Vec<Box<dyn BroadPhase>> {
    vec![
        Box::new(Naive::new()),
        Box::new(SweepAndPrune::new()),
        Box::new(UniformGrid::new(8, 6).unwrap()),
        Box::new(QuadTree::new()),
        Box::new(AlternatingAxisPartition::new()),
    ]
}

fn bench_candidate_pairs(c: &mut Criterion) {
    let bounds = Bounds::default();
    let mut group = c.benchmark_group("candidate_pairs");
    for &count in &[64usize, 256, 1024] {
        let bodies = prepare_bodies(count);
        for mut strategy in strategies() {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), count),
                &count,
                |b, _| {
                    b.iter(|| {
                        let pairs = strategy.candidate_pairs(black_box(&bodies), &bounds);
                        black_box(pairs)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_full_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");
    for &count in &[128usize, 512] {
        group.bench_with_input(BenchmarkId::new("quadtree", count), &count, |b, &count| {
            b.iter(|| {
                let mut world = SimulationWorld::with_strategy(Box::new(QuadTree::new()));
                world.add_bodies(prepare_bodies(count));
                world.tick();
                black_box(world.candidate_pairs().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_candidate_pairs, bench_full_tick);
criterion_main!(benches);
