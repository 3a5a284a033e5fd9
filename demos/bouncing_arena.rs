//! Headless comparison run: the same seeded body set is simulated under
//! each broad-phase strategy and per-strategy candidate counts and tick
//! times are printed.

use broadphase_lab::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const BODY_COUNT: usize = 200;
const TICKS: usize = 120;
const SEED: u64 = 1234;

fn strategies() -> Vec<Box<dyn BroadPhase>> {
    vec![
        Box::new(Naive::new()),
        Box::new(SweepAndPrune::new()),
        Box::new(UniformGrid::new(8, 6).expect("static cell counts are valid")),
        Box::new(QuadTree::new()),
        Box::new(AlternatingAxisPartition::new()),
    ]
}

fn main() {
    for strategy in strategies() {
        let name = strategy.name();
        let mut sandbox = Sandbox::with_strategy(strategy);
        let mut rng = SmallRng::seed_from_u64(SEED);
        sandbox.add_random_bodies(BODY_COUNT, &mut rng);
        sandbox.start(60.0).expect("60 fps is valid");

        let mut total_ms = 0.0;
        let mut total_candidates = 0usize;
        for _ in 0..TICKS {
            sandbox.tick();
            total_ms += sandbox.world().last_tick_duration_ms();
            total_candidates += sandbox.world().candidate_pairs().len();
        }
        sandbox.stop();

        println!(
            "{:<28} avg tick {:>7.3} ms, avg candidates {:>6.1}",
            name,
            total_ms / TICKS as f64,
            total_candidates as f64 / TICKS as f64,
        );
    }
}
