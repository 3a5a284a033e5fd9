//! Broadphase Lab – a 2D circle-physics sandbox.
//!
//! Simulates many circular rigid bodies bouncing inside a bounded arena and
//! exposes five interchangeable broad-phase collision-detection strategies
//! so their candidate sets and costs can be compared: naive all-pairs,
//! sweep-and-prune, uniform grid, quadtree, and an alternating-axis
//! k-d-style partition.
//!
//! The crate is the simulation core only; rendering, UI controls, and the
//! cadence timer are host concerns. The host drives [`SimulationWorld::tick`]
//! (or the [`Sandbox`] wrapper) and consumes body snapshots, candidate-pair
//! overlays, and partition debug geometry after each tick.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use crate::collision::{
    AlternatingAxisPartition, BroadPhase, Naive, QuadTree, SweepAndPrune, UniformGrid,
};
pub use crate::core::{dedupe_pairs, Body, BodyFactory, Bounds, CandidatePair, Color, DebugShape};
pub use crate::dynamics::{
    Behavior, BehaviorRegistry, CollisionResolver, Drag, Gravity, Integrator,
};
pub use crate::error::SimulationError;
pub use crate::world::{LoopState, SimulationWorld};

use rand::Rng;
use std::time::Duration;

/// High-level convenience wrapper that owns a [`SimulationWorld`].
pub struct Sandbox {
    world: SimulationWorld,
}

impl Sandbox {
    /// Creates a sandbox with the naive baseline strategy.
    pub fn new() -> Self {
        Self {
            world: SimulationWorld::new(),
        }
    }

    /// Creates a sandbox with the provided broad-phase strategy.
    pub fn with_strategy(strategy: Box<dyn BroadPhase>) -> Self {
        Self {
            world: SimulationWorld::with_strategy(strategy),
        }
    }

    /// Adds a body with explicit parameters and returns its generated id.
    pub fn add_body(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<u64, SimulationError> {
        self.world.add_body(position, velocity, radius, mass, color)
    }

    /// Spawns `count` random bodies inside the arena.
    pub fn add_random_bodies<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<u64> {
        self.world.add_random_bodies(count, rng)
    }

    /// Executes one simulation tick.
    pub fn tick(&mut self) {
        self.world.tick();
    }

    /// Marks the loop running at `fps`; the host fires ticks at
    /// [`Sandbox::tick_interval`].
    pub fn start(&mut self, fps: f64) -> Result<(), SimulationError> {
        self.world.start(fps)
    }

    pub fn stop(&mut self) {
        self.world.stop();
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.world.tick_interval()
    }

    /// Swaps the active broad-phase strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn BroadPhase>) {
        self.world.set_strategy(strategy);
    }

    /// Access to the underlying world for everything else.
    pub fn world(&self) -> &SimulationWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SimulationWorld {
        &mut self.world
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
