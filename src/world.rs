use std::collections::HashMap;
use std::time::{Duration, Instant};

use glam::DVec2;
use rand::Rng;

use crate::collision::{BroadPhase, Naive};
use crate::config::{DEFAULT_FPS, DEFAULT_PHYSICS_STEPS};
use crate::core::body::{Body, BodyFactory};
use crate::core::bounds::Bounds;
use crate::core::color::Color;
use crate::core::geometry::DebugShape;
use crate::core::pair::CandidatePair;
use crate::dynamics::{BehaviorRegistry, CollisionResolver, Integrator};
use crate::error::SimulationError;
use crate::utils::logging::{warn_if_tick_budget_exceeded, ScopedTimer};

/// Whether the external cadence driver should currently be firing ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Central simulation container: owns the body collection, the active
/// broad-phase strategy, and the tick loop.
///
/// The cadence timer itself lives in the host; the world only tracks the
/// `Stopped`/`Running` state and the interval the host should use. `tick()`
/// may be called in either state (a manual single-step is always allowed)
/// and always runs to completion before the next tick can start.
pub struct SimulationWorld {
    bodies: Vec<Body>,
    factory: BodyFactory,
    integrator: Integrator,
    behaviors: BehaviorRegistry,
    strategy: Box<dyn BroadPhase>,
    bounds: Bounds,
    fps: f64,
    physics_steps: u32,
    state: LoopState,
    last_pairs: Vec<CandidatePair>,
    last_tick_duration: Duration,
}

impl SimulationWorld {
    pub fn new() -> Self {
        Self::with_strategy(Box::new(Naive::new()))
    }

    pub fn with_strategy(strategy: Box<dyn BroadPhase>) -> Self {
        Self {
            bodies: Vec::new(),
            factory: BodyFactory::new(),
            integrator: Integrator::new(),
            behaviors: BehaviorRegistry::new(),
            strategy,
            bounds: Bounds::default(),
            fps: DEFAULT_FPS,
            physics_steps: DEFAULT_PHYSICS_STEPS,
            state: LoopState::Stopped,
            last_pairs: Vec::new(),
            last_tick_duration: Duration::ZERO,
        }
    }

    /// Creates a body from explicit parameters and adds it, returning its id.
    pub fn add_body(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<u64, SimulationError> {
        let body = self
            .factory
            .create(position, velocity, radius, mass, color)?;
        let id = body.id;
        self.bodies.push(body);
        Ok(id)
    }

    /// Adds `count` randomly generated bodies, returning their ids.
    pub fn add_random_bodies<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<u64> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let body = self.factory.create_random(rng, &self.bounds);
            ids.push(body.id);
            self.bodies.push(body);
        }
        ids
    }

    /// Adds pre-built bodies. The factory's id counter is advanced past the
    /// largest incoming id so later factory-made bodies stay unique.
    pub fn add_bodies(&mut self, bodies: Vec<Body>) {
        for body in bodies {
            self.factory.reserve_past(body.id);
            self.bodies.push(body);
        }
    }

    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
        self.last_pairs.clear();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Read-only snapshot of the body collection, for rendering.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: u64) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    /// Executes exactly one tick synchronously: per substep, query the broad
    /// phase once, resolve every deduplicated candidate pair, then integrate
    /// every body.
    pub fn tick(&mut self) {
        let started = Instant::now();
        let dt = 1.0 / self.fps;
        // The setter rejects zero; the floor keeps sub_dt finite regardless.
        let steps = self.physics_steps.max(1);
        let sub_dt = dt / steps as f64;

        for _ in 0..steps {
            if !self.behaviors.is_empty() {
                let _timer = ScopedTimer::new("behaviors");
                self.behaviors.apply_all(&mut self.bodies, sub_dt);
            }

            let mut pairs = {
                let _timer = ScopedTimer::new("broadphase::query");
                self.strategy.candidate_pairs(&self.bodies, &self.bounds)
            };

            {
                let _timer = ScopedTimer::new("resolver");
                let index_of: HashMap<u64, usize> = self
                    .bodies
                    .iter()
                    .enumerate()
                    .map(|(index, body)| (body.id, index))
                    .collect();
                for pair in &mut pairs {
                    let (Some(&i), Some(&j)) =
                        (index_of.get(&pair.a()), index_of.get(&pair.b()))
                    else {
                        continue;
                    };
                    if let Some((a, b)) = body_pair_mut(&mut self.bodies, i, j) {
                        pair.resolved = CollisionResolver::resolve(a, b);
                    }
                }
            }

            {
                let _timer = ScopedTimer::new("integrator");
                for body in &mut self.bodies {
                    self.integrator.advance(body, sub_dt, &self.bounds);
                }
            }

            self.last_pairs = pairs;
        }

        self.last_tick_duration = started.elapsed();
        warn_if_tick_budget_exceeded(self.last_tick_duration, 1000.0 / self.fps);
    }

    /// Marks the loop as running at `fps` ticks per second.
    pub fn start(&mut self, fps: f64) -> Result<(), SimulationError> {
        self.set_fps(fps)?;
        self.state = LoopState::Running;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The interval the host's cadence timer should fire at, while running.
    /// Changing fps mid-run changes this immediately; the host re-reads it
    /// to restart its timer without touching simulation state.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.state {
            LoopState::Running => Some(Duration::from_secs_f64(1.0 / self.fps)),
            LoopState::Stopped => None,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: f64) -> Result<(), SimulationError> {
        if fps < 1.0 || !fps.is_finite() {
            return Err(SimulationError::InvalidFps(fps));
        }
        self.fps = fps;
        Ok(())
    }

    pub fn physics_steps(&self) -> u32 {
        self.physics_steps
    }

    pub fn set_physics_steps(&mut self, steps: u32) -> Result<(), SimulationError> {
        if steps == 0 {
            return Err(SimulationError::InvalidPhysicsSteps(steps));
        }
        self.physics_steps = steps;
        Ok(())
    }

    /// Swaps the broad-phase strategy. Pure in-memory replacement; the next
    /// tick rebuilds everything from the new strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn BroadPhase>) {
        self.strategy = strategy;
        self.last_pairs.clear();
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn behaviors(&self) -> &BehaviorRegistry {
        &self.behaviors
    }

    /// Mutable access to the behavior registry, for installing or clearing
    /// per-body behaviors such as gravity or drag.
    pub fn behaviors_mut(&mut self) -> &mut BehaviorRegistry {
        &mut self.behaviors
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Resize hook; the host calls this when the rendering surface changes.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Last tick's deduplicated candidate pairs, `resolved` flags set, for
    /// the host's color-coded debug overlay.
    pub fn candidate_pairs(&self) -> &[CandidatePair] {
        &self.last_pairs
    }

    /// Partition geometry from the most recent broad-phase query.
    pub fn debug_geometry(&self) -> &[DebugShape] {
        self.strategy.debug_geometry()
    }

    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick_duration
    }

    pub fn last_tick_duration_ms(&self) -> f64 {
        self.last_tick_duration.as_secs_f64() * 1000.0
    }
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable split borrow of two distinct bodies by index.
fn body_pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i == j || i >= bodies.len() || j >= bodies.len() {
        return None;
    }
    let (low, high, flipped) = if i < j { (i, j, false) } else { (j, i, true) };
    let (left, right) = bodies.split_at_mut(high);
    let first = &mut left[low];
    let second = &mut right[0];
    if flipped {
        Some((second, first))
    } else {
        Some((first, second))
    }
}
