//! Simulation dynamics: time integration with swept wall reflection,
//! impulse-based contact resolution, and optional per-body behaviors.

pub mod behavior;
pub mod integrator;
pub mod resolver;

pub use behavior::{Behavior, BehaviorRegistry, Drag, Gravity};
pub use integrator::Integrator;
pub use resolver::CollisionResolver;
