use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{RANDOM_RADIUS_MAX, RANDOM_RADIUS_MIN, RANDOM_SPEED_LIMIT};
use crate::core::bounds::Bounds;
use crate::core::color::Color;
use crate::error::SimulationError;

/// A circular rigid body. Position and velocity are mutated in place each
/// tick by the integrator and the collision resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u64,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
}

impl Body {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Axis-aligned bounding box of the disk as `(min, max)` corners.
    pub fn aabb(&self) -> (DVec2, DVec2) {
        let extent = DVec2::splat(self.radius);
        (self.position - extent, self.position + extent)
    }

    /// Whether this body's disk overlaps another's.
    pub fn overlaps(&self, other: &Body) -> bool {
        let combined = self.radius + other.radius;
        self.position.distance_squared(other.position) < combined * combined
    }
}

/// Hands out bodies with unique, monotonically increasing ids. The counter
/// lives here rather than in process-wide static state so independent worlds
/// never share an id sequence.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BodyFactory {
    next_id: u64,
}

impl BodyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a body from caller-specified parameters, validating radius and
    /// mass before an id is consumed.
    pub fn create(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<Body, SimulationError> {
        if radius <= 0.0 {
            return Err(SimulationError::InvalidRadius(radius));
        }
        if mass <= 0.0 {
            return Err(SimulationError::InvalidMass(mass));
        }
        Ok(Body {
            id: self.allocate_id(),
            position,
            velocity,
            radius,
            mass,
            color,
        })
    }

    /// Random body recipe: radius in `[10, 20]`, spawn point in the central
    /// half of the arena, velocity components in `[-100, 100]`, random hue.
    /// Mass scales with disk area so larger bodies hit harder.
    pub fn create_random<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: &Bounds) -> Body {
        let radius = rng.random_range(RANDOM_RADIUS_MIN..=RANDOM_RADIUS_MAX);
        let x = bounds.x + bounds.width * 0.5 + (rng.random::<f64>() - 0.5) * bounds.width * 0.5;
        let y = bounds.y + bounds.height * 0.5 + (rng.random::<f64>() - 0.5) * bounds.height * 0.5;
        let vx = (rng.random::<f64>() - 0.5) * 2.0 * RANDOM_SPEED_LIMIT;
        let vy = (rng.random::<f64>() - 0.5) * 2.0 * RANDOM_SPEED_LIMIT;
        Body {
            id: self.allocate_id(),
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            radius,
            mass: radius * radius,
            color: Color::random_hue(rng),
        }
    }

    /// Advances the counter past an externally supplied id so future
    /// factory-made bodies cannot collide with it.
    pub fn reserve_past(&mut self, id: u64) {
        self.next_id = self.next_id.max(id + 1);
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
