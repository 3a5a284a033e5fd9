use crate::core::body::Body;

/// A per-body velocity behavior applied once per substep, before
/// integration. Gravity and drag are the built-ins; hosts can register
/// their own.
pub trait Behavior {
    fn apply(&self, body: &mut Body, dt: f64);
}

/// Constant downward acceleration. Positive values pull toward the bottom
/// wall (screen coordinates grow downward).
pub struct Gravity {
    pub acceleration: f64,
}

impl Gravity {
    pub fn new(acceleration: f64) -> Self {
        Self { acceleration }
    }
}

impl Behavior for Gravity {
    fn apply(&self, body: &mut Body, dt: f64) {
        body.velocity.y += self.acceleration * dt;
    }
}

/// Linear drag scaling velocity down each substep.
pub struct Drag {
    pub coefficient: f64,
}

impl Drag {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }
}

impl Behavior for Drag {
    fn apply(&self, body: &mut Body, dt: f64) {
        body.velocity *= 1.0 - self.coefficient * dt;
    }
}

/// Collection of behaviors the world runs each substep.
pub struct BehaviorRegistry {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
        }
    }

    pub fn add<B: Behavior + 'static>(&mut self, behavior: B) {
        self.behaviors.push(Box::new(behavior));
    }

    pub fn clear(&mut self) {
        self.behaviors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    pub fn apply_all(&self, bodies: &mut [Body], dt: f64) {
        for behavior in &self.behaviors {
            for body in bodies.iter_mut() {
                behavior.apply(body, dt);
            }
        }
    }
}
