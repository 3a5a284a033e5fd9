use crate::core::body::Body;
use crate::core::bounds::Bounds;

/// Steps bodies forward in time and reflects them off the arena walls.
///
/// Wall handling is a swept test: instead of clamping a body that ended the
/// step beyond a wall, the integrator finds the fraction of the step at
/// which the disk's edge first touched the wall, places the body there,
/// negates the velocity component on that axis, and spends the remaining
/// time along the reflected velocity.
///
/// The X axis is resolved first against the original pre-step position, then
/// the Y axis against the already-updated position. A body hitting a corner
/// exactly is therefore resolved one axis at a time rather than as a
/// simultaneous solve. Known approximation; callers depend on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    /// Advances `body` by `dt` (strictly positive) and keeps its disk inside
    /// `bounds`.
    pub fn advance(&self, body: &mut Body, dt: f64, bounds: &Bounds) {
        body.position += body.velocity * dt;
        self.reflect_x(body, dt, bounds);
        self.reflect_y(body, dt, bounds);
    }

    fn reflect_x(&self, body: &mut Body, dt: f64, bounds: &Bounds) {
        let prev_x = body.position.x - body.velocity.x * dt;
        let prev_y = body.position.y - body.velocity.y * dt;

        let hit_left = body.position.x - body.radius < bounds.x;
        let hit_right = body.position.x + body.radius > bounds.right();
        if !hit_left && !hit_right {
            return;
        }
        // No motion along the axis means no crossing this step; also avoids
        // a zero division below.
        if body.position.x == prev_x {
            return;
        }

        let wall_x = if hit_left {
            bounds.x + body.radius
        } else {
            bounds.right() - body.radius
        };

        let t = (wall_x - prev_x) / (body.position.x - prev_x);
        body.position.x = prev_x + (body.position.x - prev_x) * t;
        body.position.y = prev_y + (body.position.y - prev_y) * t;

        body.velocity.x = -body.velocity.x;

        let remaining = (1.0 - t) * dt;
        body.position += body.velocity * remaining;
    }

    fn reflect_y(&self, body: &mut Body, dt: f64, bounds: &Bounds) {
        let prev_x = body.position.x - body.velocity.x * dt;
        let prev_y = body.position.y - body.velocity.y * dt;

        let hit_top = body.position.y - body.radius < bounds.y;
        let hit_bottom = body.position.y + body.radius > bounds.bottom();
        if !hit_top && !hit_bottom {
            return;
        }
        if body.position.y == prev_y {
            return;
        }

        let wall_y = if hit_top {
            bounds.y + body.radius
        } else {
            bounds.bottom() - body.radius
        };

        let t = (wall_y - prev_y) / (body.position.y - prev_y);
        body.position.x = prev_x + (body.position.x - prev_x) * t;
        body.position.y = prev_y + (body.position.y - prev_y) * t;

        body.velocity.y = -body.velocity.y;

        let remaining = (1.0 - t) * dt;
        body.position += body.velocity * remaining;
    }
}
