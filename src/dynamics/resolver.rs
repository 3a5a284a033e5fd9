use glam::DVec2;

use crate::core::body::Body;

/// Resolves a single body-body contact with a perfectly elastic impulse
/// (restitution 1.0) plus a positional correction that pushes the disks
/// apart by half the overlap each.
///
/// The resolver is the sole authority on true overlap: broad phases hand it
/// candidates that may be false positives, and it simply returns `false`
/// for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Returns `true` iff the bodies were overlapping and were mutated.
    pub fn resolve(a: &mut Body, b: &mut Body) -> bool {
        if a.id == b.id {
            return false;
        }

        let delta = b.position - a.position;
        let distance = delta.length();
        let combined_radius = a.radius + b.radius;
        if distance >= combined_radius {
            return false;
        }

        // Coincident centers give no meaningful normal; fall back to +X so
        // the bodies still separate deterministically.
        let normal = if distance > 0.0 {
            delta / distance
        } else {
            DVec2::X
        };

        let relative_velocity = (b.velocity - a.velocity).dot(normal);
        if relative_velocity < 0.0 {
            let impulse = -2.0 * relative_velocity / (1.0 / a.mass + 1.0 / b.mass);
            a.velocity -= impulse * normal / a.mass;
            b.velocity += impulse * normal / b.mass;
        }
        // Already-separating bodies skip the impulse but are still pushed
        // apart, preventing persistent sinking at high substep counts.

        let overlap = combined_radius - distance;
        let correction = normal * (overlap / 2.0);
        a.position -= correction;
        b.position += correction;

        true
    }
}
