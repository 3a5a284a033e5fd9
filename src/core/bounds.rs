use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::error::SimulationError;

/// Axis-aligned rectangle bounding the simulation arena. Doubles as the wall
/// boundary for integration and as the root region for the spatial
/// partitioning strategies; the host updates it when the rendering surface
/// resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SimulationError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SimulationError::InvalidBounds { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the body's disk lies fully inside the rectangle.
    pub fn contains(&self, body: &Body) -> bool {
        body.position.x - body.radius >= self.x
            && body.position.x + body.radius <= self.right()
            && body.position.y - body.radius >= self.y
            && body.position.y + body.radius <= self.bottom()
    }

    /// Whether a disk overlaps the rectangle (closest-point test).
    pub fn overlaps_circle(&self, center: DVec2, radius: f64) -> bool {
        let closest_x = center.x.clamp(self.x, self.right());
        let closest_y = center.y.clamp(self.y, self.bottom());
        let dx = center.x - closest_x;
        let dy = center.y - closest_y;
        dx * dx + dy * dy <= radius * radius
    }

    /// The four equal quadrants, in top-left, top-right, bottom-left,
    /// bottom-right order.
    pub fn quadrants(&self) -> [Bounds; 4] {
        let w = self.width / 2.0;
        let h = self.height / 2.0;
        [
            Bounds {
                x: self.x,
                y: self.y,
                width: w,
                height: h,
            },
            Bounds {
                x: self.x + w,
                y: self.y,
                width: w,
                height: h,
            },
            Bounds {
                x: self.x,
                y: self.y + h,
                width: w,
                height: h,
            },
            Bounds {
                x: self.x + w,
                y: self.y + h,
                width: w,
                height: h,
            },
        ]
    }

    /// Splits at a vertical line `x = mid` into left and right halves.
    pub fn split_at_x(&self, mid: f64) -> (Bounds, Bounds) {
        (
            Bounds {
                x: self.x,
                y: self.y,
                width: mid - self.x,
                height: self.height,
            },
            Bounds {
                x: mid,
                y: self.y,
                width: self.right() - mid,
                height: self.height,
            },
        )
    }

    /// Splits at a horizontal line `y = mid` into top and bottom halves.
    pub fn split_at_y(&self, mid: f64) -> (Bounds, Bounds) {
        (
            Bounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: mid - self.y,
            },
            Bounds {
                x: self.x,
                y: mid,
                width: self.width,
                height: self.bottom() - mid,
            },
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: crate::config::DEFAULT_ARENA_WIDTH,
            height: crate::config::DEFAULT_ARENA_HEIGHT,
        }
    }
}
