use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Partition geometry a strategy hands to the host renderer after a query:
/// grid or split lines for the partitioning strategies, per-body axis strips
/// for sweep-and-prune. The core never draws anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DebugShape {
    Line { start: DVec2, end: DVec2 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl DebugShape {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line {
            start: DVec2::new(x1, y1),
            end: DVec2::new(x2, y2),
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
        }
    }
}
