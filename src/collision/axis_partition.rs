use crate::collision::BroadPhase;
use crate::config::{DEFAULT_PARTITION_MAX_DEPTH, DEFAULT_PARTITION_THRESHOLD};
use crate::core::body::Body;
use crate::core::bounds::Bounds;
use crate::core::geometry::DebugShape;
use crate::core::pair::{dedupe_pairs, CandidatePair};

/// k-d-style recursive splitter that alternates axes per level. Each split
/// picks the midpoint of the min/max body centers along the current axis;
/// a disk whose extent crosses the split line is handed to both children.
/// Recursion stops once a group shrinks to `threshold` bodies or `max_depth`
/// is reached, at which point the group contributes its all-pairs set.
///
/// Degenerate inputs (every body at one point) never separate, so
/// `max_depth` is what bounds the recursion.
#[derive(Debug)]
pub struct AlternatingAxisPartition {
    pub threshold: usize,
    pub max_depth: usize,
    pub start_vertical: bool,
    debug: Vec<DebugShape>,
}

impl AlternatingAxisPartition {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_PARTITION_THRESHOLD, DEFAULT_PARTITION_MAX_DEPTH)
    }

    pub fn with_limits(threshold: usize, max_depth: usize) -> Self {
        Self {
            threshold,
            max_depth,
            start_vertical: true,
            debug: Vec::new(),
        }
    }

    fn subdivide(
        &mut self,
        bodies: &[Body],
        group: Vec<usize>,
        depth: usize,
        vertical: bool,
        bounds: Bounds,
        pairs: &mut Vec<CandidatePair>,
    ) {
        if group.len() <= self.threshold || depth >= self.max_depth {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    pairs.push(CandidatePair::new(bodies[a].id, bodies[b].id));
                }
            }
            return;
        }

        let coordinate = |index: usize| {
            if vertical {
                bodies[index].position.x
            } else {
                bodies[index].position.y
            }
        };

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &index in &group {
            min = min.min(coordinate(index));
            max = max.max(coordinate(index));
        }
        let mid = (min + max) / 2.0;

        let mut near = Vec::new();
        let mut far = Vec::new();
        for &index in &group {
            let radius = bodies[index].radius;
            if coordinate(index) - radius <= mid {
                near.push(index);
            }
            if coordinate(index) + radius >= mid {
                far.push(index);
            }
        }

        let (near_bounds, far_bounds) = if vertical {
            self.debug
                .push(DebugShape::line(mid, bounds.y, mid, bounds.bottom()));
            bounds.split_at_x(mid)
        } else {
            self.debug
                .push(DebugShape::line(bounds.x, mid, bounds.right(), mid));
            bounds.split_at_y(mid)
        };

        self.subdivide(bodies, near, depth + 1, !vertical, near_bounds, pairs);
        self.subdivide(bodies, far, depth + 1, !vertical, far_bounds, pairs);
    }
}

impl Default for AlternatingAxisPartition {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for AlternatingAxisPartition {
    fn candidate_pairs(&mut self, bodies: &[Body], bounds: &Bounds) -> Vec<CandidatePair> {
        self.debug.clear();
        let mut pairs = Vec::new();
        let group: Vec<usize> = (0..bodies.len()).collect();
        let start_vertical = self.start_vertical;
        self.subdivide(bodies, group, 0, start_vertical, *bounds, &mut pairs);
        dedupe_pairs(pairs)
    }

    fn debug_geometry(&self) -> &[DebugShape] {
        &self.debug
    }

    fn name(&self) -> &'static str {
        "alternating_axis_partition"
    }
}
