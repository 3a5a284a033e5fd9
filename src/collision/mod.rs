//! Broad-phase collision detection strategies.
//!
//! A broad phase quickly proposes *candidate* colliding pairs from the
//! current body set without computing exact disk geometry; the resolver then
//! decides true overlap. Every strategy here is rebuilt from scratch on each
//! query, so nothing goes stale as bodies move between ticks.

pub mod axis_partition;
pub mod naive;
pub mod quadtree;
pub mod sweep_prune;
pub mod uniform_grid;

pub use axis_partition::AlternatingAxisPartition;
pub use naive::Naive;
pub use quadtree::QuadTree;
pub use sweep_prune::SweepAndPrune;
pub use uniform_grid::UniformGrid;

use crate::core::body::Body;
use crate::core::bounds::Bounds;
use crate::core::geometry::DebugShape;
use crate::core::pair::CandidatePair;

/// Interface shared by all broad-phase strategies.
///
/// Implementations may emit false positives (bounding-region overlap without
/// disk overlap) but never false negatives: every truly overlapping pair
/// must appear in the deduplicated output. Empty and single-body inputs
/// yield an empty candidate list.
pub trait BroadPhase {
    /// Rebuilds the strategy's spatial structure from `bodies` and returns
    /// the deduplicated candidate pairs.
    fn candidate_pairs(&mut self, bodies: &[Body], bounds: &Bounds) -> Vec<CandidatePair>;

    /// Partition geometry from the most recent query, for the host's debug
    /// overlay. Empty for strategies with nothing to show.
    fn debug_geometry(&self) -> &[DebugShape];

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}
