use crate::collision::BroadPhase;
use crate::core::body::Body;
use crate::core::bounds::Bounds;
use crate::core::geometry::DebugShape;
use crate::core::pair::CandidatePair;

/// All-pairs `O(n^2)` baseline. Emits every `i < j` pair exactly once, so
/// its output is trivially duplicate-free and serves as the correctness
/// reference for the other strategies.
#[derive(Debug, Default)]
pub struct Naive;

impl Naive {
    pub fn new() -> Self {
        Self
    }
}

impl BroadPhase for Naive {
    fn candidate_pairs(&mut self, bodies: &[Body], _bounds: &Bounds) -> Vec<CandidatePair> {
        let mut pairs = Vec::with_capacity(bodies.len().saturating_sub(1) * bodies.len() / 2);
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                pairs.push(CandidatePair::new(a.id, b.id));
            }
        }
        pairs
    }

    fn debug_geometry(&self) -> &[DebugShape] {
        &[]
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
