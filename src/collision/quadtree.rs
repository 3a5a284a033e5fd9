use crate::collision::BroadPhase;
use crate::config::{DEFAULT_QUADTREE_CAPACITY, DEFAULT_QUADTREE_MAX_DEPTH};
use crate::core::body::Body;
use crate::core::bounds::Bounds;
use crate::core::geometry::DebugShape;
use crate::core::pair::{dedupe_pairs, CandidatePair};

/// Quadtree broad phase: recursive four-way region subdivision. A leaf
/// holding more than `capacity` bodies splits into equal quadrants (until
/// `max_depth`) and re-inserts its residents; a disk overlapping several
/// quadrants is inserted into each of them, so the leaf-level all-pairs
/// output needs the shared dedupe pass.
///
/// The tree is rebuilt from scratch on every query and owns its nodes
/// outright, so nothing dangles between ticks.
#[derive(Debug)]
pub struct QuadTree {
    pub capacity: usize,
    pub max_depth: usize,
    debug: Vec<DebugShape>,
}

struct Node {
    bounds: Bounds,
    depth: usize,
    residents: Vec<usize>,
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn new(bounds: Bounds, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            residents: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, index: usize, bodies: &[Body], capacity: usize, max_depth: usize) {
        let body = &bodies[index];
        if !self.bounds.overlaps_circle(body.position, body.radius) {
            return;
        }

        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.insert(index, bodies, capacity, max_depth);
            }
            return;
        }

        self.residents.push(index);
        if self.residents.len() <= capacity || self.depth >= max_depth {
            return;
        }

        let quadrants = self.bounds.quadrants();
        let depth = self.depth + 1;
        self.children = Some(Box::new(quadrants.map(|bounds| Node::new(bounds, depth))));
        for index in std::mem::take(&mut self.residents) {
            self.insert(index, bodies, capacity, max_depth);
        }
    }

    fn collect_pairs(&self, bodies: &[Body], pairs: &mut Vec<CandidatePair>) {
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.collect_pairs(bodies, pairs);
            }
            return;
        }
        for (i, &a) in self.residents.iter().enumerate() {
            for &b in &self.residents[i + 1..] {
                pairs.push(CandidatePair::new(bodies[a].id, bodies[b].id));
            }
        }
    }

    /// The split cross of every internal node.
    fn collect_lines(&self, lines: &mut Vec<DebugShape>) {
        let Some(children) = self.children.as_ref() else {
            return;
        };
        let mid_x = self.bounds.x + self.bounds.width / 2.0;
        let mid_y = self.bounds.y + self.bounds.height / 2.0;
        lines.push(DebugShape::line(
            self.bounds.x,
            mid_y,
            self.bounds.right(),
            mid_y,
        ));
        lines.push(DebugShape::line(
            mid_x,
            self.bounds.y,
            mid_x,
            self.bounds.bottom(),
        ));
        for child in children.iter() {
            child.collect_lines(lines);
        }
    }
}

impl QuadTree {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_QUADTREE_CAPACITY, DEFAULT_QUADTREE_MAX_DEPTH)
    }

    pub fn with_limits(capacity: usize, max_depth: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            max_depth,
            debug: Vec::new(),
        }
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for QuadTree {
    fn candidate_pairs(&mut self, bodies: &[Body], bounds: &Bounds) -> Vec<CandidatePair> {
        let mut root = Node::new(*bounds, 0);
        for index in 0..bodies.len() {
            root.insert(index, bodies, self.capacity, self.max_depth);
        }

        self.debug.clear();
        root.collect_lines(&mut self.debug);

        let mut pairs = Vec::new();
        root.collect_pairs(bodies, &mut pairs);
        dedupe_pairs(pairs)
    }

    fn debug_geometry(&self) -> &[DebugShape] {
        &self.debug
    }

    fn name(&self) -> &'static str {
        "quadtree"
    }
}
