use crate::collision::BroadPhase;
use crate::core::body::Body;
use crate::core::bounds::Bounds;
use crate::core::geometry::DebugShape;
use crate::core::pair::{dedupe_pairs, CandidatePair};
use crate::error::SimulationError;

/// Uniform grid: the arena is partitioned into a fixed `x_cells * y_cells`
/// lattice and every body is inserted into each cell its bounding box
/// overlaps. Straddling a cell seam therefore costs duplicate emissions
/// rather than missed pairs; duplicates are collapsed by canonical key
/// before the list is returned.
///
/// Cell resident lists are rebuilt on every query. A 1x1 grid degenerates
/// into the naive all-pairs scan.
#[derive(Debug)]
pub struct UniformGrid {
    x_cells: usize,
    y_cells: usize,
    cells: Vec<Vec<usize>>,
    debug: Vec<DebugShape>,
}

impl UniformGrid {
    pub fn new(x_cells: usize, y_cells: usize) -> Result<Self, SimulationError> {
        if x_cells == 0 || y_cells == 0 {
            return Err(SimulationError::InvalidGridCells { x_cells, y_cells });
        }
        Ok(Self {
            x_cells,
            y_cells,
            cells: vec![Vec::new(); x_cells * y_cells],
            debug: Vec::new(),
        })
    }

    pub fn x_cells(&self) -> usize {
        self.x_cells
    }

    pub fn y_cells(&self) -> usize {
        self.y_cells
    }

    /// Cell index range `[min, max]` covered by an interval, clamped to the
    /// grid. Bodies partially outside the bounds land in the border cells.
    fn cell_span(origin: f64, cell_extent: f64, cell_count: usize, min: f64, max: f64) -> (usize, usize) {
        let clamp = |value: f64| {
            let cell = ((value - origin) / cell_extent).floor();
            (cell.max(0.0) as usize).min(cell_count - 1)
        };
        (clamp(min), clamp(max))
    }

    fn insert_all(&mut self, bodies: &[Body], bounds: &Bounds) {
        for cell in &mut self.cells {
            cell.clear();
        }

        let cell_width = bounds.width / self.x_cells as f64;
        let cell_height = bounds.height / self.y_cells as f64;

        for (index, body) in bodies.iter().enumerate() {
            let (min, max) = body.aabb();
            let (x0, x1) = Self::cell_span(bounds.x, cell_width, self.x_cells, min.x, max.x);
            let (y0, y1) = Self::cell_span(bounds.y, cell_height, self.y_cells, min.y, max.y);
            for x in x0..=x1 {
                for y in y0..=y1 {
                    self.cells[x * self.y_cells + y].push(index);
                }
            }
        }
    }

    fn rebuild_debug(&mut self, bounds: &Bounds) {
        self.debug.clear();
        let cell_width = bounds.width / self.x_cells as f64;
        let cell_height = bounds.height / self.y_cells as f64;
        for x in 1..self.x_cells {
            let line_x = bounds.x + x as f64 * cell_width;
            self.debug
                .push(DebugShape::line(line_x, bounds.y, line_x, bounds.bottom()));
        }
        for y in 1..self.y_cells {
            let line_y = bounds.y + y as f64 * cell_height;
            self.debug
                .push(DebugShape::line(bounds.x, line_y, bounds.right(), line_y));
        }
    }
}

impl BroadPhase for UniformGrid {
    fn candidate_pairs(&mut self, bodies: &[Body], bounds: &Bounds) -> Vec<CandidatePair> {
        self.insert_all(bodies, bounds);
        self.rebuild_debug(bounds);

        let mut pairs = Vec::new();
        for cell in &self.cells {
            for (i, &a) in cell.iter().enumerate() {
                for &b in &cell[i + 1..] {
                    pairs.push(CandidatePair::new(bodies[a].id, bodies[b].id));
                }
            }
        }
        dedupe_pairs(pairs)
    }

    fn debug_geometry(&self) -> &[DebugShape] {
        &self.debug
    }

    fn name(&self) -> &'static str {
        "uniform_grid"
    }
}
