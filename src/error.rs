use thiserror::Error;

/// Errors surfaced to the caller when a constructor or setter receives an
/// invalid parameter. Degenerate numerical cases (zero-distance collision
/// normal, zero-motion wall sweep) are handled locally by the physics code
/// and never reach this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("body radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("body mass must be positive, got {0}")]
    InvalidMass(f64),

    #[error("fps must be at least 1, got {0}")]
    InvalidFps(f64),

    #[error("physics steps must be at least 1, got {0}")]
    InvalidPhysicsSteps(u32),

    #[error("bounds must have positive extent, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("grid must have at least one cell per axis, got {x_cells}x{y_cells}")]
    InvalidGridCells { x_cells: usize, y_cells: usize },
}
