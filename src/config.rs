//! Global configuration constants for the Broadphase Lab sandbox.

/// Default tick rate of the simulation loop (ticks per second).
pub const DEFAULT_FPS: f64 = 60.0;

/// Default number of physics substeps performed per tick.
pub const DEFAULT_PHYSICS_STEPS: u32 = 1;

/// Default arena width (matches the canonical 800x600 rendering surface).
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;

/// Default arena height.
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

/// Stride used to build the canonical key of a candidate pair
/// (`max_id * STRIDE + min_id`). Must exceed the largest live body id.
pub const PAIR_KEY_STRIDE: u64 = 1_000_000;

/// Default cell count per axis for the uniform-grid strategy.
pub const DEFAULT_GRID_CELLS: usize = 2;

/// Default body capacity of a quadtree leaf before it splits.
pub const DEFAULT_QUADTREE_CAPACITY: usize = 2;

/// Default maximum subdivision depth of the quadtree.
pub const DEFAULT_QUADTREE_MAX_DEPTH: usize = 6;

/// Default body count below which the alternating-axis partition stops splitting.
pub const DEFAULT_PARTITION_THRESHOLD: usize = 10;

/// Default maximum recursion depth of the alternating-axis partition.
pub const DEFAULT_PARTITION_MAX_DEPTH: usize = 10;

/// Smallest radius handed out by the random body factory.
pub const RANDOM_RADIUS_MIN: f64 = 10.0;

/// Largest radius handed out by the random body factory.
pub const RANDOM_RADIUS_MAX: f64 = 20.0;

/// Random bodies spawn with each velocity component in `[-LIMIT, LIMIT]`.
pub const RANDOM_SPEED_LIMIT: f64 = 100.0;
