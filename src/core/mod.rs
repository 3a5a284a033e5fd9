//! Core types describing simulation entities and shared data.

pub mod body;
pub mod bounds;
pub mod color;
pub mod geometry;
pub mod pair;

pub use body::{Body, BodyFactory};
pub use bounds::Bounds;
pub use color::Color;
pub use geometry::DebugShape;
pub use pair::{dedupe_pairs, CandidatePair};
