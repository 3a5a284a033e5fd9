//! Utility helpers shared across the crate.

pub mod logging;

pub use logging::{warn_if_tick_budget_exceeded, ScopedTimer};
