//! Deterministic decay-chain simulation core.
//!
//! Pure per-interval stepping over an immutable reference table, plus the
//! driver that folds steps into recorded time series.

pub mod driver;
pub mod isotope;
pub mod step;
