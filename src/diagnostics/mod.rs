//! Diagnostics for comparing PLS1 results.

mod deviation;

pub use deviation::max_absolute_deviation;
