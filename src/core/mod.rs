//! Core types shared by the PLS1 solvers.

mod result;
mod status;

pub use result::FitSummary;
pub use status::StatusCode;
