//! Floating-point element types accepted by the solvers.

use faer::traits::RealField;
use num_traits::Float;
use std::fmt::{Debug, Display};

/// A real scalar usable for every buffer in a single PLS1 call.
///
/// Implemented for `f32` and `f64`. All inputs and outputs of one fit share
/// the same precision. The `RealField` bound gives access to faer's zero
/// constructors and decompositions.
pub trait Real: Float + RealField + Debug + Display + Default + Send + Sync + 'static {
    /// Convert a count (row or column number) to this precision.
    fn from_usize(n: usize) -> Self;

    /// Convert a configuration value to this precision.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64` for summary statistics.
    fn as_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
