//! Agreement diagnostics between two numeric results.

use crate::utils::Real;

/// Maximum absolute elementwise difference `max_i |a_i − b_i|`.
///
/// Used to compare the outputs of different PLS1 variants. The slices must
/// have equal length; an empty pair yields zero. NaN differences are skipped,
/// as with C `fmax`.
pub fn max_absolute_deviation<T: Real>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "deviation of unequal-length slices");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc.max((ai - bi).abs()))
}
