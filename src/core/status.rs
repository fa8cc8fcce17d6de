//! Numeric status codes for callers that speak the legacy return-code protocol.

use crate::solvers::PlsError;

/// Status code returned by the buffer entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    /// Success.
    NoError = 0,
    /// Component count outside `[1, columnCount]` or malformed buffers.
    UncorrectArgumentsError = 1,
    /// Numerical degeneracy during extraction or a singular assembly matrix.
    MethodError = 2,
}

impl StatusCode {
    /// Status code for the outcome of a call.
    pub fn of<R>(result: &Result<R, PlsError>) -> Self {
        match result {
            Ok(_) => StatusCode::NoError,
            Err(err) => err.status(),
        }
    }

    /// Raw integer value.
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::NoError
    }
}

impl From<&PlsError> for StatusCode {
    fn from(err: &PlsError) -> Self {
        err.status()
    }
}
