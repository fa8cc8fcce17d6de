//! Utility functions.

mod matrix;
mod scalar;

pub use matrix::{
    center_columns, center_vector, column_norm, dot, mat_vec, norm, transpose_mat_vec,
};
pub use scalar::Real;
