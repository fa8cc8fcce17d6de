//! PLS1 estimators and their building blocks.

mod assembly;
mod extract;
mod pls;
mod preprocess;
mod traits;

pub use pls::{FittedPls1, Pls1Algorithm, Pls1Regressor, Pls1RegressorBuilder};
pub use preprocess::Standardization;
pub use traits::{FittedRegressor, PlsError, Regressor};
