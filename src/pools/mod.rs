//! Pool registry and record validation

pub mod registry;
pub mod validation;

pub use registry::*;
pub use validation::*;
