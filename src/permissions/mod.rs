//! Permission store consulted by every mutating operation

pub mod store;

pub use store::*;
