//! Core data types and structures

pub mod ids;
pub mod pools;
pub mod permissions;
pub mod quotes;

pub use ids::*;
pub use pools::*;
pub use permissions::*;
pub use quotes::*;
