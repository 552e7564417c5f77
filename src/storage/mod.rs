//! Data persistence and file operations

pub mod quotes;

pub use quotes::*;
