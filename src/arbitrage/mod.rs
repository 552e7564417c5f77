//! Two-leg arbitrage simulation

pub mod engine;
pub mod math;

pub use engine::*;
pub use math::*;
