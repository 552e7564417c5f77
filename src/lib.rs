//! Arbitrage routing registry and simulation core
//!
//! Tracks liquidity pools across exchanges, prices two-leg routes with
//! constant-product math, and gates every mutation behind an ordered
//! permission model. The hosting runtime serializes calls, so everything
//! here is synchronous and deterministic: one call commits fully or not
//! at all.

pub mod config;
pub mod types;
pub mod errors;
pub mod permissions;
pub mod pools;
pub mod arbitrage;
pub mod router;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{RouterError, RouterResult};
pub use router::Router;
pub use types::*;
