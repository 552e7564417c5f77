//! Settings and environment variable handling

use std::env;

use crate::types::Principal;

// Demo scenario bounds
pub const MIN_TRADE_SIZE: u128 = 1;
pub const MAX_TRADE_SIZE: u128 = 1_000_000_000_000;
pub const DEFAULT_TRADE_SIZE: u128 = 1_000;

/// Identity used as the deployer/owner when none is configured.
pub const DEFAULT_OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.deployer";

#[derive(Debug, Clone)]
pub struct Config {
    /// Deployer identity; root of all permission grants.
    pub owner_principal: Principal,
    /// Input amount for the demo sweep, in token base units.
    pub trade_size: u128,
    /// Append simulated quotes to the JSONL audit trail.
    pub persist_quotes: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            owner_principal: Principal::new(
                env::var("OWNER_PRINCIPAL").unwrap_or_else(|_| DEFAULT_OWNER.to_string()),
            ),
            trade_size: env::var("TRADE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TRADE_SIZE)
                .max(MIN_TRADE_SIZE)
                .min(MAX_TRADE_SIZE),
            persist_quotes: env::var("PERSIST_QUOTES")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}
