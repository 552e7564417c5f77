//! Arbitrage quote types

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{PoolKey, TokenId};

/// Result of pushing an amount through one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapLeg {
    pub token_out: TokenId,
    pub amount_out: u128,
}

/// Outcome of a two-leg simulation. Transient: returned to the caller and
/// optionally appended to the audit trail, never written to the registry.
#[derive(Debug, Clone, Serialize)]
pub struct ArbitrageQuote {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source: PoolKey,
    pub dest: PoolKey,
    pub token_in: TokenId,
    pub amount_in: u128,
    pub leg1_out: u128,
    pub leg2_out: u128,
    /// Final output minus input; negative means the route loses money,
    /// which is a valid quote, not an error.
    pub net_profit: i128,
    pub profitable: bool,
}
