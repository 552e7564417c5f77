//! Liquidity pool records

use serde::{Deserialize, Serialize};

use super::{PoolKey, TokenId};

/// Maximum fee: 10000 bps = 100%.
pub const MAX_FEE_BPS: u16 = 10_000;

/// One recorded pool on one exchange. Reserves are integer token base
/// units in the ledger's 128-bit uint domain; no fractional amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPool {
    pub pool_id: String,
    pub dex_id: String,
    pub token_a: TokenId,
    pub token_b: TokenId,
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub fee_bps: u16,
}

impl LiquidityPool {
    pub fn key(&self) -> PoolKey {
        PoolKey::new(self.pool_id.clone(), self.dex_id.clone())
    }

    pub fn contains_token(&self, token: &TokenId) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Reserves oriented for a swap that sells `token_in`:
    /// `(reserve_in, reserve_out)`. `None` when the token is not in the pair.
    pub fn reserves_for(&self, token_in: &TokenId) -> Option<(u128, u128)> {
        if *token_in == self.token_a {
            Some((self.reserve_a, self.reserve_b))
        } else if *token_in == self.token_b {
            Some((self.reserve_b, self.reserve_a))
        } else {
            None
        }
    }

    /// The token received when selling `token_in` into this pool.
    pub fn token_out_for(&self, token_in: &TokenId) -> Option<&TokenId> {
        if *token_in == self.token_a {
            Some(&self.token_b)
        } else if *token_in == self.token_b {
            Some(&self.token_a)
        } else {
            None
        }
    }

    /// A pool is quotable only when both sides hold liquidity.
    pub fn has_liquidity(&self) -> bool {
        self.reserve_a > 0 && self.reserve_b > 0
    }
}
