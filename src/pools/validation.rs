//! Pool record validation

use crate::errors::RegistryError;
use crate::types::{LiquidityPool, MAX_FEE_BPS, TokenId};

pub fn validate_token_pair(token_a: &TokenId, token_b: &TokenId) -> Result<(), RegistryError> {
    if token_a == token_b {
        return Err(RegistryError::InvalidTokenPair(token_a.to_string()));
    }
    Ok(())
}

pub fn validate_fee(fee_bps: u16) -> Result<(), RegistryError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(RegistryError::InvalidFee(fee_bps));
    }
    Ok(())
}

/// Full precondition check for a record about to enter the registry.
/// Zero reserves are deliberately allowed here; such a pool is registrable
/// but refuses simulation until reserves arrive.
pub fn validate_pool(pool: &LiquidityPool) -> Result<(), RegistryError> {
    validate_token_pair(&pool.token_a, &pool.token_b)?;
    validate_fee(pool.fee_bps)?;
    Ok(())
}
