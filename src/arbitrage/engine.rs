//! Two-leg arbitrage simulation engine
//!
//! Pure, read-only computation over two registry records: identical inputs
//! always produce the identical quote, and nothing here mutates state, so
//! there are no intermediate commit points to roll back.

use chrono::Utc;
use tracing::debug;

use crate::arbitrage::math::constant_product_output;
use crate::errors::EngineError;
use crate::pools::PoolRegistry;
use crate::types::{ArbitrageQuote, LiquidityPool, PoolKey, SwapLeg, TokenId};

/// Output of selling `amount_in` of `token_in` into one pool.
pub fn swap_output(
    pool: &LiquidityPool,
    token_in: &TokenId,
    amount_in: u128,
) -> Result<SwapLeg, EngineError> {
    let (reserve_in, reserve_out) =
        pool.reserves_for(token_in)
            .ok_or_else(|| EngineError::TokenMismatch {
                pool: pool.key(),
                token: token_in.to_string(),
            })?;

    if reserve_in == 0 || reserve_out == 0 {
        return Err(EngineError::ZeroReserve(pool.key()));
    }

    let amount_out = constant_product_output(amount_in, reserve_in, reserve_out, pool.fee_bps)?;
    let token_out = pool
        .token_out_for(token_in)
        .cloned()
        .ok_or_else(|| EngineError::TokenMismatch {
            pool: pool.key(),
            token: token_in.to_string(),
        })?;

    Ok(SwapLeg {
        token_out,
        amount_out,
    })
}

/// Route `amount_in` of `token_in` through `source` and then `dest`,
/// feeding leg 1's output token and amount into leg 2. A negative net
/// profit is a valid quote; only structural problems are errors.
pub fn simulate_arbitrage(
    registry: &PoolRegistry,
    source: &PoolKey,
    dest: &PoolKey,
    token_in: &TokenId,
    amount_in: u128,
) -> Result<ArbitrageQuote, EngineError> {
    let source_pool = registry
        .get(source)
        .ok_or_else(|| EngineError::PoolNotFound(source.clone()))?;
    let dest_pool = registry
        .get(dest)
        .ok_or_else(|| EngineError::PoolNotFound(dest.clone()))?;

    let leg1 = swap_output(source_pool, token_in, amount_in)?;
    let leg2 = swap_output(dest_pool, &leg1.token_out, leg1.amount_out)?;

    let final_out = i128::try_from(leg2.amount_out).map_err(|_| EngineError::Overflow)?;
    let invested = i128::try_from(amount_in).map_err(|_| EngineError::Overflow)?;
    let net_profit = final_out - invested;

    debug!(
        source = %source,
        dest = %dest,
        token_in = %token_in,
        amount_in,
        leg1_out = leg1.amount_out,
        leg2_out = leg2.amount_out,
        net_profit,
        "simulated two-leg route"
    );

    Ok(ArbitrageQuote {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        source: source.clone(),
        dest: dest.clone(),
        token_in: token_in.clone(),
        amount_in,
        leg1_out: leg1.amount_out,
        leg2_out: leg2.amount_out,
        net_profit,
        profitable: net_profit > 0,
    })
}
