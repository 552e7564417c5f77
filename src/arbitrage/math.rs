//! Constant-product swap arithmetic
//!
//! All settlement math is integer-only with truncating division, mirroring
//! deterministic ledger semantics. Every multiplication and addition is
//! checked; an intermediate that leaves the 128-bit domain surfaces as
//! `Overflow` instead of wrapping.

use crate::errors::EngineError;

/// Basis point denominator: 10000 bps = 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Input amount net of the pool fee, truncated:
/// `amount_in * (10000 - fee_bps) / 10000`.
pub fn fee_adjusted_input(amount_in: u128, fee_bps: u16) -> Result<u128, EngineError> {
    let keep_bps = BPS_DENOMINATOR - u128::from(fee_bps);
    let scaled = amount_in
        .checked_mul(keep_bps)
        .ok_or(EngineError::Overflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

/// Single-swap output under x·y=k with the fee applied to the input leg:
/// `out = fee_adjusted * reserve_out / (reserve_in + fee_adjusted)`.
///
/// Callers must have already rejected zero reserves; the denominator is
/// nonzero whenever `reserve_in > 0`.
pub fn constant_product_output(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u16,
) -> Result<u128, EngineError> {
    let fee_adjusted = fee_adjusted_input(amount_in, fee_bps)?;
    let numerator = fee_adjusted
        .checked_mul(reserve_out)
        .ok_or(EngineError::Overflow)?;
    let denominator = reserve_in
        .checked_add(fee_adjusted)
        .ok_or(EngineError::Overflow)?;
    Ok(numerator / denominator)
}
