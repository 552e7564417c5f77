//! Display and printing utilities

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use crate::types::{ArbitrageQuote, LiquidityPool};

/// Fee rate as a human-readable percentage, e.g. 30 bps -> 0.30.
pub fn bps_to_percent(fee_bps: u16) -> Decimal {
    Decimal::from(fee_bps) / dec!(100)
}

/// Final output per unit invested, for quick route comparison in logs.
/// Display only; settlement math stays integer.
pub fn return_ratio(quote: &ArbitrageQuote) -> Decimal {
    let out = Decimal::from_u128(quote.leg2_out).unwrap_or_default();
    let invested = Decimal::from_u128(quote.amount_in).unwrap_or_default();
    if invested.is_zero() {
        return Decimal::ZERO;
    }
    out / invested
}

pub fn print_pool(pool: &LiquidityPool) {
    info!("📍 Pool {}", pool.key());
    info!("   Pair: {} / {}", pool.token_a, pool.token_b);
    info!("   Reserves: {} / {}", pool.reserve_a, pool.reserve_b);
    info!("   Fee: {} bps ({:.2}%)", pool.fee_bps, bps_to_percent(pool.fee_bps));
}

pub fn print_quote(quote: &ArbitrageQuote) {
    if quote.profitable {
        warn!("\n🎯 PROFITABLE ROUTE #{}", quote.id);
    } else {
        info!("\n📉 Unprofitable route #{}", quote.id);
    }
    info!("📋 Route: {} -> {}", quote.source, quote.dest);
    info!("💰 Legs:");
    info!("   In:  {} {}", quote.amount_in, quote.token_in);
    info!("   Leg 1 out: {}", quote.leg1_out);
    info!("   Leg 2 out: {}", quote.leg2_out);
    info!("   Net profit: {}", quote.net_profit);
    info!("   Return ratio: {:.4}", return_ratio(quote));
}

pub fn print_session_stats(
    pools_registered: usize,
    total_quotes: u64,
    profitable_quotes: u64,
    total_net_profit: i128,
) {
    info!("\n📊 Session Statistics");
    info!("   Pools registered: {}", pools_registered);
    info!("   Quotes simulated: {}", total_quotes);
    info!("   Profitable: {}", profitable_quotes);
    info!("   Hit rate: {:.1}%",
        if total_quotes > 0 {
            (profitable_quotes as f64 / total_quotes as f64) * 100.0
        } else {
            0.0
        }
    );
    info!("   Aggregate net profit: {}", total_net_profit);
    info!("");
}
