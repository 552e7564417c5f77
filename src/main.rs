//! Arbitrage Router - Demo Driver
//!
//! Stands in for the hosting ledger: builds a router, registers the
//! canonical cross-exchange pool pair, and sweeps trade sizes through the
//! simulation engine.

use anyhow::Result;
use arb_router::*;
use tracing::{error, info};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🧭 Arbitrage Router v0.3.0 - Registry & Simulation Core");
    info!("📋 Configuration:");
    info!("   Owner: {}", config.owner_principal);
    info!("   Trade Size: {} units", config.trade_size);
    info!("   Persist Quotes: {}", config.persist_quotes);

    let mut router = Router::new(config.owner_principal.clone());
    let deployer = config.owner_principal.clone();

    // A trading principal operating under an Execute grant, the way an
    // off-chain bot identity would.
    let trader = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG.trader");
    router.grant_permission(&deployer, trader.clone(), PermissionLevel::Execute.ordinal())?;
    info!("🔑 Granted execute to {}", trader);

    // Canonical two-pool route: same pair priced differently on two DEXes.
    let token_x = TokenId::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.token-x");
    let token_y = TokenId::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.token-y");

    router.register_pool(
        &trader, "source-pool", "dex1",
        token_x.clone(), token_y.clone(),
        10_000, 5_000, 30,
    )?;
    router.register_pool(
        &trader, "dest-pool", "dex2",
        token_x.clone(), token_y.clone(),
        8_000, 6_000, 25,
    )?;

    info!("✅ Registered {} pools", router.registry().len());
    for (_, pool) in router.registry().iter() {
        utils::print_pool(pool);
    }

    // Sweep a few sizes around the configured trade size.
    let mut total_quotes = 0u64;
    let mut profitable_quotes = 0u64;
    let mut total_net_profit = 0i128;

    info!("\n🚀 Sweeping trade sizes through the route...\n");
    for multiplier in [1u128, 2, 5, 10] {
        let amount_in = config.trade_size.saturating_mul(multiplier);
        match router.simulate_arbitrage("source-pool", "dest-pool", &token_x, amount_in) {
            Ok(quote) => {
                total_quotes += 1;
                total_net_profit += quote.net_profit;
                utils::print_quote(&quote);

                if quote.profitable {
                    profitable_quotes += 1;
                }
                if config.persist_quotes {
                    if let Err(e) = storage::save_quote(&quote) {
                        error!("Failed to save quote: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("Simulation failed (code {}): {}", e.code(), e);
            }
        }
    }

    // Reserves moved on the source exchange; re-quote the same route.
    info!("\n🔄 Reserves shifted on dex1; re-quoting...\n");
    router.update_reserves(&trader, "source-pool", "dex1", 9_000, 6_000)?;
    match router.simulate_arbitrage("source-pool", "dest-pool", &token_x, config.trade_size) {
        Ok(quote) => {
            total_quotes += 1;
            total_net_profit += quote.net_profit;
            if quote.profitable {
                profitable_quotes += 1;
            }
            utils::print_quote(&quote);
            if config.persist_quotes {
                if let Err(e) = storage::save_quote(&quote) {
                    error!("Failed to save quote: {}", e);
                }
            }
        }
        Err(e) => error!("Simulation failed (code {}): {}", e.code(), e),
    }

    utils::print_session_stats(
        router.registry().len(),
        total_quotes,
        profitable_quotes,
        total_net_profit,
    );

    Ok(())
}
