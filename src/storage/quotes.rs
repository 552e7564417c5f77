//! Simulated quote audit trail

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::types::ArbitrageQuote;

/// Append a quote to the daily JSONL file. The trail is an operator aid;
/// the registry itself never stores quotes.
pub fn save_quote(quote: &ArbitrageQuote) -> Result<()> {
    let filename = format!("output/quotes/quotes_{}.jsonl", Utc::now().format("%Y-%m-%d"));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(quote)?)?;

    info!(
        quote_id = %quote.id,
        route = %format!("{} -> {}", quote.source, quote.dest),
        net_profit = quote.net_profit,
        profitable = quote.profitable,
        "Saved simulated quote"
    );

    Ok(())
}
