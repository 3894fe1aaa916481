//! Live ranking of a large-cap universe with FMP data.
//!
//! This example demonstrates:
//! - Fetching two years of daily prices and current fundamentals from FMP
//! - Building the factor table and ranking with the tilted weights
//! - Printing the top five tickers and their standardized factors

use ronda::combine::FactorWeights;
use ronda::prelude::*;
use ronda_fmp::{FmpClient, FmpFundamentalsProvider, FmpPriceProvider};

/// Stock universe to rank.
const UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "JPM", "UNH", "JNJ",
];

/// Years of price history.
const LOOKBACK_YEARS: f64 = 2.0;

/// Number of tickers to show.
const TOP: usize = 5;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = FmpClient::from_env()
        .map_err(|_| "Failed to initialize FMP client. Set FMP_API_KEY environment variable.")?;

    let universe = Universe::new(UNIVERSE)?;
    println!("Ranking {} tickers...", universe.len());

    let ranked = rank_universe(
        &FmpPriceProvider::new(client.clone()),
        &FmpFundamentalsProvider::new(client),
        &universe,
        LOOKBACK_YEARS,
        Some(&FactorWeights::tilted()),
    )
    .await?;

    println!("\n{:<6} {:>10}   z-scores", "Symbol", "Composite");
    println!("{}", "-".repeat(60));
    for row in ranked.top(TOP) {
        let z: Vec<String> = row
            .z
            .iter()
            .map(|(factor, z)| match z {
                Some(z) => format!("{}={z:+.2}", factor.name()),
                None => format!("{}=n/a", factor.name()),
            })
            .collect();
        println!("{:<6} {:>10.3}   {}", row.symbol, row.composite_score, z.join(" "));
    }

    let dropped = universe.len() - ranked.len();
    if dropped > 0 {
        println!("\n{dropped} ticker(s) dropped for sparse data");
    }

    Ok(())
}
