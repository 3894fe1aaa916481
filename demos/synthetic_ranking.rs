//! Ranking a synthetic universe without network access.
//!
//! This example demonstrates:
//! - Building price and fundamentals tables by hand
//! - Computing returns and the factor table
//! - Comparing equal-weight, tilted and custom rankings

use ronda::combine::{FactorWeights, rank_stocks};
use ronda::factors::{compute_factor_table, compute_returns};
use ronda::traits::Fundamentals;
use ronda::{Date, FundamentalsTable, PriceTable, RankedTable};

/// Trading days of synthetic history.
const DAYS: usize = 160;

/// (ticker, daily drift, daily swing, P/E, P/B, market cap)
const UNIVERSE: &[(&str, f64, f64, f64, f64, f64)] = &[
    ("ALFA", 0.0012, 0.010, 28.0, 6.0, 3.0e11),
    ("BETA", 0.0004, 0.015, 14.0, 1.8, 8.0e10),
    ("GAMA", -0.0006, 0.025, 9.0, 1.1, 2.0e10),
    ("DELT", 0.0008, 0.030, 45.0, 9.5, 6.0e11),
    ("EPSI", 0.0000, 0.008, 18.0, 2.5, 1.5e11),
];

fn prices() -> Result<PriceTable, Box<dyn std::error::Error>> {
    let start = Date::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let dates = start.iter_days().take(DAYS).collect();

    let columns = UNIVERSE
        .iter()
        .map(|&(_, drift, swing, ..)| {
            let mut price = 100.0;
            (0..DAYS)
                .map(|t| {
                    if t > 0 {
                        let sign = if t % 2 == 0 { 1.0 } else { -1.0 };
                        price *= 1.0 + drift + sign * swing;
                    }
                    Some(price)
                })
                .collect()
        })
        .collect();
    let symbols = UNIVERSE.iter().map(|u| u.0.to_string()).collect();

    Ok(PriceTable::new(dates, symbols, columns)?)
}

fn fundamentals() -> Result<FundamentalsTable, Box<dyn std::error::Error>> {
    Ok(FundamentalsTable::new(UNIVERSE.iter().map(
        |&(symbol, _, _, pe, pb, cap)| {
            (
                symbol.to_string(),
                Fundamentals::new(Some(pe), Some(pb), Some(cap)),
            )
        },
    ))?)
}

fn print_ranking(title: &str, ranked: &RankedTable) {
    println!("\n{title}");
    println!("{}", "-".repeat(30));
    for (i, row) in ranked.rows().iter().enumerate() {
        println!("{:>2}. {:<6} {:>10.3}", i + 1, row.symbol, row.composite_score);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prices = prices()?;
    let fundamentals = fundamentals()?;

    let returns = compute_returns(&prices);
    println!(
        "{} price rows, {} return rows, {} tickers",
        prices.height(),
        returns.height(),
        prices.width()
    );

    let factors = compute_factor_table(&prices, &fundamentals)?;

    print_ranking("Equal weights", &rank_stocks(&factors, None)?);
    print_ranking("Tilted weights", &rank_stocks(&factors, Some(&FactorWeights::tilted()))?);

    let custom = FactorWeights::from_names([("momentum_6m_z", 1.0), ("vol_3m_z", -1.0)]);
    print_ranking("Risk-adjusted momentum", &rank_stocks(&factors, Some(&custom.weights))?);

    Ok(())
}
