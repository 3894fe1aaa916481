//! Rank command implementation.

use anyhow::Result;
use ronda::pipeline::rank_universe;
use ronda_combine::FactorWeights;
use ronda_fmp::{FmpClient, FmpFundamentalsProvider, FmpPriceProvider, PriceHistoryConfig};
use ronda_traits::{COMPOSITE_SCORE, Factor, FactorTable, RankedRow, RankedTable, Universe};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::info;

/// Universe used when no tickers are given.
pub(crate) const DEFAULT_UNIVERSE: [&str; 9] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "JPM", "UNH", "JNJ",
];

/// Output format for ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables
    Text,
    /// JSON array of ranked rows
    Json,
}

/// Options for the rank command.
#[derive(Debug)]
pub(crate) struct RankOptions {
    pub(crate) tickers: Vec<String>,
    pub(crate) years: f64,
    pub(crate) weights: Option<FactorWeights>,
    pub(crate) top: usize,
    pub(crate) format: OutputFormat,
    pub(crate) min_observations: usize,
    pub(crate) rate_limit_delay_ms: u64,
}

/// Fetch data for the universe, rank it and print the result.
pub(crate) async fn rank(options: RankOptions) -> Result<()> {
    let universe = if options.tickers.is_empty() {
        Universe::new(DEFAULT_UNIVERSE)?
    } else {
        Universe::new(&options.tickers)?
    };

    let client = FmpClient::from_env()?;
    let prices = FmpPriceProvider::with_config(
        client.clone(),
        PriceHistoryConfig {
            min_observations: options.min_observations,
            rate_limit_delay_ms: options.rate_limit_delay_ms,
        },
    );
    let fundamentals =
        FmpFundamentalsProvider::new(client).with_rate_limit_delay(options.rate_limit_delay_ms);

    info!(tickers = universe.len(), years = options.years, "Ranking universe");
    let ranked = rank_universe(
        &prices,
        &fundamentals,
        &universe,
        options.years,
        options.weights.as_ref(),
    )
    .await?;

    match options.format {
        OutputFormat::Text => print!("{}", render_text(&ranked, options.top)),
        OutputFormat::Json => println!("{}", render_json(&ranked)?),
    }

    Ok(())
}

/// Formats an optional cell, with `-` for missing values.
fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

/// Renders the top `top` composite scores followed by the full table.
pub(crate) fn render_text(ranked: &RankedTable, top: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nTop {} by composite score", top.min(ranked.len()));
    let _ = writeln!(out, "{}", "─".repeat(30));
    let _ = writeln!(out, "{:<5} {:<10} {:>12}", "Rank", "Symbol", "Composite");
    for (i, row) in ranked.top(top).iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<10} {:>12.4}",
            i + 1,
            row.symbol,
            row.composite_score
        );
    }

    let columns = FactorTable::column_names();
    let _ = writeln!(out, "\nFactor table");
    let _ = write!(out, "{:<8}", "Symbol");
    for name in &columns {
        let _ = write!(out, " {name:>14}");
    }
    let _ = writeln!(out, " {COMPOSITE_SCORE:>16}");
    let _ = writeln!(out, "{}", "─".repeat(8 + 15 * columns.len() + 17));

    for row in ranked.rows() {
        let _ = write!(out, "{:<8}", row.symbol);
        for (_, value) in row.raw.iter().chain(row.z.iter()) {
            let _ = write!(out, " {:>14}", cell(value));
        }
        let _ = writeln!(out, " {:>16.4}", row.composite_score);
    }

    out
}

/// One ranked row in JSON output.
#[derive(Debug, Serialize)]
struct RankedRecord<'a> {
    rank: usize,
    symbol: &'a str,
    composite_score: f64,
    raw: BTreeMap<&'static str, Option<f64>>,
    z: BTreeMap<&'static str, Option<f64>>,
}

impl<'a> RankedRecord<'a> {
    fn new(rank: usize, row: &'a RankedRow) -> Self {
        Self {
            rank,
            symbol: &row.symbol,
            composite_score: row.composite_score,
            raw: row.raw.iter().map(|(f, v)| (Factor::name(f), v)).collect(),
            z: row.z.iter().map(|(f, v)| (Factor::z_name(f), v)).collect(),
        }
    }
}

/// Renders all ranked rows as a JSON array.
pub(crate) fn render_json(ranked: &RankedTable) -> Result<String> {
    let records: Vec<_> = ranked
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| RankedRecord::new(i + 1, row))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_combine::rank_stocks;
    use ronda_traits::FactorValues;

    fn ranked() -> RankedTable {
        let table = FactorTable::from_raw(vec![
            (
                "AAA".to_string(),
                FactorValues::from_fn(|f| (f != Factor::Size).then_some(1.0)),
            ),
            ("BBB".to_string(), FactorValues::from_fn(|_| Some(2.0))),
            ("CCC".to_string(), FactorValues::from_fn(|_| Some(3.0))),
        ])
        .unwrap();
        rank_stocks(&table, None).unwrap()
    }

    #[test]
    fn test_default_universe() {
        let universe = Universe::new(DEFAULT_UNIVERSE).unwrap();
        assert_eq!(universe.len(), 9);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&ranked(), 2);
        assert!(text.contains("Top 2 by composite score"));
        assert!(text.contains("momentum_6m_z"));
        assert!(text.contains(COMPOSITE_SCORE));

        let top_section: Vec<&str> = text.lines().skip(4).take(2).collect();
        assert!(top_section[0].contains("CCC"));
        assert!(top_section[1].contains("BBB"));

        let aaa = text.lines().filter(|l| l.starts_with("AAA")).count();
        assert_eq!(aaa, 1);
        assert!(text.lines().any(|l| l.starts_with("AAA") && l.contains(" -")));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&ranked()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["rank"], 1);
        assert_eq!(rows[0]["symbol"], "CCC");
        assert!(rows[2]["raw"]["size"].is_null());
        assert!(rows[0]["z"]["momentum_6m_z"].is_number());
    }
}
