//! End-to-end ranking: fetch, build factors, rank.

use ronda_combine::{FactorWeights, rank_stocks};
use ronda_factors::{FactorConfig, compute_factor_table_with};
use ronda_traits::{
    FundamentalsProvider, PriceProvider, RankedTable, Result, RondaError, Universe,
};
use tracing::{info, warn};

/// Ranks `universe` with the default [`FactorConfig`].
///
/// See [`rank_universe_with`].
///
/// # Errors
///
/// Fails if either provider fails, if the price history is too short, or if
/// no ticker has enough factors to be ranked.
pub async fn rank_universe<P, F>(
    prices: &P,
    fundamentals: &F,
    universe: &Universe,
    lookback_years: f64,
    weights: Option<&FactorWeights>,
) -> Result<RankedTable>
where
    P: PriceProvider,
    F: FundamentalsProvider,
{
    rank_universe_with(
        prices,
        fundamentals,
        universe,
        lookback_years,
        weights,
        &FactorConfig::default(),
    )
    .await
}

/// Fetches prices and fundamentals for `universe`, builds the factor table
/// and ranks it.
///
/// Both providers are queried concurrently. Everything after the fetch is
/// synchronous. `weights` of `None` means equal weights.
///
/// # Errors
///
/// Returns the first provider error, or
/// [`RondaError::InsufficientHistory`](ronda_traits::RondaError::InsufficientHistory)
/// if the price table is shorter than `config` requires, and
/// [`RondaError::NoDataAvailable`] if every ticker is dropped for having
/// fewer than `config.min_factors` factors.
pub async fn rank_universe_with<P, F>(
    prices: &P,
    fundamentals: &F,
    universe: &Universe,
    lookback_years: f64,
    weights: Option<&FactorWeights>,
    config: &FactorConfig,
) -> Result<RankedTable>
where
    P: PriceProvider,
    F: FundamentalsProvider,
{
    let (prices, fundamentals) = tokio::join!(
        prices.get_price_history(universe, lookback_years),
        fundamentals.get_fundamentals(universe),
    );
    let (prices, fundamentals) = (prices?, fundamentals?);
    info!(
        requested = universe.len(),
        priced = prices.width(),
        rows = prices.height(),
        "Fetched market data"
    );

    let factors = compute_factor_table_with(&prices, &fundamentals, config)?;
    if factors.is_empty() {
        warn!(
            priced = prices.width(),
            min_factors = config.min_factors,
            "No ticker has enough factors to rank"
        );
        return Err(RondaError::NoDataAvailable(format!(
            "none of {} priced tickers has at least {} factors",
            prices.width(),
            config.min_factors
        )));
    }
    info!(tickers = factors.len(), "Computed factor table");

    let ranked = rank_stocks(&factors, weights)?;
    info!(tickers = ranked.len(), "Ranked universe");

    Ok(ranked)
}
