//! Ronda CLI binary.
//!
//! Provides the command-line interface for the Ronda factor ranking engine.

mod cmd;
mod logging;
mod weights;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cmd::rank::{OutputFormat, RankOptions};
use ronda_combine::WeightPreset;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Cross-sectional multi-factor equity ranking", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Weight 1.0 on every factor
    Equal,
    /// Momentum and value tilt, volatility penalty
    Tilted,
}

impl From<Preset> for WeightPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Equal => Self::Equal,
            Preset::Tilted => Self::Tilted,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a universe of tickers by composite factor score
    Rank {
        /// Ticker symbols (defaults to a large-cap sample universe)
        #[arg(value_delimiter = ',')]
        tickers: Vec<String>,

        /// Years of price history to download
        #[arg(short, long, default_value_t = 2.0)]
        years: f64,

        /// Named weight preset
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// JSON file mapping standardized factor names to weights
        #[arg(short = 'f', long)]
        weights_file: Option<PathBuf>,

        /// Weight for one standardized factor, e.g. momentum_6m_z=0.5 (repeatable)
        #[arg(short, long = "weight", value_parser = weights::parse_weight)]
        weights: Vec<(String, f64)>,

        /// Number of top-ranked tickers to highlight
        #[arg(short, long, default_value_t = 5)]
        top: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Drop tickers with fewer daily prices than this
        #[arg(long, default_value_t = 50)]
        min_observations: usize,

        /// Pause between per-ticker requests in milliseconds
        #[arg(long, default_value_t = 0)]
        rate_limit_delay_ms: u64,
    },

    /// List the ranking factors
    Factors {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_format == LogFormat::Json);

    match cli.command {
        Commands::Rank {
            tickers,
            years,
            preset,
            weights_file,
            weights,
            top,
            format,
            min_observations,
            rate_limit_delay_ms,
        } => {
            let weights =
                weights::resolve_weights(preset.map(Into::into), weights_file.as_deref(), &weights)?;
            cmd::rank::rank(RankOptions {
                tickers,
                years,
                weights,
                top,
                format,
                min_observations,
                rate_limit_delay_ms,
            })
            .await?;
        }
        Commands::Factors { category, verbose } => {
            cmd::factors::list_factors(category.as_deref(), verbose);
        }
    }

    Ok(())
}
