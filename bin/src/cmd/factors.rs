//! Factors command implementation.

use ronda_factors::registry::{FactorCategory, available_categories, factors_by_category};

/// Display name of a category.
const fn category_name(category: FactorCategory) -> &'static str {
    match category {
        FactorCategory::Momentum => "Momentum",
        FactorCategory::Volatility => "Volatility",
        FactorCategory::Value => "Value",
        FactorCategory::Size => "Size",
    }
}

/// List the ranking factors, optionally filtered by category.
pub(crate) fn list_factors(category: Option<&str>, verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Ranking Factors                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for cat in available_categories() {
        let cat_name = category_name(cat);
        if let Some(filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        println!("{cat_name}: {}", cat.description());
        println!("{}", "-".repeat(60));

        for info in factors_by_category(&cat) {
            if verbose {
                let lookback = if info.requires_fundamentals {
                    "fundamentals".to_string()
                } else {
                    format!("{} rows", info.lookback)
                };
                let direction = if info.higher_is_better {
                    "higher is better"
                } else {
                    "lower is better"
                };
                println!("  {:14} {:16} {}", info.name, info.z_name, info.description);
                println!("  {:14} ({lookback}, {direction})", "");
            } else {
                println!("  {:14} {}", info.name, info.z_name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed factor descriptions.\n");
    }
    println!("Weights are keyed by the standardized (_z) column names.");
}
