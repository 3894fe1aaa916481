//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Library modules that are capped at `warn`.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

/// Filter from `RUST_LOG` if set, otherwise `log_level` with noisy modules
/// capped at `warn`.
fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }

    EnvFilter::new(directives)
}

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// carries command output.
pub(crate) fn init_logging(log_level: &str, json: bool) {
    let subscriber = tracing_subscriber::registry().with(build_filter(log_level));

    if json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_target(false)
            .with_writer(std::io::stderr);
        let _ = subscriber.with(fmt_layer).try_init();
    }

    tracing::debug!(log_level, json, "Logging initialized");
}
