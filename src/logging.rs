//! Diagnostics for the predictor, on stderr.
//!
//! Everything the user is meant to read (prompts, outcomes, the report) is
//! plain stdout text. Tracing only carries what helps when something looks
//! off:
//!
//! - `debug`: each rejected credit entry and why, total mismatches, chart or
//!   file failures that were already shown to the user
//! - `info`: each recorded student, session end, the saved data file
//! - `warn`: the console stream failing mid-session
//!
//! The default level is `warn`, so an ordinary run prints nothing extra.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=progression_predictor=debug progression-predictor
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // Ignore the error from a second install; the first subscriber stays
    let _ = tracing_subscriber::registry().with(filter).with(stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::debug!("logging initialized");
    }
}
