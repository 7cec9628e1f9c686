//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "warn";

/// Setup logging for the binary. Output goes to stderr, away from the prompt.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();
}
