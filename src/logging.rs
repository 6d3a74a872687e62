//! Tracing setup
//!
//! Diagnostics go to stderr so command output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the ledger logs warnings and errors,
/// or everything down to debug when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("expense_ledger={}", default_level)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
