//! Diagnostic logging setup
//!
//! Logs go to stderr so JSON and CSV written to stdout stay parseable.
//! `RUST_LOG` takes precedence over the default directive.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "budget_pacer=warn";
const VERBOSE_DIRECTIVE: &str = "budget_pacer=debug";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            VERBOSE_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
