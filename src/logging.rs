//! Diagnostics on stderr via `tracing`.
//!
//! The filter comes from `SCOOP_SEARCH_LOG` (same syntax as `RUST_LOG`). Without it only
//! warnings are shown, or debug output of this crate with `--verbose`.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SCOOP_SEARCH_LOG";

static INIT: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "scoop_search=debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .with_thread_ids(verbose);

        if let Err(e) = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
        {
            eprintln!("Warning: logging disabled: {e}");
        }
    });
}
