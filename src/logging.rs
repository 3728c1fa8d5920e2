//! Diagnostics for bypassh itself
//!
//! Everything goes to stderr, which is shared with the proxied ssh session,
//! so only warnings are shown unless `BYPASSH_LOG` asks for more
//! (e.g. `BYPASSH_LOG=bypassh=debug`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BYPASSH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize the logging system
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}
