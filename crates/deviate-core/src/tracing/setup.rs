//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "DEVIATE_LOG";

/// Filter used when `DEVIATE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "deviate=info";

/// Initialize the Deviate tracing/logging system.
///
/// Reads `DEVIATE_LOG` for per-target log levels, e.g.
/// `DEVIATE_LOG=deviate_analysis=debug,deviate_core=warn`.
///
/// Idempotent: only the first call installs a subscriber. If another
/// subscriber is already installed globally, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
