//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the Hino tracing/logging system.
///
/// Reads the `HINO_LOG` environment variable for per-module log levels.
/// Format: `HINO_LOG=hino_analysis::model=debug,hino_core=warn`
///
/// Falls back to `hino=info` if `HINO_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs the subscriber. A subscriber
/// installed by the host application beforehand is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
