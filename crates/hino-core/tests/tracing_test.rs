//! Tests for the Hino tracing/observability system.

use std::sync::Mutex;

use hino_core::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use hino_core::tracing::setup::init_tracing;
use tracing_subscriber::EnvFilter;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_hino_log_directives_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let directives = "hino_analysis::model=debug,hino_core=warn";
    assert!(EnvFilter::try_new(directives).is_ok());
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    assert!(EnvFilter::try_new("hino=notalevel").is_err());

    std::env::set_var(LOG_ENV_VAR, directives);
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
    tracing::debug!(target: "hino_analysis::model", "directive-filtered event");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
    tracing::info!(attempt = 3, "tracing still usable after repeated init");
}
