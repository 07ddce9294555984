//! Shared constants for the Hino outlier detector.

/// Hino version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "hino.toml";

/// User config directory, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".hino";

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "HINO_LOG";

/// Filter used when `HINO_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "hino=info";

/// Smallest number of quantiles a detection run accepts.
pub const MIN_QUANTILES: i64 = 2;

/// Tolerance limit used when the limit estimator rejects the dataset shape.
pub const FALLBACK_LIMIT: usize = 0;

// Tolerance-limit regression: (SLOPE * log2(n_cls + CLASS_OFFSET) + INTERCEPT) * n_attr.

/// Slope applied to the log of the class count.
pub const LIMIT_SLOPE: f64 = 0.0205;

/// Offset added to the class count before taking the log.
pub const LIMIT_CLASS_OFFSET: f64 = -1.623730;

/// Per-attribute intercept.
pub const LIMIT_INTERCEPT: f64 = 0.062579;
