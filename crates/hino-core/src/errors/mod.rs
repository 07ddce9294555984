//! Error handling for Hino.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dataset_error;
pub mod detection_error;
pub mod error_code;
pub mod hino_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use detection_error::DetectionError;
pub use error_code::HinoErrorCode;
pub use hino_error::HinoError;
