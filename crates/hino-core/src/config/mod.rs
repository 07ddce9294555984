//! Configuration system for Hino.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod detection_config;
pub mod hino_config;

pub use detection_config::DetectionConfig;
pub use hino_config::{ConfigOverrides, HinoConfig};
