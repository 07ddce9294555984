//! Core types, errors, configuration, tracing, and constants for Hino.
//!
//! Everything the detection engine shares lives here: the behavioral
//! [`types::Label`], one error enum per subsystem, the layered TOML config
//! and the `tracing` subscriber setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
