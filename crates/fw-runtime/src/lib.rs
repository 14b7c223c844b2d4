//! # FW Runtime Library
//!
//! Wiring for a complete Few Wrapped Tokens deployment. The `fw-runtime`
//! binary uses it to run a demo deployment; the integration tests use it to
//! stand up a platform.
//!
//! - `config`: environment-driven `PlatformConfig`
//! - `telemetry`: global `tracing` subscriber
//! - `platform`: registry + factory deployed together

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod platform;
pub mod telemetry;

pub use config::{ConfigError, PlatformConfig};
pub use platform::{DeploymentReport, Platform, PlatformError, TokenReport};
pub use telemetry::{init_tracing, TelemetryError};
