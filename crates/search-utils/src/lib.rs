//! Shared utilities for brave-video-search
//!
//! Logging setup for host binaries and the configuration that drives it.

pub mod config;
pub mod logging;

pub use config::{LogFormat, LoggingConfig};
pub use logging::{init_tracing, init_tracing_with};
