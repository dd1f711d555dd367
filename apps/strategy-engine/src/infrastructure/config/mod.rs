//! Configuration Module
//!
//! Configuration loading for the strategy engine service.

mod settings;

pub use settings::{ConfigError, CorsSettings, ServerSettings, ServiceConfig};
