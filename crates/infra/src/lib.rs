//! # SalesTrail Infrastructure
//!
//! Infrastructure implementations of the timeline ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client
//! - The REST gateway adapter and its envelope normalization
//! - Configuration loading (environment and TOML/JSON files)
//! - Tracing bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `salestrail-core`
//! - Contains all "impure" code (network, environment, filesystem)

pub mod config;
pub mod errors;
pub mod gateway;
pub mod http;
pub mod logging;

pub use errors::InfraError;
pub use gateway::GatewayClient;
pub use http::{HttpClient, HttpClientBuilder};
pub use logging::init_tracing;

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

use std::sync::Arc;

use salestrail_core::{CustomerTimelineService, TimelineSources};
use salestrail_domain::{Config, Result};

/// Wire a timeline service to the REST backend described by `config`.
pub fn timeline_service(config: &Config) -> Result<CustomerTimelineService> {
    let gateway = Arc::new(GatewayClient::from_config(&config.gateway)?);
    Ok(CustomerTimelineService::new(TimelineSources::from_gateway(gateway)))
}
