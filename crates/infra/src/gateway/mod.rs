//! REST gateway to the CRM backend
//!
//! [`GatewayClient`] implements every timeline port against the backend's
//! REST API. Envelope handling lives in [`envelope`]; nothing above this
//! module sees the backend's wrapper shapes.

mod client;
pub mod envelope;
mod routes;

pub use client::GatewayClient;
pub use routes::Route;

pub(crate) use client::validate_base_url;
