//! HTTP transport shared by backend gateways

mod client;

pub use client::{HttpClient, HttpClientBuilder};
