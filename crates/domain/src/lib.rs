//! # SalesTrail Domain
//!
//! Business domain types for the SalesTrail customer timeline.
//!
//! This crate contains:
//! - Entity records (quotations, proforma invoices, payments, ...)
//! - Lenient deserializers for the loosely typed CRM backend
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other SalesTrail crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
