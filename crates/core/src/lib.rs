//! # SalesTrail Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the entity fetchers (traits)
//! - The timeline aggregator and its view session
//! - Cross-entity correlation (link resolution, money figures)
//!
//! ## Architecture Principles
//! - Only depends on `salestrail-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod correlation;
pub mod timeline;

pub use correlation::{PaymentSummary, PaymentType, QuotationLedger, SettlementStatus};
pub use timeline::ports::{
    LeadSource, PaymentSource, ProformaInvoiceSource, QuotationSource, TimelineSources,
};
pub use timeline::{
    build_feed, group_feed_by_day, CustomerTimelineService, FeedItem, LoadOutcome,
    TimelineBundle, TimelineEntry, TimelineView,
};
