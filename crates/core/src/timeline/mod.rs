//! Customer timeline assembly

pub mod bundle;
pub mod feed;
pub mod ports;
pub mod service;
pub mod settle;
pub mod view;

pub use bundle::TimelineBundle;
pub use feed::{build_feed, group_feed_by_day, FeedItem, TimelineEntry};
pub use ports::{LeadSource, PaymentSource, ProformaInvoiceSource, QuotationSource, TimelineSources};
pub use service::CustomerTimelineService;
pub use view::{LoadOutcome, TimelineView};
