//! Domain types for the customer timeline

pub mod ids;
pub mod lead;
pub mod sales;
pub mod status;
pub mod wire;

pub use ids::{LeadId, PiId, QuotationId};
pub use lead::{FollowUpEvent, LeadRecord, TransferInfo};
pub use sales::{CancelRequest, Payment, ProformaInvoice, Quotation, QuotationSummary};
pub use status::RecordStatus;
