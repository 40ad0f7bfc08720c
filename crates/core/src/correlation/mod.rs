//! Cross-entity correlation
//!
//! Pure functions over already-fetched records. Nothing in this module
//! performs I/O; callers hand in the candidate sets explicitly.

pub mod figures;
pub mod links;

pub use figures::{
    classify_payment_type, merge_summaries, quotation_ledger, PaymentSummary, PaymentType,
    QuotationLedger, SettlementStatus,
};
pub use links::{
    get_cancel_request, has_approved_pi, has_pending_cancel_request, resolve_payment_pi,
    resolve_payment_quotation, sort_pi_revisions,
};
