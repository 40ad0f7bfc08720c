//! The assembled, read-only timeline snapshot

use std::collections::BTreeMap;

use salestrail_domain::{
    CancelRequest, FollowUpEvent, LeadId, Payment, ProformaInvoice, Quotation, QuotationId,
    TransferInfo,
};
use serde::Serialize;

use crate::correlation::{self, PaymentSummary, PaymentType, QuotationLedger};

/// Everything relevant to one customer's history, fetched in one pass.
///
/// A bundle is rebuilt from scratch on every fetch and never patched. The
/// query methods below are in-memory lookups over the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBundle {
    pub lead_id: LeadId,
    pub history: Vec<FollowUpEvent>,
    pub quotations: Vec<Quotation>,
    /// PIs per quotation, originals before revisions
    pub pis_by_quotation_id: BTreeMap<QuotationId, Vec<ProformaInvoice>>,
    /// Quotations with at least one PI, in quotation order
    pub quotations_with_pi: Vec<QuotationId>,
    /// Payments of every quotation with a PI, most recent first
    pub payments: Vec<Payment>,
    pub payment_summary: Option<PaymentSummary>,
    pub transfer_info: Option<TransferInfo>,
    pub cancel_requests: Vec<CancelRequest>,
}

impl TimelineBundle {
    pub fn quotation(&self, quotation_id: QuotationId) -> Option<&Quotation> {
        self.quotations.iter().find(|quotation| quotation.id == quotation_id)
    }

    /// PIs for a quotation; empty when it has none or its fetch failed.
    pub fn pis_for(&self, quotation_id: QuotationId) -> &[ProformaInvoice] {
        self.pis_by_quotation_id.get(&quotation_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_pending_cancel_request(&self, quotation_id: QuotationId) -> bool {
        correlation::has_pending_cancel_request(&self.cancel_requests, quotation_id)
    }

    pub fn get_cancel_request(&self, quotation_id: QuotationId) -> Option<&CancelRequest> {
        correlation::get_cancel_request(&self.cancel_requests, quotation_id)
    }

    pub fn has_approved_pi(&self, quotation_id: QuotationId) -> bool {
        correlation::has_approved_pi(self.pis_for(quotation_id))
    }

    pub fn resolve_payment_quotation(&self, payment: &Payment) -> Option<QuotationId> {
        correlation::resolve_payment_quotation(payment, &self.quotations)
    }

    /// The PI a payment belongs to, searched only within its own quotation.
    /// `None` means no "view PI" link can be offered.
    pub fn resolve_payment_pi(&self, payment: &Payment) -> Option<&ProformaInvoice> {
        let quotation_id = self.resolve_payment_quotation(payment)?;
        correlation::resolve_payment_pi(payment, self.pis_for(quotation_id))
    }

    pub fn classify_payment(&self, payment: &Payment) -> PaymentType {
        correlation::classify_payment_type(payment)
    }

    /// Payments that resolve to the quotation, in bundle order.
    pub fn payments_for(&self, quotation_id: QuotationId) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| self.resolve_payment_quotation(payment) == Some(quotation_id))
            .collect()
    }

    /// Locally computed paid/due figures for one quotation.
    pub fn quotation_ledger(&self, quotation_id: QuotationId) -> Option<QuotationLedger> {
        let quotation = self.quotation(quotation_id)?;
        Some(correlation::quotation_ledger(quotation, self.payments_for(quotation_id)))
    }
}
