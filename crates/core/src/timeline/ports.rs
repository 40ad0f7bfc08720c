//! Port interfaces for timeline assembly
//!
//! These traits define the boundary between the timeline aggregator and the
//! remote CRM backend. Implementations normalize whatever envelope the
//! backend wraps its payloads in; everything behind these traits sees one
//! fixed shape.

use std::sync::Arc;

use async_trait::async_trait;
use salestrail_domain::{
    CancelRequest, FollowUpEvent, LeadId, LeadRecord, Payment, ProformaInvoice, Quotation,
    QuotationId, QuotationSummary, Result,
};

/// Lead-scoped collections
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Follow-up history logged against the lead
    async fn get_follow_up_history(&self, lead_id: LeadId) -> Result<Vec<FollowUpEvent>>;

    /// The lead record itself (read for its transfer fields)
    async fn get_lead_by_id(&self, lead_id: LeadId) -> Result<LeadRecord>;

    /// Cancel requests raised for any of the lead's orders
    async fn get_cancel_requests_by_customer(&self, lead_id: LeadId)
        -> Result<Vec<CancelRequest>>;
}

/// Quotation lookups
#[async_trait]
pub trait QuotationSource: Send + Sync {
    async fn get_quotations_by_customer(&self, lead_id: LeadId) -> Result<Vec<Quotation>>;

    /// Backend-computed total/paid/remaining figures for one quotation
    async fn get_quotation_summary(&self, quotation_id: QuotationId) -> Result<QuotationSummary>;
}

/// Proforma invoice lookups
#[async_trait]
pub trait ProformaInvoiceSource: Send + Sync {
    async fn get_pis_by_quotation(&self, quotation_id: QuotationId)
        -> Result<Vec<ProformaInvoice>>;
}

/// Payment lookups
#[async_trait]
pub trait PaymentSource: Send + Sync {
    async fn get_payments_by_quotation(&self, quotation_id: QuotationId) -> Result<Vec<Payment>>;
}

/// The full set of entity fetchers the aggregator depends on.
#[derive(Clone)]
pub struct TimelineSources {
    pub leads: Arc<dyn LeadSource>,
    pub quotations: Arc<dyn QuotationSource>,
    pub proforma_invoices: Arc<dyn ProformaInvoiceSource>,
    pub payments: Arc<dyn PaymentSource>,
}

impl TimelineSources {
    /// Use one backend adapter for every entity.
    pub fn from_gateway<G>(gateway: Arc<G>) -> Self
    where
        G: LeadSource + QuotationSource + ProformaInvoiceSource + PaymentSource + 'static,
    {
        Self {
            leads: gateway.clone(),
            quotations: gateway.clone(),
            proforma_invoices: gateway.clone(),
            payments: gateway,
        }
    }
}
