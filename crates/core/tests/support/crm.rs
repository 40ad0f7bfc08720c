//! In-memory fake of the CRM backend
//!
//! Serves canned collections keyed by lead/quotation id, records every call
//! it receives and can be told to fail individual fetches.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use salestrail_core::{
    CustomerTimelineService, LeadSource, PaymentSource, ProformaInvoiceSource, QuotationSource,
    TimelineSources,
};
use salestrail_domain::{
    CancelRequest, FollowUpEvent, LeadId, LeadRecord, Payment, ProformaInvoice, Quotation,
    QuotationId, QuotationSummary, Result as DomainResult, SalesTrailError,
};
use tokio::sync::Notify;

#[derive(Default)]
pub struct FakeCrm {
    history: HashMap<LeadId, Vec<FollowUpEvent>>,
    quotations: HashMap<LeadId, Vec<Quotation>>,
    leads: HashMap<LeadId, LeadRecord>,
    pis: HashMap<QuotationId, Vec<ProformaInvoice>>,
    payments: HashMap<QuotationId, Vec<Payment>>,
    summaries: HashMap<QuotationId, QuotationSummary>,
    cancel_requests: HashMap<LeadId, Vec<CancelRequest>>,
    failing: HashSet<String>,
    history_gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCrm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_follow_up(mut self, lead: i64, event: FollowUpEvent) -> Self {
        self.history.entry(LeadId(lead)).or_default().push(event);
        self
    }

    pub fn with_quotation(mut self, lead: i64, quotation: Quotation) -> Self {
        self.quotations.entry(LeadId(lead)).or_default().push(quotation);
        self
    }

    pub fn with_lead(mut self, lead: LeadRecord) -> Self {
        self.leads.insert(lead.id, lead);
        self
    }

    pub fn with_pi(mut self, quotation: i64, pi: ProformaInvoice) -> Self {
        self.pis.entry(QuotationId(quotation)).or_default().push(pi);
        self
    }

    pub fn with_payment(mut self, quotation: i64, payment: Payment) -> Self {
        self.payments.entry(QuotationId(quotation)).or_default().push(payment);
        self
    }

    pub fn with_summary(mut self, quotation: i64, summary: QuotationSummary) -> Self {
        self.summaries.insert(QuotationId(quotation), summary);
        self
    }

    pub fn with_cancel_request(mut self, lead: i64, request: CancelRequest) -> Self {
        self.cancel_requests.entry(LeadId(lead)).or_default().push(request);
        self
    }

    /// Make `operation` fail for `key`, e.g. `failing("payments", 7)`.
    pub fn failing(mut self, operation: &str, key: i64) -> Self {
        self.failing.insert(format!("{operation}:{key}"));
        self
    }

    /// Hold every history fetch until the returned handle is notified.
    pub fn gate_history(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.history_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn into_service(self) -> (Arc<Self>, CustomerTimelineService) {
        let crm = Arc::new(self);
        let service = CustomerTimelineService::new(TimelineSources::from_gateway(crm.clone()));
        (crm, service)
    }

    /// Every call received so far, as `operation:key`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn was_called(&self, operation: &str, key: i64) -> bool {
        self.calls.lock().iter().any(|call| *call == format!("{operation}:{key}"))
    }

    fn record(&self, operation: &str, key: i64) -> DomainResult<()> {
        let call = format!("{operation}:{key}");
        self.calls.lock().push(call.clone());
        if self.failing.contains(&call) {
            return Err(SalesTrailError::Http { status: 500, message: format!("{call} failed") });
        }
        Ok(())
    }
}

#[async_trait]
impl LeadSource for FakeCrm {
    async fn get_follow_up_history(&self, lead_id: LeadId) -> DomainResult<Vec<FollowUpEvent>> {
        if let Some(gate) = &self.history_gate {
            gate.notified().await;
        }
        self.record("history", lead_id.get())?;
        Ok(self.history.get(&lead_id).cloned().unwrap_or_default())
    }

    async fn get_lead_by_id(&self, lead_id: LeadId) -> DomainResult<LeadRecord> {
        self.record("lead", lead_id.get())?;
        self.leads
            .get(&lead_id)
            .cloned()
            .ok_or_else(|| SalesTrailError::NotFound(format!("lead {lead_id}")))
    }

    async fn get_cancel_requests_by_customer(
        &self,
        lead_id: LeadId,
    ) -> DomainResult<Vec<CancelRequest>> {
        self.record("cancel_requests", lead_id.get())?;
        Ok(self.cancel_requests.get(&lead_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl QuotationSource for FakeCrm {
    async fn get_quotations_by_customer(&self, lead_id: LeadId) -> DomainResult<Vec<Quotation>> {
        self.record("quotations", lead_id.get())?;
        Ok(self.quotations.get(&lead_id).cloned().unwrap_or_default())
    }

    async fn get_quotation_summary(
        &self,
        quotation_id: QuotationId,
    ) -> DomainResult<QuotationSummary> {
        self.record("summary", quotation_id.get())?;
        self.summaries
            .get(&quotation_id)
            .copied()
            .ok_or_else(|| SalesTrailError::NotFound(format!("summary {quotation_id}")))
    }
}

#[async_trait]
impl ProformaInvoiceSource for FakeCrm {
    async fn get_pis_by_quotation(
        &self,
        quotation_id: QuotationId,
    ) -> DomainResult<Vec<ProformaInvoice>> {
        self.record("pis", quotation_id.get())?;
        Ok(self.pis.get(&quotation_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl PaymentSource for FakeCrm {
    async fn get_payments_by_quotation(
        &self,
        quotation_id: QuotationId,
    ) -> DomainResult<Vec<Payment>> {
        self.record("payments", quotation_id.get())?;
        Ok(self.payments.get(&quotation_id).cloned().unwrap_or_default())
    }
}
