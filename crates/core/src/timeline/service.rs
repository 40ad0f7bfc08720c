//! Customer timeline service - fan-out, correlation and assembly

use std::collections::{BTreeMap, HashMap, HashSet};

use salestrail_domain::{
    LeadId, Payment, ProformaInvoice, Quotation, QuotationId, Result, SalesTrailError,
};
use tracing::{debug, info, instrument};

use super::bundle::TimelineBundle;
use super::ports::TimelineSources;
use super::settle::{settle, settle_keyed, settle_or_default};
use crate::correlation::{merge_summaries, sort_pi_revisions};

/// Builds [`TimelineBundle`]s from independently fetched entity collections.
///
/// Fetching runs in three strictly sequential phases (lead-level data, PIs
/// per quotation, payments and summaries per quotation with a PI). Fetches
/// within a phase run concurrently and each one is fault isolated.
pub struct CustomerTimelineService {
    sources: TimelineSources,
}

impl CustomerTimelineService {
    pub fn new(sources: TimelineSources) -> Self {
        Self { sources }
    }

    /// Assemble the timeline for a lead.
    ///
    /// # Errors
    /// Returns `SalesTrailError::InvalidInput` for a non-positive lead id.
    /// Upstream failures never surface here; they only leave their slice of
    /// the bundle empty.
    #[instrument(skip(self), fields(lead_id = %lead_id))]
    pub async fn get_timeline_data(&self, lead_id: LeadId) -> Result<TimelineBundle> {
        if lead_id.get() <= 0 {
            return Err(SalesTrailError::InvalidInput(format!(
                "lead id must be positive, got {lead_id}"
            )));
        }

        let leads = &self.sources.leads;
        let (history, mut quotations, lead) = futures::join!(
            settle_or_default("follow_up_history", lead_id, leads.get_follow_up_history(lead_id)),
            settle_or_default(
                "quotations_by_customer",
                lead_id,
                self.sources.quotations.get_quotations_by_customer(lead_id),
            ),
            settle("lead_by_id", lead_id, leads.get_lead_by_id(lead_id)),
        );
        dedup_quotations(&mut quotations);
        debug!(follow_ups = history.len(), quotations = quotations.len(), "lead data fetched");

        let pis_by_quotation_id = self.fetch_pis(&quotations).await;

        // Quotations without any PI are pre-order: no payments are fetched for them.
        let quotations_with_pi: Vec<QuotationId> = quotations
            .iter()
            .map(|quotation| quotation.id)
            .filter(|id| pis_by_quotation_id.get(id).is_some_and(|pis| !pis.is_empty()))
            .collect();

        let (mut payments_by_quotation, summaries) = futures::join!(
            settle_keyed("payments_by_quotation", quotations_with_pi.iter().copied(), |id| {
                self.sources.payments.get_payments_by_quotation(id)
            }),
            settle_keyed("quotation_summary", quotations_with_pi.iter().copied(), |id| {
                self.sources.quotations.get_quotation_summary(id)
            }),
        );

        let mut payments = Vec::new();
        for quotation_id in &quotations_with_pi {
            let Some(batch) = payments_by_quotation.remove(quotation_id) else {
                continue;
            };
            let quotation = quotations.iter().find(|quotation| quotation.id == *quotation_id);
            let pis = pis_by_quotation_id.get(quotation_id).map(Vec::as_slice).unwrap_or(&[]);
            payments.extend(
                batch
                    .into_iter()
                    .map(|payment| enrich_payment(payment, *quotation_id, quotation, pis)),
            );
        }
        sort_payments_newest_first(&mut payments);

        let payment_summary = merge_summaries(
            quotations_with_pi.iter().filter_map(|id| summaries.get(id)),
        );

        let cancel_requests = settle_or_default(
            "cancel_requests_by_customer",
            lead_id,
            leads.get_cancel_requests_by_customer(lead_id),
        )
        .await;

        info!(
            follow_ups = history.len(),
            quotations = quotations.len(),
            quotations_with_pi = quotations_with_pi.len(),
            payments = payments.len(),
            cancel_requests = cancel_requests.len(),
            "timeline assembled"
        );

        Ok(TimelineBundle {
            lead_id,
            history,
            transfer_info: lead.and_then(|lead| lead.transfer_info()),
            quotations,
            pis_by_quotation_id,
            quotations_with_pi,
            payments,
            payment_summary,
            cancel_requests,
        })
    }

    async fn fetch_pis(
        &self,
        quotations: &[Quotation],
    ) -> BTreeMap<QuotationId, Vec<ProformaInvoice>> {
        let mut fetched: HashMap<QuotationId, Vec<ProformaInvoice>> =
            settle_keyed("pis_by_quotation", quotations.iter().map(|q| q.id), |id| {
                self.sources.proforma_invoices.get_pis_by_quotation(id)
            })
            .await;

        quotations
            .iter()
            .map(|quotation| {
                let pis = fetched.remove(&quotation.id).unwrap_or_default();
                (quotation.id, sort_pi_revisions(&pis))
            })
            .collect()
    }
}

/// Keep the first row for each quotation id, preserving response order.
fn dedup_quotations(quotations: &mut Vec<Quotation>) {
    let before = quotations.len();
    let mut seen = HashSet::new();
    quotations.retain(|quotation| seen.insert(quotation.id));
    if quotations.len() < before {
        debug!(dropped = before - quotations.len(), "duplicate quotation rows ignored");
    }
}

/// Tag a payment with the quotation it was fetched under (id and display
/// number) and, when it carries a PI id, that PI's display number.
fn enrich_payment(
    mut payment: Payment,
    quotation_id: QuotationId,
    quotation: Option<&Quotation>,
    pis: &[ProformaInvoice],
) -> Payment {
    payment.quotation_id = Some(quotation_id);
    if let Some(quotation) = quotation {
        payment.quotation_number = Some(quotation.display_number());
    }
    if let Some(pi_id) = payment.pi_id {
        payment.pi_number = pis.iter().find(|pi| pi.id == pi_id).map(ProformaInvoice::display_number);
    }
    payment
}

/// Stable sort, newest first; undated payments go last.
fn sort_payments_newest_first(payments: &mut [Payment]) {
    payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
}
