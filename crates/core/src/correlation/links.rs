//! Link resolution between payments, proforma invoices and quotations
//!
//! The backend does not reliably populate foreign keys on payments. Every
//! resolver here walks an explicit, ordered fallback chain over the candidate
//! set it is handed, and gives up rather than guessing across quotations.

use std::cmp::Ordering;

use salestrail_domain::{CancelRequest, Payment, ProformaInvoice, Quotation, QuotationId};

/// True iff a pending cancel request exists for the quotation.
pub fn has_pending_cancel_request(
    cancel_requests: &[CancelRequest],
    quotation_id: QuotationId,
) -> bool {
    cancel_requests
        .iter()
        .any(|request| request.quotation_id == quotation_id && request.status.is_pending())
}

/// First cancel request for the quotation, in fetch order.
pub fn get_cancel_request(
    cancel_requests: &[CancelRequest],
    quotation_id: QuotationId,
) -> Option<&CancelRequest> {
    cancel_requests.iter().find(|request| request.quotation_id == quotation_id)
}

/// True iff the quotation's PI list holds at least one approved PI.
pub fn has_approved_pi(pis: &[ProformaInvoice]) -> bool {
    pis.iter().any(|pi| pi.status.is_approved())
}

/// Resolve the quotation a payment belongs to.
///
/// Order: the payment's own `quotation_id`; a quotation whose number equals
/// the payment's quotation number; the quotation with the longest raw id
/// appearing inside the payment's quotation number; otherwise unresolved.
pub fn resolve_payment_quotation(
    payment: &Payment,
    quotations: &[Quotation],
) -> Option<QuotationId> {
    if let Some(id) = payment.quotation_id {
        return Some(id);
    }

    let number = payment.quotation_number.as_deref()?;

    if let Some(quotation) =
        quotations.iter().find(|quotation| quotation.quotation_number.as_deref() == Some(number))
    {
        return Some(quotation.id);
    }

    // "12" contains both 1 and 12; the longer id is the more specific match.
    quotations
        .iter()
        .map(|quotation| (quotation.id, quotation.id.to_string()))
        .filter(|(_, raw)| number.contains(raw.as_str()))
        .fold(None, |best: Option<(QuotationId, usize)>, (id, raw)| match best {
            Some((_, len)) if len >= raw.len() => best,
            _ => Some((id, raw.len())),
        })
        .map(|(id, _)| id)
}

/// Resolve the PI a payment was made against, within its own quotation's PIs.
///
/// A payment that names a `pi_id` resolves to that PI or to nothing. Without
/// one: exact `pi_number`; the sole PI when the quotation has exactly one;
/// otherwise unresolved.
pub fn resolve_payment_pi<'a>(
    payment: &Payment,
    pis_for_quotation: &'a [ProformaInvoice],
) -> Option<&'a ProformaInvoice> {
    if let Some(pi_id) = payment.pi_id {
        return pis_for_quotation.iter().find(|pi| pi.id == pi_id);
    }

    if let Some(number) = payment.pi_number.as_deref() {
        if let Some(pi) =
            pis_for_quotation.iter().find(|pi| pi.pi_number.as_deref() == Some(number))
        {
            return Some(pi);
        }
    }

    match pis_for_quotation {
        [only] => Some(only),
        _ => None,
    }
}

/// Order a quotation's PIs: originals first, then revisions, each group by
/// creation time ascending. Undated PIs sort after dated ones in their group.
pub fn sort_pi_revisions(pis: &[ProformaInvoice]) -> Vec<ProformaInvoice> {
    let mut sorted = pis.to_vec();
    sorted.sort_by(|a, b| {
        a.is_revision()
            .cmp(&b.is_revision())
            .then_with(|| match (a.created_at, b.created_at) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
    sorted
}
