//! Chronological feed over a timeline bundle
//!
//! The presentation layer renders a customer's history as a single newest
//! first feed. Entries borrow from the bundle; building the feed never
//! touches the network.

use chrono::{DateTime, NaiveDate, Utc};
use salestrail_domain::{CancelRequest, FollowUpEvent, Payment, ProformaInvoice, Quotation, TransferInfo};

use super::bundle::TimelineBundle;
use crate::correlation::{classify_payment_type, PaymentType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedItem<'a> {
    FollowUp(&'a FollowUpEvent),
    Quotation(&'a Quotation),
    ProformaInvoice { pi: &'a ProformaInvoice, revision: bool },
    Payment { payment: &'a Payment, kind: PaymentType },
    CancelRequest(&'a CancelRequest),
    Transfer(&'a TransferInfo),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry<'a> {
    pub at: Option<DateTime<Utc>>,
    pub item: FeedItem<'a>,
}

/// Flatten a bundle into one feed, newest first.
///
/// Undated entries sink to the end; entries with equal timestamps keep
/// bundle order (history, quotations, PIs, payments, cancel requests,
/// transfer).
pub fn build_feed(bundle: &TimelineBundle) -> Vec<TimelineEntry<'_>> {
    let mut entries = Vec::new();

    entries.extend(
        bundle
            .history
            .iter()
            .map(|event| TimelineEntry { at: event.created_at, item: FeedItem::FollowUp(event) }),
    );
    entries.extend(bundle.quotations.iter().map(|quotation| TimelineEntry {
        at: quotation.quotation_date,
        item: FeedItem::Quotation(quotation),
    }));
    for quotation in &bundle.quotations {
        entries.extend(bundle.pis_for(quotation.id).iter().map(|pi| TimelineEntry {
            at: pi.created_at,
            item: FeedItem::ProformaInvoice { pi, revision: pi.is_revision() },
        }));
    }
    entries.extend(bundle.payments.iter().map(|payment| TimelineEntry {
        at: payment.payment_date,
        item: FeedItem::Payment { payment, kind: classify_payment_type(payment) },
    }));
    entries.extend(bundle.cancel_requests.iter().map(|request| TimelineEntry {
        at: request.created_at,
        item: FeedItem::CancelRequest(request),
    }));
    if let Some(transfer) = &bundle.transfer_info {
        entries.push(TimelineEntry { at: transfer.transferred_at, item: FeedItem::Transfer(transfer) });
    }

    entries.sort_by(|a, b| b.at.cmp(&a.at));
    entries
}

/// Group a feed by UTC calendar day, preserving feed order. Undated entries
/// form a trailing `None` group.
pub fn group_feed_by_day<'a>(
    feed: &[TimelineEntry<'a>],
) -> Vec<(Option<NaiveDate>, Vec<TimelineEntry<'a>>)> {
    let mut groups: Vec<(Option<NaiveDate>, Vec<TimelineEntry<'a>>)> = Vec::new();
    for entry in feed {
        let day = entry.at.map(|at| at.date_naive());
        match groups.last_mut() {
            Some((current, entries)) if *current == day => entries.push(*entry),
            _ => groups.push((day, vec![*entry])),
        }
    }
    groups
}
