//! Derived money figures: payment classification, per-quotation ledgers and
//! the merged payment summary.

use salestrail_domain::{Payment, Quotation, QuotationId, QuotationSummary};
use serde::{Deserialize, Serialize};

/// Amounts below half a paisa are treated as zero.
const MONEY_EPSILON: f64 = 0.005;

fn is_zero(amount: f64) -> bool {
    amount.abs() < MONEY_EPSILON
}

fn is_positive(amount: f64) -> bool {
    amount >= MONEY_EPSILON
}

/// How a single installment relates to its quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Full,
    Advance,
    Partial,
}

/// Classify a payment for display.
///
/// `Full` when nothing remains after a non-zero installment, `Advance` for a
/// non-zero first installment, `Partial` otherwise.
pub fn classify_payment_type(payment: &Payment) -> PaymentType {
    let has_amount = is_positive(payment.installment_amount);

    if has_amount && payment.remaining_amount.is_some_and(is_zero) {
        PaymentType::Full
    } else if has_amount && payment.installment_number == Some(1) {
        PaymentType::Advance
    } else {
        PaymentType::Partial
    }
}

/// Overall settlement state across every quotation with a PI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Pending,
    Partial,
    Completed,
}

impl SettlementStatus {
    /// Nothing paid and nothing remaining also reads as `Pending`.
    pub fn from_figures(paid: f64, remaining: f64) -> Self {
        match (is_positive(paid), is_positive(remaining)) {
            (true, true) => Self::Partial,
            (true, false) => Self::Completed,
            (false, _) => Self::Pending,
        }
    }
}

/// Merged payment figures for a lead
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
    pub approval_status: SettlementStatus,
}

/// Sum per-quotation summaries into one. `None` when there is nothing to
/// merge.
pub fn merge_summaries<'a>(
    summaries: impl IntoIterator<Item = &'a QuotationSummary>,
) -> Option<PaymentSummary> {
    let mut merged: Option<(f64, f64, f64)> = None;
    for summary in summaries {
        let (total, paid, remaining) = merged.get_or_insert((0.0, 0.0, 0.0));
        *total += summary.total;
        *paid += summary.paid;
        *remaining += summary.remaining;
    }

    merged.map(|(total, paid, remaining)| PaymentSummary {
        total,
        paid,
        remaining,
        approval_status: SettlementStatus::from_figures(paid, remaining),
    })
}

/// Locally computed money figures for one quotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotationLedger {
    pub quotation_id: QuotationId,
    /// Quotation value
    pub total: f64,
    /// Every installment raised, whatever its approval state
    pub requested: f64,
    /// Approved installments only
    pub paid: f64,
    pub due: f64,
}

/// Build the ledger for `quotation` from payments already resolved to it.
pub fn quotation_ledger<'a>(
    quotation: &Quotation,
    payments: impl IntoIterator<Item = &'a Payment>,
) -> QuotationLedger {
    let (requested, paid) = payments.into_iter().fold((0.0, 0.0), |(requested, paid), payment| {
        let approved =
            if payment.approval_status.is_approved() { payment.installment_amount } else { 0.0 };
        (requested + payment.installment_amount, paid + approved)
    });

    QuotationLedger {
        quotation_id: quotation.id,
        total: quotation.total_amount,
        requested,
        paid,
        due: (quotation.total_amount - paid).max(0.0),
    }
}
