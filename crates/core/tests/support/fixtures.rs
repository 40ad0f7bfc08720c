//! Record builders with sensible defaults

use chrono::{DateTime, TimeZone, Utc};
use salestrail_domain::{
    CancelRequest, FollowUpEvent, LeadId, LeadRecord, Payment, PiId, ProformaInvoice, Quotation,
    QuotationId, QuotationSummary, RecordStatus,
};
use serde_json::Map;

/// Midnight UTC on the given day of March 2024.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
}

pub fn quotation(id: i64, number: &str, total: f64) -> Quotation {
    Quotation {
        id: QuotationId(id),
        quotation_number: Some(number.to_string()),
        quotation_date: Some(day(1)),
        status: RecordStatus::Approved,
        total_amount: total,
        extra: Map::new(),
    }
}

pub fn pi(id: i64, quotation: i64, status: &str, created: u32) -> ProformaInvoice {
    ProformaInvoice {
        id: PiId(id),
        pi_number: Some(format!("PI-{id:04}")),
        parent_pi_id: None,
        quotation_id: Some(QuotationId(quotation)),
        status: RecordStatus::from_raw(status),
        created_at: Some(day(created)),
        extra: Map::new(),
    }
}

pub fn revision(id: i64, parent: i64, quotation: i64, status: &str, created: u32) -> ProformaInvoice {
    ProformaInvoice { parent_pi_id: Some(PiId(parent)), ..pi(id, quotation, status, created) }
}

pub fn payment(id: i64, amount: f64, status: &str, paid_on: u32) -> Payment {
    Payment {
        id,
        quotation_id: None,
        quotation_number: None,
        pi_id: None,
        pi_number: None,
        installment_amount: amount,
        installment_number: None,
        remaining_amount: None,
        payment_date: Some(day(paid_on)),
        approval_status: RecordStatus::from_raw(status),
        extra: Map::new(),
    }
}

pub fn summary(total: f64, paid: f64, remaining: f64) -> QuotationSummary {
    QuotationSummary { total, paid, remaining }
}

pub fn cancel_request(id: i64, quotation: i64, status: &str, created: u32) -> CancelRequest {
    CancelRequest {
        id,
        quotation_id: QuotationId(quotation),
        status: RecordStatus::from_raw(status),
        reason: Some("customer changed plans".to_string()),
        created_at: Some(day(created)),
        extra: Map::new(),
    }
}

pub fn follow_up(id: i64, created: u32) -> FollowUpEvent {
    FollowUpEvent {
        id,
        created_at: Some(day(created)),
        follow_up_date: None,
        follow_up_time: None,
        follow_up_status: Some("Interested".to_string()),
        follow_up_remark: None,
        sales_status: None,
        extra: Map::new(),
    }
}

pub fn lead(id: i64) -> LeadRecord {
    LeadRecord {
        id: LeadId(id),
        transferred_from: None,
        transferred_to: None,
        transferred_at: None,
        transfer_reason: None,
        extra: Map::new(),
    }
}
