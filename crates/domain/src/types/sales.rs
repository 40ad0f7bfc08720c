//! Quotation, proforma invoice, payment and cancel-request records
//!
//! Only the fields the correlation engine depends on are typed; everything
//! else the backend sends is kept in `extra` and passed through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::{PiId, QuotationId};
use super::status::RecordStatus;
use super::wire;

/// A priced offer sent to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: QuotationId,
    #[serde(
        default,
        alias = "quotationNumber",
        deserialize_with = "wire::optional_string"
    )]
    pub quotation_number: Option<String>,
    #[serde(default, alias = "quotationDate", deserialize_with = "wire::optional_datetime")]
    pub quotation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, alias = "totalAmount", deserialize_with = "wire::amount")]
    pub total_amount: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quotation {
    /// Human-readable code, falling back to the raw id.
    pub fn display_number(&self) -> String {
        self.quotation_number.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// A revisable, approvable invoice tied to a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProformaInvoice {
    pub id: PiId,
    #[serde(default, alias = "piNumber", deserialize_with = "wire::optional_string")]
    pub pi_number: Option<String>,
    #[serde(default, alias = "parentPiId", deserialize_with = "wire::optional_id")]
    pub parent_pi_id: Option<PiId>,
    #[serde(default, alias = "quotationId", deserialize_with = "wire::optional_id")]
    pub quotation_id: Option<QuotationId>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, alias = "createdAt", deserialize_with = "wire::optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProformaInvoice {
    pub fn is_revision(&self) -> bool {
        self.parent_pi_id.is_some()
    }

    pub fn display_number(&self) -> String {
        self.pi_number.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// One installment recorded against a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub id: i64,
    #[serde(default, alias = "quotationId", deserialize_with = "wire::optional_id")]
    pub quotation_id: Option<QuotationId>,
    #[serde(
        default,
        alias = "quotationNumber",
        deserialize_with = "wire::optional_string"
    )]
    pub quotation_number: Option<String>,
    #[serde(default, alias = "piId", deserialize_with = "wire::optional_id")]
    pub pi_id: Option<PiId>,
    #[serde(default, alias = "piNumber", deserialize_with = "wire::optional_string")]
    pub pi_number: Option<String>,
    #[serde(default, alias = "installmentAmount", deserialize_with = "wire::amount")]
    pub installment_amount: f64,
    #[serde(default, alias = "installmentNumber", deserialize_with = "wire::optional_i64")]
    pub installment_number: Option<i64>,
    #[serde(default, alias = "remainingAmount", deserialize_with = "wire::optional_amount")]
    pub remaining_amount: Option<f64>,
    #[serde(default, alias = "paymentDate", deserialize_with = "wire::optional_datetime")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "approvalStatus")]
    pub approval_status: RecordStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request to cancel an approved order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub id: i64,
    #[serde(alias = "quotationId")]
    pub quotation_id: QuotationId,
    /// Only an explicit "pending" blocks actions on the quotation.
    #[serde(default = "RecordStatus::unspecified", deserialize_with = "RecordStatus::deserialize_explicit")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "wire::optional_string")]
    pub reason: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "wire::optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Backend-computed payment figures for one quotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotationSummary {
    #[serde(default, alias = "totalAmount", alias = "total_amount", deserialize_with = "wire::amount")]
    pub total: f64,
    #[serde(default, alias = "paidAmount", alias = "paid_amount", deserialize_with = "wire::amount")]
    pub paid: f64,
    #[serde(
        default,
        alias = "remainingAmount",
        alias = "remaining_amount",
        deserialize_with = "wire::amount"
    )]
    pub remaining: f64,
}
