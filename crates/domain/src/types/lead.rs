//! Lead-side records: follow-up history and transfer metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::LeadId;
use super::wire;

/// A sales follow-up logged against a lead. Read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpEvent {
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub id: i64,
    #[serde(default, alias = "createdAt", deserialize_with = "wire::optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "followUpDate", deserialize_with = "wire::optional_string")]
    pub follow_up_date: Option<String>,
    #[serde(default, alias = "followUpTime", deserialize_with = "wire::optional_string")]
    pub follow_up_time: Option<String>,
    #[serde(default, alias = "followUpStatus", deserialize_with = "wire::optional_string")]
    pub follow_up_status: Option<String>,
    #[serde(default, alias = "followUpRemark", deserialize_with = "wire::optional_string")]
    pub follow_up_remark: Option<String>,
    #[serde(default, alias = "salesStatus", deserialize_with = "wire::optional_string")]
    pub sales_status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Last ownership transfer of a lead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInfo {
    pub transferred_from: Option<String>,
    pub transferred_to: Option<String>,
    pub transferred_at: Option<DateTime<Utc>>,
    pub transfer_reason: Option<String>,
}

/// The lead record as returned by the backend. Only the transfer fields are
/// typed; the rest passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    #[serde(default, alias = "transferredFrom", deserialize_with = "wire::optional_string")]
    pub transferred_from: Option<String>,
    #[serde(default, alias = "transferredTo", deserialize_with = "wire::optional_string")]
    pub transferred_to: Option<String>,
    #[serde(default, alias = "transferredAt", deserialize_with = "wire::optional_datetime")]
    pub transferred_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "transferReason", deserialize_with = "wire::optional_string")]
    pub transfer_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeadRecord {
    /// Transfer metadata, or `None` when the lead was never transferred.
    pub fn transfer_info(&self) -> Option<TransferInfo> {
        let info = TransferInfo {
            transferred_from: self.transferred_from.clone(),
            transferred_to: self.transferred_to.clone(),
            transferred_at: self.transferred_at,
            transfer_reason: self.transfer_reason.clone(),
        };
        (info != TransferInfo::default()).then_some(info)
    }
}
