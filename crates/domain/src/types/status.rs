//! Free-form workflow statuses

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Approval/workflow status shared by quotations, PIs, payments and cancel
/// requests.
///
/// The backend sends free-form strings; known values are matched
/// case-insensitively and anything else is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecordStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
    /// No status was recorded
    Unspecified,
    Other(String),
}

impl RecordStatus {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Unspecified => "",
            Self::Other(raw) => raw,
        }
    }

    pub fn unspecified() -> Self {
        Self::Unspecified
    }

    /// Decode a status where only an explicit value counts; `null`, blank or
    /// absent reads as [`RecordStatus::Unspecified`] rather than `Pending`.
    pub fn deserialize_explicit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            None | Some("") => Self::Unspecified,
            Some(raw) => Self::from_raw(raw),
        })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Pending, |raw| Self::from_raw(&raw)))
    }
}
