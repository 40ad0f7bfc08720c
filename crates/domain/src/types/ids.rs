//! Strongly typed identifiers for the entities the timeline correlates

use std::fmt;

use serde::{Deserialize, Serialize};

use super::wire;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "wire::lenient_i64")] pub i64);

        impl $name {
            /// Raw backend identifier
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Lead (customer) identifier
    LeadId
);
entity_id!(
    /// Quotation identifier
    QuotationId
);
entity_id!(
    /// Proforma invoice identifier
    PiId
);

impl LeadId {
    /// Validate a caller-supplied lead id. Backend ids are strictly positive.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let id: i64 = raw
            .trim()
            .parse()
            .map_err(|_| crate::SalesTrailError::InvalidInput(format!("invalid lead id: {raw:?}")))?;
        Self::checked(id)
    }

    /// Reject zero and negative ids.
    pub fn checked(id: i64) -> crate::Result<Self> {
        if id <= 0 {
            return Err(crate::SalesTrailError::InvalidInput(format!(
                "lead id must be positive, got {id}"
            )));
        }
        Ok(Self(id))
    }
}
