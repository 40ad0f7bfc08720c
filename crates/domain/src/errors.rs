//! Error types used throughout the timeline engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SalesTrail
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SalesTrailError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalesTrailError {
    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http { .. } => "http",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the error came from an upstream fetch rather than from the
    /// caller's input. Upstream failures degrade a timeline slice; they are
    /// never surfaced on their own.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Decode(_) | Self::NotFound(_))
    }
}

/// Result type alias for SalesTrail operations
pub type Result<T> = std::result::Result<T, SalesTrailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(SalesTrailError::Network("x".into()).label(), "network");
        assert_eq!(SalesTrailError::Http { status: 502, message: String::new() }.label(), "http");
        assert_eq!(SalesTrailError::InvalidInput("lead".into()).label(), "invalid_input");
    }

    #[test]
    fn upstream_classification() {
        assert!(SalesTrailError::Http { status: 500, message: "boom".into() }.is_upstream());
        assert!(SalesTrailError::Decode("bad json".into()).is_upstream());
        assert!(!SalesTrailError::InvalidInput("lead id".into()).is_upstream());
        assert!(!SalesTrailError::Config("missing".into()).is_upstream());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(SalesTrailError::NotFound("lead 9".into()))
            .expect("error should serialize");
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "lead 9");
    }
}
