//! Error types for diagram generation.

use thiserror::Error;

use crate::rating::RatingRole;

/// Result type alias using EpcError.
pub type EpcResult<T> = Result<T, EpcError>;

/// Primary error type for diagram configuration and rendering.
#[derive(Debug, Error)]
pub enum EpcError {
    // === Configuration Errors ===
    #[error("Invalid energy assessment '{0}': expected one of epc, pea, eer, eir")]
    InvalidAssessment(String),

    #[error("Missing {0} rating")]
    MissingRating(RatingRole),

    #[error("{role} rating {value} is out of range: ratings start at 1")]
    RatingOutOfRange { role: RatingRole, value: i32 },

    #[error("Requested format not supported: {0}")]
    UnsupportedFormat(String),

    // === Asset Errors ===
    #[error("Failed to load asset '{path}': {message}")]
    Asset { path: String, message: String },

    // === Output Errors ===
    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EpcError {
    /// Whether the error was caused by the caller's report or options
    /// rather than by the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EpcError::InvalidAssessment(_)
                | EpcError::MissingRating(_)
                | EpcError::RatingOutOfRange { .. }
                | EpcError::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_assessment_lists_allowed_set() {
        let msg = EpcError::InvalidAssessment("xyz".to_string()).to_string();
        for allowed in ["epc", "pea", "eer", "eir"] {
            assert!(msg.contains(allowed), "{msg}");
        }
        assert!(msg.contains("xyz"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(EpcError::MissingRating(RatingRole::CurrentEnergyEfficiency).is_validation());
        assert!(EpcError::UnsupportedFormat("psd".into()).is_validation());
        assert!(!EpcError::Encode("boom".into()).is_validation());
        assert!(!EpcError::Asset {
            path: "epc.png".into(),
            message: "missing".into()
        }
        .is_validation());
    }
}
