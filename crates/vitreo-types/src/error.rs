//! Parse error types

use thiserror::Error;

/// Error returned when a wire value does not name a member of a closed enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown innovation category: {0}")]
    UnknownCategory(String),

    #[error("Unknown technique category: {0}")]
    UnknownTechniqueCategory(String),

    #[error("Unknown significance: {0}")]
    UnknownSignificance(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown complexity: {0}")]
    UnknownComplexity(String),
}
