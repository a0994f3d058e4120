use octofhir_feel_types::ValueError;
use thiserror::Error;

/// Result type for literal parsing
pub type LiteralResult<T> = Result<T, LiteralError>;

/// Literal parsing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Text does not match the literal grammar
    #[error("Malformed {kind} literal: '{text}'")]
    Malformed { kind: &'static str, text: String },

    /// Unsupported or clashing number separators
    #[error("Invalid separators: grouping {grouping:?}, decimal {decimal:?}")]
    InvalidSeparators {
        grouping: Option<String>,
        decimal: Option<String>,
    },

    /// Duration combines years/months with days/time
    #[error("Duration mixes years and months with days and time: '{text}'")]
    MixedDuration { text: String },

    /// Offset and zone id given together
    #[error("Both an offset and a zone id in '{text}'")]
    ConflictingZone { text: String },

    /// Components parsed but do not form a valid value
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl LiteralError {
    pub(crate) fn malformed(kind: &'static str, text: &str) -> Self {
        Self::Malformed {
            kind,
            text: text.to_string(),
        }
    }
}
