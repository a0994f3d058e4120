//! Value construction errors

use thiserror::Error;

/// Result type for value construction
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised while building FEEL values from components
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A calendar component is outside its valid range
    #[error("Invalid {component}: {value}")]
    InvalidComponent { component: String, value: String },

    /// Offset magnitude is 18 hours or more
    #[error("Invalid offset: {seconds} seconds")]
    InvalidOffset { seconds: i64 },

    /// Zone id is not in the time zone database
    #[error("Unknown time zone: {zone}")]
    UnknownZone { zone: String },

    /// Range endpoints have different types or start exceeds end
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Result is not representable
    #[error("Value out of range: {message}")]
    OutOfRange { message: String },
}

impl ValueError {
    /// Create an invalid component error
    pub fn invalid_component(component: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }
}
