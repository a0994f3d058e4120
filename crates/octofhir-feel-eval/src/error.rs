//! Evaluation errors for FEEL operators
//!
//! These are internal faults. Semantic unknowns (null operands, division by
//! zero, malformed literals) are `Ok(FeelValue::Null)`, never errors.

use octofhir_feel_parser::LiteralError;
use octofhir_feel_types::{FeelType, FeelValue, ValueError};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur below the `FeelLib` facade
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Type mismatch error
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Invalid operand error
    #[error("Invalid operand for {operator}: {message}")]
    InvalidOperand { operator: String, message: String },

    /// Years-and-months combined with days-and-time
    #[error("Cannot {operator} {left} and {right}")]
    DurationMismatch {
        operator: String,
        left: FeelType,
        right: FeelType,
    },

    /// Invalid regex pattern
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Regex flags outside `s`, `m`, `i`, `x`
    #[error("Invalid regex flags: {flags}")]
    InvalidFlags { flags: String },

    /// Arithmetic overflow
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    /// Feature path that is not implemented
    #[error("Not supported: {feature}")]
    NotSupported { feature: String },

    /// Value construction failed
    #[error(transparent)]
    InvalidValue(#[from] ValueError),

    /// Literal could not be parsed
    #[error(transparent)]
    Literal(#[from] LiteralError),

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a type mismatch error for an unexpected value
    pub fn unexpected(expected: impl Into<String>, found: &FeelValue) -> Self {
        Self::type_mismatch(expected, found.get_type().name())
    }

    /// Create an invalid operand error
    pub fn invalid_operand(operator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOperand {
            operator: operator.into(),
            message: message.into(),
        }
    }

    /// Create a duration mismatch error
    pub fn duration_mismatch(operator: impl Into<String>, left: FeelType, right: FeelType) -> Self {
        Self::DurationMismatch {
            operator: operator.into(),
            left,
            right,
        }
    }

    /// Create an overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Create a not supported error
    pub fn not_supported(feature: impl Into<String>) -> Self {
        Self::NotSupported {
            feature: feature.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error marks an unimplemented feature path
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}
