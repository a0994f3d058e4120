//! Three-valued logic
//!
//! `None` is the unknown truth value. `and` is false-dominant and `or` is
//! true-dominant, so a definite operand can decide the result even when the
//! other side is unknown.

use octofhir_feel_types::FeelValue;

/// Truth value with unknown
pub type Ternary = Option<bool>;

/// Negation; unknown stays unknown
pub fn ternary_not(value: Ternary) -> Ternary {
    value.map(|v| !v)
}

/// Conjunction
///
/// | A     | B     | A and B |
/// |-------|-------|---------|
/// | true  | true  | true    |
/// | true  | false | false   |
/// | true  | null  | null    |
/// | false | *     | false   |
/// | null  | false | false   |
/// | null  | null  | null    |
pub fn ternary_and(left: Ternary, right: Ternary) -> Ternary {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

/// Disjunction
///
/// | A     | B     | A or B  |
/// |-------|-------|---------|
/// | true  | *     | true    |
/// | false | true  | true    |
/// | false | false | false   |
/// | false | null  | null    |
/// | null  | true  | true    |
/// | null  | null  | null    |
pub fn ternary_or(left: Ternary, right: Ternary) -> Ternary {
    match (left, right) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

/// Fold operands with `and`, starting from true
pub fn ternary_all(values: impl IntoIterator<Item = Ternary>) -> Ternary {
    values.into_iter().fold(Some(true), ternary_and)
}

/// Fold operands with `or`, starting from false
pub fn ternary_any(values: impl IntoIterator<Item = Ternary>) -> Ternary {
    values.into_iter().fold(Some(false), ternary_or)
}

/// Read a value in a boolean position
///
/// Anything that is not strictly a boolean is unknown.
pub fn as_ternary(value: &FeelValue) -> Ternary {
    value.as_boolean()
}
