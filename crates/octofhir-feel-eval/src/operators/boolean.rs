//! Boolean Operators for FEEL
//!
//! Implements: not, and, or (binary and variadic)
//! Operands that are not strictly boolean are unknown.

use crate::comparator::EqualityComparator;
use crate::error::EvalResult;
use crate::logic::{as_ternary, ternary_all, ternary_and, ternary_any, ternary_not, ternary_or, Ternary};
use crate::operators::comparison::BooleanComparator;
use crate::operators::model::ValueModel;
use octofhir_feel_types::{FeelType, FeelValue};

/// Boolean operators
pub trait BooleanType: ValueModel {
    fn boolean_not(&self, operand: &FeelValue) -> Ternary;

    fn binary_and(&self, left: &FeelValue, right: &FeelValue) -> Ternary;

    fn binary_or(&self, left: &FeelValue, right: &FeelValue) -> Ternary;

    /// Variadic `and` over operands or over a single list
    fn boolean_and(&self, operands: &[FeelValue]) -> EvalResult<Ternary>;

    /// Variadic `or` over operands or over a single list
    fn boolean_or(&self, operands: &[FeelValue]) -> EvalResult<Ternary>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBooleanType {
    comparator: BooleanComparator,
}

impl DefaultBooleanType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operands of a variadic call
    ///
    /// A single list argument supplies the operands; a single argument of
    /// any other kind is not a valid call.
    fn operands<'a>(&self, operands: &'a [FeelValue]) -> Option<&'a [FeelValue]> {
        match operands {
            [single] => single.as_list(),
            _ => Some(operands),
        }
    }
}

impl ValueModel for DefaultBooleanType {
    fn feel_type(&self) -> FeelType {
        FeelType::Boolean
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl BooleanType for DefaultBooleanType {
    fn boolean_not(&self, operand: &FeelValue) -> Ternary {
        ternary_not(as_ternary(operand))
    }

    fn binary_and(&self, left: &FeelValue, right: &FeelValue) -> Ternary {
        ternary_and(as_ternary(left), as_ternary(right))
    }

    fn binary_or(&self, left: &FeelValue, right: &FeelValue) -> Ternary {
        ternary_or(as_ternary(left), as_ternary(right))
    }

    fn boolean_and(&self, operands: &[FeelValue]) -> EvalResult<Ternary> {
        Ok(self
            .operands(operands)
            .and_then(|items| ternary_all(items.iter().map(as_ternary))))
    }

    fn boolean_or(&self, operands: &[FeelValue]) -> EvalResult<Ternary> {
        Ok(self
            .operands(operands)
            .and_then(|items| ternary_any(items.iter().map(as_ternary))))
    }
}
