//! String Operators for FEEL
//!
//! Implements: string concatenation and the lexicographic order

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::EvalResult;
use crate::operators::comparison::StringComparator;
use crate::operators::model::{any_null, expect_string, OrderedValueModel, ValueModel};
use octofhir_feel_types::{FeelType, FeelValue};

/// String operators
pub trait StringType: OrderedValueModel {
    /// `+` on strings
    fn string_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStringType {
    comparator: StringComparator,
}

impl DefaultStringType {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueModel for DefaultStringType {
    fn feel_type(&self) -> FeelType {
        FeelType::String
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl OrderedValueModel for DefaultStringType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl StringType for DefaultStringType {
    fn string_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let mut joined = expect_string(left)?.to_string();
        joined.push_str(expect_string(right)?);
        Ok(FeelValue::String(joined))
    }
}
