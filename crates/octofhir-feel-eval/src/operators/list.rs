//! List Operators for FEEL
//!
//! Implements: list equality and element access.
//! Lists may hold nulls; equality checks every position with null-aware
//! `=` and combines the results with three-valued `and`.

use crate::comparator::EqualityComparator;
use crate::error::EvalResult;
use crate::operators::comparison::ValueComparator;
use crate::operators::model::{any_null, expect_list, expect_number, ValueModel};
use octofhir_feel_types::number::to_i64;
use octofhir_feel_types::{FeelType, FeelValue};

/// List operators
pub trait ListType: ValueModel {
    /// `list[index]`; 1-based, negative indexes count from the end
    fn element_at(&self, list: &FeelValue, index: &FeelValue) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultListType {
    comparator: ValueComparator,
}

impl DefaultListType {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Zero-based position of a FEEL index into a sequence of `len` items
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let position = match index {
        0 => return None,
        i if i > 0 => i - 1,
        i => len + i,
    };
    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}

impl ValueModel for DefaultListType {
    fn feel_type(&self) -> FeelType {
        FeelType::List
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl ListType for DefaultListType {
    fn element_at(&self, list: &FeelValue, index: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[list, index]) {
            return Ok(FeelValue::Null);
        }
        let (items, index) = (expect_list(list)?, expect_number(index)?);
        Ok(to_i64(index)
            .and_then(|i| resolve_index(i, items.len()))
            .map_or(FeelValue::Null, |position| items[position].clone()))
    }
}
