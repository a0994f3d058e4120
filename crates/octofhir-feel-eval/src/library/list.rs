//! List functions
//!
//! Implements: list contains, count, all, any, sublist, append,
//! concatenate, insert before, remove, reverse, index of, union,
//! distinct values, flatten, sort.
//!
//! Positions are 1-based; negative positions count from the end.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::library::variadic;
use crate::logic::{as_ternary, ternary_all, ternary_any};
use crate::operators::comparison::ValueComparator;
use crate::operators::list::resolve_index;
use crate::operators::model::{any_null, expect_integer, expect_list};
use octofhir_feel_types::FeelValue;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListLib {
    comparator: ValueComparator,
}

impl ListLib {
    pub fn new() -> Self {
        Self::default()
    }

    fn same(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<bool> {
        Ok(self.comparator.equal_to(left, right)? == Some(true))
    }

    fn position_of(&self, items: &[FeelValue], item: &FeelValue) -> EvalResult<Option<usize>> {
        for (i, candidate) in items.iter().enumerate() {
            if self.same(candidate, item)? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Items in order with later duplicates dropped
    fn distinct(&self, items: impl IntoIterator<Item = FeelValue>) -> EvalResult<Vec<FeelValue>> {
        let mut result = Vec::new();
        for item in items {
            if self.position_of(&result, &item)?.is_none() {
                result.push(item);
            }
        }
        Ok(result)
    }

    /// Check if `list` holds `element`; a null element matches a null item
    pub fn list_contains(&self, list: &FeelValue, element: &FeelValue) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let found = self.position_of(expect_list(list)?, element)?.is_some();
        Ok(FeelValue::Boolean(found))
    }

    pub fn count(&self, list: &FeelValue) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::from(expect_list(list)?.len()))
    }

    /// Three-valued `and` over booleans; non-booleans are unknown
    pub fn all(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        if let [FeelValue::Null] = args {
            return Ok(FeelValue::Null);
        }
        Ok(ternary_all(variadic(args).iter().map(as_ternary)).into())
    }

    /// Three-valued `or` over booleans; non-booleans are unknown
    pub fn any(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        if let [FeelValue::Null] = args {
            return Ok(FeelValue::Null);
        }
        Ok(ternary_any(variadic(args).iter().map(as_ternary)).into())
    }

    /// `sublist(list, start position, length?)`
    pub fn sublist(
        &self,
        list: &FeelValue,
        start: &FeelValue,
        length: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[list, start]) || length.is_some_and(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let items = expect_list(list)?;
        let Some(from) = resolve_index(expect_integer("sublist", start)?, items.len()) else {
            return Ok(FeelValue::Null);
        };
        let to = match length {
            Some(length) => {
                let length = expect_integer("sublist", length)?;
                match usize::try_from(length) {
                    Ok(length) if from + length <= items.len() => from + length,
                    _ => return Ok(FeelValue::Null),
                }
            }
            None => items.len(),
        };
        Ok(FeelValue::List(items[from..to].to_vec()))
    }

    pub fn append(&self, list: &FeelValue, items: &[FeelValue]) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let mut result = expect_list(list)?.to_vec();
        result.extend_from_slice(items);
        Ok(FeelValue::List(result))
    }

    pub fn concatenate(&self, lists: &[FeelValue]) -> EvalResult<FeelValue> {
        if lists.iter().any(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let mut result = Vec::new();
        for list in lists {
            result.extend_from_slice(expect_list(list)?);
        }
        Ok(FeelValue::List(result))
    }

    pub fn insert_before(
        &self,
        list: &FeelValue,
        position: &FeelValue,
        item: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[list, position]) {
            return Ok(FeelValue::Null);
        }
        let items = expect_list(list)?;
        let Some(at) = resolve_index(expect_integer("insert before", position)?, items.len())
        else {
            return Ok(FeelValue::Null);
        };
        let mut result = items.to_vec();
        result.insert(at, item.clone());
        Ok(FeelValue::List(result))
    }

    pub fn remove(&self, list: &FeelValue, position: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[list, position]) {
            return Ok(FeelValue::Null);
        }
        let items = expect_list(list)?;
        let Some(at) = resolve_index(expect_integer("remove", position)?, items.len()) else {
            return Ok(FeelValue::Null);
        };
        let mut result = items.to_vec();
        result.remove(at);
        Ok(FeelValue::List(result))
    }

    pub fn reverse(&self, list: &FeelValue) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::list(expect_list(list)?.iter().rev().cloned()))
    }

    /// 1-based positions of every item equal to `item`
    pub fn index_of(&self, list: &FeelValue, item: &FeelValue) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let mut positions = Vec::new();
        for (i, candidate) in expect_list(list)?.iter().enumerate() {
            if self.same(candidate, item)? {
                positions.push(FeelValue::from(i + 1));
            }
        }
        Ok(FeelValue::List(positions))
    }

    pub fn union(&self, lists: &[FeelValue]) -> EvalResult<FeelValue> {
        let FeelValue::List(all) = self.concatenate(lists)? else {
            return Ok(FeelValue::Null);
        };
        Ok(FeelValue::List(self.distinct(all)?))
    }

    pub fn distinct_values(&self, list: &FeelValue) -> EvalResult<FeelValue> {
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let items = expect_list(list)?.iter().cloned();
        Ok(FeelValue::List(self.distinct(items)?))
    }

    /// Nested lists spliced in place, recursively
    pub fn flatten(&self, list: &FeelValue) -> EvalResult<FeelValue> {
        fn flatten_into(items: &[FeelValue], out: &mut Vec<FeelValue>) {
            for item in items {
                match item {
                    FeelValue::List(inner) => flatten_into(inner, out),
                    other => out.push(other.clone()),
                }
            }
        }

        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let mut result = Vec::new();
        flatten_into(expect_list(list)?, &mut result);
        Ok(FeelValue::List(result))
    }

    /// Ascending natural order
    ///
    /// A `precedes` function cannot be invoked by this runtime.
    pub fn sort(&self, list: &FeelValue, precedes: Option<&FeelValue>) -> EvalResult<FeelValue> {
        if let Some(FeelValue::Function(f)) = precedes {
            return Err(EvalError::not_supported(format!(
                "sort with precedes function '{}'",
                f.name()
            )));
        }
        if list.is_null() {
            return Ok(FeelValue::Null);
        }
        let mut items = expect_list(list)?.to_vec();
        let mut failure = None;
        items.sort_by(|a, b| match self.comparator.compare(a, b) {
            Ok(Some(ordering)) => ordering,
            Ok(None) => {
                failure.get_or_insert_with(|| {
                    EvalError::invalid_operand(
                        "sort",
                        format!("cannot order {} and {}", a.get_type(), b.get_type()),
                    )
                });
                Ordering::Equal
            }
            Err(e) => {
                failure.get_or_insert(e);
                Ordering::Equal
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(FeelValue::List(items)),
        }
    }
}
