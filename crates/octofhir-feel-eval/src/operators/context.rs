//! Context Operators for FEEL
//!
//! Implements: get value, get entries, construction from entries

use crate::comparator::EqualityComparator;
use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::ValueComparator;
use crate::operators::model::{any_null, expect_list, expect_string, ValueModel};
use octofhir_feel_types::{FeelContext, FeelType, FeelValue};

/// Context operators
pub trait ContextType: ValueModel {
    /// Value under `key`; null when missing
    fn get_value(&self, context: &FeelValue, key: &FeelValue) -> EvalResult<FeelValue>;

    /// `{key, value}` contexts in insertion order
    fn get_entries(&self, context: &FeelValue) -> EvalResult<FeelValue>;

    /// Context built from a list of `{key, value}` contexts
    fn context(&self, entries: &FeelValue) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContextType {
    comparator: ValueComparator,
}

impl DefaultContextType {
    pub fn new() -> Self {
        Self::default()
    }
}

fn expect_context(value: &FeelValue) -> EvalResult<&FeelContext> {
    value
        .as_context()
        .ok_or_else(|| EvalError::unexpected("context", value))
}

impl ValueModel for DefaultContextType {
    fn feel_type(&self) -> FeelType {
        FeelType::Context
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl ContextType for DefaultContextType {
    fn get_value(&self, context: &FeelValue, key: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[context, key]) {
            return Ok(FeelValue::Null);
        }
        let (context, key) = (expect_context(context)?, expect_string(key)?);
        Ok(context.get(key).cloned().unwrap_or(FeelValue::Null))
    }

    fn get_entries(&self, context: &FeelValue) -> EvalResult<FeelValue> {
        if context.is_null() {
            return Ok(FeelValue::Null);
        }
        let entries = expect_context(context)?
            .iter()
            .map(|(key, value)| {
                FeelValue::Context(
                    FeelContext::new()
                        .with("key", FeelValue::string(key.as_str()))
                        .with("value", value.clone()),
                )
            })
            .collect::<Vec<_>>();
        Ok(FeelValue::List(entries))
    }

    fn context(&self, entries: &FeelValue) -> EvalResult<FeelValue> {
        if entries.is_null() {
            return Ok(FeelValue::Null);
        }
        let mut context = FeelContext::new();
        for entry in expect_list(entries)? {
            let entry = expect_context(entry)?;
            let key = match entry.get("key") {
                Some(FeelValue::String(key)) => key,
                _ => return Ok(FeelValue::Null),
            };
            if context.contains_key(key) {
                return Err(EvalError::invalid_operand(
                    "context",
                    format!("duplicate key '{key}'"),
                ));
            }
            let value = entry.get("value").cloned().unwrap_or(FeelValue::Null);
            context.insert(key.as_str(), value);
        }
        Ok(FeelValue::Context(context))
    }
}
