//! String functions
//!
//! Implements: string length, substring, upper case, lower case,
//! substring before, substring after, contains, starts with, ends with,
//! matches, replace, split.
//!
//! Positions and lengths count Unicode code points.

use crate::error::{EvalError, EvalResult};
use crate::operators::model::{any_null, expect_integer, expect_string};
use crate::pattern::{RegexBackend, StandardRegex};
use octofhir_feel_types::FeelValue;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StringLib {
    regex: Arc<dyn RegexBackend>,
}

impl Default for StringLib {
    fn default() -> Self {
        Self::new(Arc::new(StandardRegex::new()))
    }
}

impl StringLib {
    pub fn new(regex: Arc<dyn RegexBackend>) -> Self {
        Self { regex }
    }

    pub fn string_length(&self, s: &FeelValue) -> EvalResult<FeelValue> {
        if s.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::from(expect_string(s)?.chars().count()))
    }

    /// `substring(string, start position, length?)`
    ///
    /// `start` is 1-based and counts from the end when negative; a missing
    /// length takes the rest of the string.
    pub fn substring(
        &self,
        s: &FeelValue,
        start: &FeelValue,
        length: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[s, start]) || length.is_some_and(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let chars: Vec<char> = expect_string(s)?.chars().collect();
        let len = i64::try_from(chars.len()).map_err(|_| EvalError::overflow("substring"))?;
        let start = expect_integer("substring", start)?;
        let from = match start {
            0 => return Ok(FeelValue::Null),
            s if s > 0 => s - 1,
            s => len + s,
        };
        if !(0..=len).contains(&from) {
            return Ok(FeelValue::Null);
        }
        let to = match length {
            Some(length) => {
                let length = expect_integer("substring", length)?;
                if length < 0 {
                    return Ok(FeelValue::Null);
                }
                from.saturating_add(length).min(len)
            }
            None => len,
        };
        let (from, to) = (to_index(from)?, to_index(to)?);
        Ok(FeelValue::String(chars[from..to].iter().collect()))
    }

    pub fn upper_case(&self, s: &FeelValue) -> EvalResult<FeelValue> {
        self.map_string(s, str::to_uppercase)
    }

    pub fn lower_case(&self, s: &FeelValue) -> EvalResult<FeelValue> {
        self.map_string(s, str::to_lowercase)
    }

    fn map_string(&self, s: &FeelValue, op: impl FnOnce(&str) -> String) -> EvalResult<FeelValue> {
        if s.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::String(op(expect_string(s)?)))
    }

    /// Text before the first occurrence of `needle`; empty when absent
    pub fn substring_before(&self, s: &FeelValue, needle: &FeelValue) -> EvalResult<FeelValue> {
        self.binary_string(s, needle, |s, needle| {
            FeelValue::string(s.find(needle).map_or("", |i| &s[..i]))
        })
    }

    /// Text after the first occurrence of `needle`; empty when absent
    pub fn substring_after(&self, s: &FeelValue, needle: &FeelValue) -> EvalResult<FeelValue> {
        self.binary_string(s, needle, |s, needle| {
            FeelValue::string(s.find(needle).map_or("", |i| &s[i + needle.len()..]))
        })
    }

    pub fn contains(&self, s: &FeelValue, needle: &FeelValue) -> EvalResult<FeelValue> {
        self.binary_string(s, needle, |s, needle| FeelValue::Boolean(s.contains(needle)))
    }

    pub fn starts_with(&self, s: &FeelValue, prefix: &FeelValue) -> EvalResult<FeelValue> {
        self.binary_string(s, prefix, |s, prefix| FeelValue::Boolean(s.starts_with(prefix)))
    }

    pub fn ends_with(&self, s: &FeelValue, suffix: &FeelValue) -> EvalResult<FeelValue> {
        self.binary_string(s, suffix, |s, suffix| FeelValue::Boolean(s.ends_with(suffix)))
    }

    fn binary_string(
        &self,
        left: &FeelValue,
        right: &FeelValue,
        op: impl FnOnce(&str, &str) -> FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        Ok(op(expect_string(left)?, expect_string(right)?))
    }

    pub fn matches(
        &self,
        input: &FeelValue,
        pattern: &FeelValue,
        flags: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[input, pattern]) || flags.is_some_and(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let flags = flags.map(expect_string).transpose()?.unwrap_or("");
        let matched = self
            .regex
            .matches(expect_string(input)?, expect_string(pattern)?, flags)?;
        Ok(FeelValue::Boolean(matched))
    }

    pub fn replace(
        &self,
        input: &FeelValue,
        pattern: &FeelValue,
        replacement: &FeelValue,
        flags: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[input, pattern, replacement]) || flags.is_some_and(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let flags = flags.map(expect_string).transpose()?.unwrap_or("");
        let replaced = self.regex.replace(
            expect_string(input)?,
            expect_string(pattern)?,
            expect_string(replacement)?,
            flags,
        )?;
        Ok(FeelValue::String(replaced))
    }

    pub fn split(&self, s: &FeelValue, delimiter: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[s, delimiter]) {
            return Ok(FeelValue::Null);
        }
        let parts = self
            .regex
            .split(expect_string(s)?, expect_string(delimiter)?)?;
        Ok(FeelValue::list(parts.into_iter().map(FeelValue::String)))
    }
}

fn to_index(position: i64) -> EvalResult<usize> {
    usize::try_from(position).map_err(|_| EvalError::internal("negative string index"))
}
