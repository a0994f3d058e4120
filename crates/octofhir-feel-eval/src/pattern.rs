//! Regular expression backend
//!
//! `matches`, `replace` and `split` delegate to a [`RegexBackend`]. The
//! default [`StandardRegex`] is built on the `regex` crate and understands
//! the flags `s`, `m`, `i` and `x`.

use crate::error::{EvalError, EvalResult};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Regex engine used by the string functions
pub trait RegexBackend: Send + Sync + fmt::Debug {
    /// Check if `pattern` matches anywhere in `input`
    fn matches(&self, input: &str, pattern: &str, flags: &str) -> EvalResult<bool>;

    /// Replace every match of `pattern`; `$N` in `replacement` refers to group N
    fn replace(
        &self,
        input: &str,
        pattern: &str,
        replacement: &str,
        flags: &str,
    ) -> EvalResult<String>;

    /// Split `input` around matches of `pattern`
    fn split(&self, input: &str, pattern: &str) -> EvalResult<Vec<String>>;
}

/// Backend on top of the `regex` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRegex;

impl StandardRegex {
    pub fn new() -> Self {
        Self
    }

    fn compile(pattern: &str, flags: &str) -> EvalResult<Regex> {
        let mut builder = RegexBuilder::new(pattern);
        for flag in flags.chars() {
            match flag {
                's' => builder.dot_matches_new_line(true),
                'm' => builder.multi_line(true),
                'i' => builder.case_insensitive(true),
                'x' => builder.ignore_whitespace(true),
                _ => {
                    return Err(EvalError::InvalidFlags {
                        flags: flags.to_string(),
                    })
                }
            };
        }
        builder.build().map_err(|e| {
            log::debug!("rejected regex pattern '{pattern}': {e}");
            EvalError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Compile a pattern that must not match the empty string
    fn compile_non_empty(operation: &str, pattern: &str, flags: &str) -> EvalResult<Regex> {
        let regex = Self::compile(pattern, flags)?;
        if regex.is_match("") {
            return Err(EvalError::invalid_operand(
                operation,
                format!("pattern '{pattern}' matches the empty string"),
            ));
        }
        Ok(regex)
    }
}

impl RegexBackend for StandardRegex {
    fn matches(&self, input: &str, pattern: &str, flags: &str) -> EvalResult<bool> {
        Ok(Self::compile(pattern, flags)?.is_match(input))
    }

    fn replace(
        &self,
        input: &str,
        pattern: &str,
        replacement: &str,
        flags: &str,
    ) -> EvalResult<String> {
        let regex = Self::compile_non_empty("replace", pattern, flags)?;
        let replacement = translate_replacement(replacement)?;
        Ok(regex.replace_all(input, replacement.as_str()).into_owned())
    }

    fn split(&self, input: &str, pattern: &str) -> EvalResult<Vec<String>> {
        let regex = Self::compile_non_empty("split", pattern, "")?;
        if input.is_empty() {
            return Ok(Vec::new());
        }
        Ok(regex.split(input).map(str::to_string).collect())
    }
}

/// Rewrite a replacement string into `regex` syntax
///
/// `$N` becomes `${N}`, `\$` a literal dollar and `\\` a literal backslash.
fn translate_replacement(replacement: &str) -> EvalResult<String> {
    let mut result = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('$') => result.push_str("$$"),
                Some('\\') => result.push('\\'),
                _ => {
                    return Err(EvalError::invalid_operand(
                        "replace",
                        format!("invalid escape in replacement '{replacement}'"),
                    ))
                }
            },
            '$' => {
                let mut group = String::new();
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    group.push(digit);
                }
                if group.is_empty() {
                    return Err(EvalError::invalid_operand(
                        "replace",
                        format!("'$' without group number in '{replacement}'"),
                    ));
                }
                result.push_str("${");
                result.push_str(&group);
                result.push('}');
            }
            _ => result.push(c),
        }
    }
    Ok(result)
}
