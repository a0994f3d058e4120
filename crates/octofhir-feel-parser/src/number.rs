//! Number literals

use crate::combinators::{sign, unsigned_decimal, Input, PResult};
use crate::error::{LiteralError, LiteralResult};
use bigdecimal::BigDecimal;
use std::str::FromStr;
use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::one_of;

const GROUPING_SEPARATORS: [&str; 3] = [" ", ".", ","];
const DECIMAL_SEPARATORS: [&str; 2] = [".", ","];

/// `[+-]digits[.digits][e[+-]digits]`
fn number_text<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    (
        sign,
        unsigned_decimal,
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Parse a plain number literal
///
/// The value is exact; callers round it into their math context.
pub fn parse_number(text: &str) -> LiteralResult<BigDecimal> {
    let trimmed = text.trim();
    let digits = number_text
        .parse(trimmed)
        .map_err(|_| LiteralError::malformed("number", text))?;
    BigDecimal::from_str(digits.strip_prefix('+').unwrap_or(digits))
        .map_err(|_| LiteralError::malformed("number", text))
}

/// Parse a number written with locale separators
///
/// `grouping` may be a space, `.` or `,`; `decimal` may be `.` or `,`. The
/// two must differ. Grouping characters are removed before parsing.
pub fn parse_localized_number(
    text: &str,
    grouping: Option<&str>,
    decimal: Option<&str>,
) -> LiteralResult<BigDecimal> {
    let invalid = || LiteralError::InvalidSeparators {
        grouping: grouping.map(str::to_string),
        decimal: decimal.map(str::to_string),
    };

    if grouping.is_some_and(|g| !GROUPING_SEPARATORS.contains(&g))
        || decimal.is_some_and(|d| !DECIMAL_SEPARATORS.contains(&d))
        || (grouping.is_some() && grouping == decimal)
    {
        return Err(invalid());
    }

    let mut normalized = match grouping {
        Some(g) => text.replace(g, ""),
        None => text.to_string(),
    };
    if let Some(d) = decimal {
        if d != "." {
            if normalized.contains('.') {
                return Err(LiteralError::malformed("number", text));
            }
            normalized = normalized.replace(d, ".");
        }
    }
    parse_number(&normalized).map_err(|_| LiteralError::malformed("number", text))
}
