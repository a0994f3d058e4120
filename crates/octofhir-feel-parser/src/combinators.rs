//! Shared parser combinators

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Input type for all literal parsers
pub(crate) type Input<'a> = &'a str;

/// Parser result
pub(crate) type PResult<O> = ModalResult<O>;

/// Exactly two ASCII digits
pub(crate) fn two_digits(input: &mut Input<'_>) -> PResult<i64> {
    take_while(2, |c: char| c.is_ascii_digit())
        .try_map(|digits: &str| digits.parse::<i64>())
        .parse_next(input)
}

/// Unsigned integer of any length that fits `i64`
pub(crate) fn integer(input: &mut Input<'_>) -> PResult<i64> {
    digit1
        .try_map(|digits: &str| digits.parse::<i64>())
        .parse_next(input)
}

/// Optional sign; `true` for `-`
pub(crate) fn sign(input: &mut Input<'_>) -> PResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// Fraction of a second after the dot, as nanoseconds
///
/// Digits beyond nanosecond precision are dropped.
pub(crate) fn fraction(input: &mut Input<'_>) -> PResult<i64> {
    preceded('.', digit1)
        .try_map(|digits: &str| {
            let nanos: String = digits.chars().chain(std::iter::repeat('0')).take(9).collect();
            nanos.parse::<i64>()
        })
        .parse_next(input)
}

/// Unsigned decimal such as `12`, `12.5` or `.5`
pub(crate) fn unsigned_decimal<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    alt(((digit1, opt(('.', digit1))).take(), ('.', digit1).take())).parse_next(input)
}
