//! Numeric functions
//!
//! Implements: decimal, floor, ceiling, round (with the named rounding
//! modes), abs, modulo, integer modulo, integer division, sqrt, log, exp,
//! odd, even, and the aggregates min, max, sum, mean, product, median,
//! stddev and mode.
//!
//! Aggregates accept variadic arguments or a single list. A null operand
//! or empty input yields null.

use crate::comparator::RelationalComparator;
use crate::error::{EvalError, EvalResult};
use crate::library::variadic;
use crate::operators::comparison::ValueComparator;
use crate::operators::model::{any_null, expect_number};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use octofhir_feel_types::number::{from_f64, to_i64};
use octofhir_feel_types::{FeelValue, MathContext, RoundingPolicy};
use std::cmp::Ordering;

/// Scales a decimal128 value can express
const SCALE_RANGE: std::ops::RangeInclusive<i64> = -6111..=6176;

#[derive(Debug, Clone, Copy, Default)]
pub struct NumericLib {
    math: MathContext,
    comparator: ValueComparator,
}

impl NumericLib {
    pub fn new(math: MathContext) -> Self {
        Self {
            math,
            comparator: ValueComparator::new(),
        }
    }

    fn number(&self, value: BigDecimal) -> FeelValue {
        FeelValue::Number(self.math.round(value))
    }

    fn unary(
        &self,
        operand: &FeelValue,
        op: impl FnOnce(&BigDecimal) -> Option<BigDecimal>,
    ) -> EvalResult<FeelValue> {
        if operand.is_null() {
            return Ok(FeelValue::Null);
        }
        let n = expect_number(operand)?;
        Ok(op(n).map_or(FeelValue::Null, |v| self.number(v)))
    }

    fn binary(
        &self,
        left: &FeelValue,
        right: &FeelValue,
        op: impl FnOnce(&BigDecimal, &BigDecimal) -> Option<BigDecimal>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = (expect_number(left)?, expect_number(right)?);
        Ok(op(a, b).map_or(FeelValue::Null, |v| self.number(v)))
    }

    /// Set the scale of `n`; a missing scale means zero
    fn rescale(
        &self,
        n: &FeelValue,
        scale: Option<&FeelValue>,
        mode: RoundingMode,
    ) -> EvalResult<FeelValue> {
        if n.is_null() || scale.is_some_and(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let n = expect_number(n)?;
        let scale = match scale {
            Some(scale) => match expect_scale(scale)? {
                Some(scale) => scale,
                None => return Ok(FeelValue::Null),
            },
            None => 0,
        };
        Ok(FeelValue::Number(n.with_scale_round(scale, mode)))
    }

    /// `n` with `scale` digits after the point, rounding half-even
    pub fn decimal(&self, n: &FeelValue, scale: &FeelValue) -> EvalResult<FeelValue> {
        self.rescale(n, Some(scale), RoundingMode::HalfEven)
    }

    pub fn floor(&self, n: &FeelValue, scale: Option<&FeelValue>) -> EvalResult<FeelValue> {
        self.rescale(n, scale, RoundingMode::Floor)
    }

    pub fn ceiling(&self, n: &FeelValue, scale: Option<&FeelValue>) -> EvalResult<FeelValue> {
        self.rescale(n, scale, RoundingMode::Ceiling)
    }

    /// `round(n, scale, mode)` with a named rounding mode
    pub fn round(
        &self,
        n: &FeelValue,
        scale: &FeelValue,
        mode: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if mode.is_null() {
            return Ok(FeelValue::Null);
        }
        let name = mode
            .as_str()
            .ok_or_else(|| EvalError::unexpected("string", mode))?;
        let policy = RoundingPolicy::from_name(name).ok_or_else(|| {
            EvalError::invalid_operand("round", format!("unknown rounding mode '{name}'"))
        })?;
        self.rescale(n, Some(scale), policy.rounding_mode())
    }

    pub fn round_up(&self, n: &FeelValue, scale: &FeelValue) -> EvalResult<FeelValue> {
        self.rescale(n, Some(scale), RoundingMode::Up)
    }

    pub fn round_down(&self, n: &FeelValue, scale: &FeelValue) -> EvalResult<FeelValue> {
        self.rescale(n, Some(scale), RoundingMode::Down)
    }

    pub fn round_half_up(&self, n: &FeelValue, scale: &FeelValue) -> EvalResult<FeelValue> {
        self.rescale(n, Some(scale), RoundingMode::HalfUp)
    }

    pub fn round_half_down(&self, n: &FeelValue, scale: &FeelValue) -> EvalResult<FeelValue> {
        self.rescale(n, Some(scale), RoundingMode::HalfDown)
    }

    pub fn abs(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.unary(n, |n| Some(n.abs()))
    }

    /// Remainder of the floor quotient; takes the divisor's sign
    pub fn modulo(&self, dividend: &FeelValue, divisor: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(dividend, divisor, |a, b| {
            let q = quotient(a, b, Quotient::Floor)?;
            Some(a - &(b * &q))
        })
    }

    /// Remainder of the truncated quotient; takes the dividend's sign
    pub fn int_modulo(&self, dividend: &FeelValue, divisor: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(dividend, divisor, |a, b| {
            let q = quotient(a, b, Quotient::Truncate)?;
            Some(a - &(b * &q))
        })
    }

    /// Floor of the quotient
    pub fn integer_division(
        &self,
        dividend: &FeelValue,
        divisor: &FeelValue,
    ) -> EvalResult<FeelValue> {
        self.binary(dividend, divisor, |a, b| quotient(a, b, Quotient::Floor))
    }

    pub fn sqrt(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.unary(n, BigDecimal::sqrt)
    }

    /// Natural logarithm; null unless `n` is positive
    pub fn log(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.unary(n, |n| {
            if n <= &BigDecimal::zero() {
                return None;
            }
            from_f64(n.to_f64()?.ln())
        })
    }

    pub fn exp(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.unary(n, |n| from_f64(n.to_f64()?.exp()))
    }

    pub fn odd(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.parity(n, true)
    }

    pub fn even(&self, n: &FeelValue) -> EvalResult<FeelValue> {
        self.parity(n, false)
    }

    fn parity(&self, n: &FeelValue, odd: bool) -> EvalResult<FeelValue> {
        if n.is_null() {
            return Ok(FeelValue::Null);
        }
        let n = expect_number(n)?;
        if !n.is_integer() {
            return Ok(FeelValue::Null);
        }
        let remainder = n % &BigDecimal::from(2);
        Ok(FeelValue::Boolean(remainder.is_zero() != odd))
    }

    // ------------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------------

    pub fn min(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        self.extreme("min", args, Ordering::Less)
    }

    pub fn max(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        self.extreme("max", args, Ordering::Greater)
    }

    fn extreme(&self, name: &str, args: &[FeelValue], wanted: Ordering) -> EvalResult<FeelValue> {
        let items = variadic(args);
        if items.iter().any(FeelValue::is_null) {
            return Ok(FeelValue::Null);
        }
        let mut best: Option<&FeelValue> = None;
        for item in items {
            best = match best {
                None => Some(item),
                Some(current) => match self.comparator.compare(item, current)? {
                    Some(ordering) if ordering == wanted => Some(item),
                    Some(_) => Some(current),
                    None => {
                        return Err(EvalError::invalid_operand(
                            name,
                            format!(
                                "cannot compare {} with {}",
                                item.get_type(),
                                current.get_type()
                            ),
                        ))
                    }
                },
            };
        }
        Ok(best.cloned().unwrap_or(FeelValue::Null))
    }

    pub fn sum(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        Ok(self.number(numbers.into_iter().sum()))
    }

    pub fn mean(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        let count = BigDecimal::from(numbers.len() as u64);
        let total: BigDecimal = numbers.into_iter().sum();
        Ok(self.number(total / count))
    }

    pub fn product(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        let product = numbers
            .iter()
            .fold(BigDecimal::from(1), |acc, n| self.math.round(acc * n));
        Ok(FeelValue::Number(product))
    }

    pub fn median(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(mut numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        numbers.sort();
        let mid = numbers.len() / 2;
        if numbers.len() % 2 == 1 {
            return Ok(FeelValue::Number(numbers[mid].clone()));
        }
        let pair = &numbers[mid - 1] + &numbers[mid];
        Ok(self.number(pair / BigDecimal::from(2)))
    }

    /// Sample standard deviation; null below two operands
    pub fn stddev(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        if numbers.len() < 2 {
            return Ok(FeelValue::Null);
        }
        let count = BigDecimal::from(numbers.len() as u64);
        let mean = numbers.iter().sum::<BigDecimal>() / count.clone();
        let squares: BigDecimal = numbers
            .iter()
            .map(|n| {
                let diff = n - &mean;
                &diff * &diff
            })
            .sum();
        let variance = squares / (count - BigDecimal::from(1));
        Ok(variance.sqrt().map_or(FeelValue::Null, |v| self.number(v)))
    }

    /// Most frequent values in ascending order
    pub fn mode(&self, args: &[FeelValue]) -> EvalResult<FeelValue> {
        let Some(mut numbers) = numbers(args)? else {
            return Ok(FeelValue::Null);
        };
        numbers.sort();
        let mut runs: Vec<(BigDecimal, usize)> = Vec::new();
        for n in numbers {
            match runs.last_mut() {
                Some((value, count)) if *value == n => *count += 1,
                _ => runs.push((n, 1)),
            }
        }
        let top = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
        Ok(FeelValue::list(
            runs.into_iter()
                .filter(|(_, count)| *count == top)
                .map(|(value, _)| FeelValue::Number(value)),
        ))
    }
}

#[derive(Debug, Clone, Copy)]
enum Quotient {
    Floor,
    Truncate,
}

/// Exact integer quotient of `a / b`; none for a zero divisor
///
/// Both operands are scaled to integers with a common exponent, so the
/// quotient never passes through a rounded division.
fn quotient(a: &BigDecimal, b: &BigDecimal, kind: Quotient) -> Option<BigDecimal> {
    if b.is_zero() {
        return None;
    }
    let (a, a_scale) = a.as_bigint_and_exponent();
    let (b, b_scale) = b.as_bigint_and_exponent();
    let scale = a_scale.max(b_scale);
    let a = a * power_of_ten(scale - a_scale)?;
    let b = b * power_of_ten(scale - b_scale)?;
    let mut q = &a / &b;
    if let Quotient::Floor = kind {
        if !(&a % &b).is_zero() && a.is_negative() != b.is_negative() {
            q -= BigInt::one();
        }
    }
    Some(BigDecimal::new(q, 0))
}

/// `10^exponent` for exponents inside the decimal128 span
fn power_of_ten(exponent: i64) -> Option<BigInt> {
    let span = SCALE_RANGE.end() - SCALE_RANGE.start();
    if !(0..=span).contains(&exponent) {
        return None;
    }
    Some(num_traits::pow(BigInt::from(10), usize::try_from(exponent).ok()?))
}

/// Integral scale inside the decimal128 range
fn expect_scale(scale: &FeelValue) -> EvalResult<Option<i64>> {
    let n = expect_number(scale)?;
    let scale = to_i64(n)
        .ok_or_else(|| EvalError::invalid_operand("scale", format!("{n} is not an integer")))?;
    Ok(SCALE_RANGE.contains(&scale).then_some(scale))
}

/// Numeric operands of an aggregate; none on null or empty input
fn numbers(args: &[FeelValue]) -> EvalResult<Option<Vec<BigDecimal>>> {
    let items = variadic(args);
    if items.is_empty() || items.iter().any(FeelValue::is_null) {
        return Ok(None);
    }
    items
        .iter()
        .map(|item| expect_number(item).cloned())
        .collect::<EvalResult<Vec<_>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    fn n(s: &str) -> FeelValue {
        FeelValue::Number(BigDecimal::from_str(s).unwrap())
    }

    fn lib() -> NumericLib {
        NumericLib::new(MathContext::ARITHMETIC)
    }

    #[rstest]
    #[case("2.5", "half_up", "3")]
    #[case("2.5", "half_down", "2")]
    #[case("2.5", "half_even", "2")]
    #[case("-2.5", "up", "-3")]
    #[case("-2.5", "down", "-2")]
    #[case("-2.5", "half_up", "-3")]
    #[case("3.5", "half_even", "4")]
    fn test_round_modes(#[case] value: &str, #[case] mode: &str, #[case] expected: &str) {
        let result = lib().round(&n(value), &n("0"), &mode.into()).unwrap();
        assert_eq!(result, n(expected));
    }

    #[rstest]
    #[case("1250", "-2", "1200")]
    #[case("1350", "-2", "1400")]
    #[case("1.115", "2", "1.12")]
    #[case("1.125", "2", "1.12")]
    #[case("-1.125", "2", "-1.12")]
    fn test_decimal_half_even(#[case] value: &str, #[case] scale: &str, #[case] expected: &str) {
        let result = lib().decimal(&n(value), &n(scale)).unwrap();
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_named_rounding_functions() {
        let lib = lib();
        assert_eq!(lib.round_up(&n("5.5"), &n("0")).unwrap(), n("6"));
        assert_eq!(lib.round_up(&n("-5.5"), &n("0")).unwrap(), n("-6"));
        assert_eq!(lib.round_down(&n("5.5"), &n("0")).unwrap(), n("5"));
        assert_eq!(lib.round_half_up(&n("1.121"), &n("2")).unwrap(), n("1.12"));
        assert_eq!(lib.round_half_up(&n("-1.126"), &n("2")).unwrap(), n("-1.13"));
        assert_eq!(lib.round_half_down(&n("5.5"), &n("0")).unwrap(), n("5"));
        assert_eq!(lib.round_half_down(&n("-5.5"), &n("0")).unwrap(), n("-5"));
    }

    #[test]
    fn test_round_rejects_unknown_mode() {
        assert!(lib().round(&n("1"), &n("0"), &"sideways".into()).is_err());
        assert_eq!(
            lib().round(&n("1"), &n("0"), &FeelValue::Null).unwrap(),
            FeelValue::Null
        );
    }

    #[test]
    fn test_floor_and_ceiling() {
        let lib = lib();
        assert_eq!(lib.floor(&n("1.5"), None).unwrap(), n("1"));
        assert_eq!(lib.floor(&n("-1.5"), None).unwrap(), n("-2"));
        assert_eq!(lib.floor(&n("-1.56"), Some(&n("1"))).unwrap(), n("-1.6"));
        assert_eq!(lib.ceiling(&n("1.5"), None).unwrap(), n("2"));
        assert_eq!(lib.ceiling(&n("-1.5"), None).unwrap(), n("-1"));
        assert_eq!(lib.ceiling(&n("1.51"), Some(&n("1"))).unwrap(), n("1.6"));
        assert_eq!(lib.floor(&FeelValue::Null, None).unwrap(), FeelValue::Null);
        assert!(lib.floor(&n("1.5"), Some(&n("0.5"))).is_err());
    }

    #[rstest]
    #[case("12", "5", "2", "2")]
    #[case("-12", "5", "3", "-2")]
    #[case("12", "-5", "-3", "2")]
    #[case("-12", "-5", "-2", "-2")]
    #[case("10.1", "4.5", "1.1", "1.1")]
    #[case("-10.1", "4.5", "3.4", "-1.1")]
    fn test_modulo_conventions(
        #[case] a: &str,
        #[case] b: &str,
        #[case] floored: &str,
        #[case] truncated: &str,
    ) {
        assert_eq!(lib().modulo(&n(a), &n(b)).unwrap(), n(floored));
        assert_eq!(lib().int_modulo(&n(a), &n(b)).unwrap(), n(truncated));
    }

    #[rstest]
    #[case("1e120", "7", "1", "1")]
    #[case("-1e120", "7", "6", "-1")]
    #[case("1e120", "-7", "-6", "1")]
    #[case("1e40", "0.3", "0.1", "0.1")]
    fn test_modulo_of_large_dividends(
        #[case] a: &str,
        #[case] b: &str,
        #[case] floored: &str,
        #[case] truncated: &str,
    ) {
        assert_eq!(lib().modulo(&n(a), &n(b)).unwrap(), n(floored));
        assert_eq!(lib().int_modulo(&n(a), &n(b)).unwrap(), n(truncated));
    }

    #[test]
    fn test_integer_division_is_exact_before_rounding() {
        let lib = lib();
        assert_eq!(lib.integer_division(&n("1e120"), &n("1e100")).unwrap(), n("1e20"));
        // floor(-10^120 / 7) = -142857...142858, then 34 digits
        assert_eq!(
            lib.integer_division(&n("-1e120"), &n("7")).unwrap(),
            n("-1.428571428571428571428571428571429e119")
        );
    }

    #[test]
    fn test_division_by_zero_is_null() {
        let lib = lib();
        assert_eq!(lib.modulo(&n("1"), &n("0")).unwrap(), FeelValue::Null);
        assert_eq!(lib.int_modulo(&n("1"), &n("0")).unwrap(), FeelValue::Null);
        assert_eq!(lib.integer_division(&n("1"), &n("0")).unwrap(), FeelValue::Null);
        assert_eq!(lib.integer_division(&n("-7"), &n("2")).unwrap(), n("-4"));
    }

    #[test]
    fn test_transcendental() {
        let lib = lib();
        assert_eq!(lib.sqrt(&n("16")).unwrap(), n("4"));
        assert_eq!(lib.sqrt(&n("-1")).unwrap(), FeelValue::Null);
        assert_eq!(lib.log(&n("0")).unwrap(), FeelValue::Null);
        assert_eq!(lib.log(&n("1")).unwrap(), n("0"));
        assert_eq!(lib.exp(&n("0")).unwrap(), n("1"));
        let ln10 = lib.log(&n("10")).unwrap();
        assert!((ln10.as_number().unwrap().to_f64().unwrap() - std::f64::consts::LN_10).abs() < 1e-12);
    }

    #[test]
    fn test_parity() {
        let lib = lib();
        assert_eq!(lib.odd(&n("5")).unwrap(), FeelValue::Boolean(true));
        assert_eq!(lib.odd(&n("-2")).unwrap(), FeelValue::Boolean(false));
        assert_eq!(lib.even(&n("-2")).unwrap(), FeelValue::Boolean(true));
        assert_eq!(lib.even(&n("2.5")).unwrap(), FeelValue::Null);
    }

    #[test]
    fn test_aggregates() {
        let lib = lib();
        let values = [n("6"), n("1"), n("9"), n("6"), n("1")];
        assert_eq!(lib.min(&values).unwrap(), n("1"));
        assert_eq!(lib.max(&values).unwrap(), n("9"));
        assert_eq!(lib.sum(&values).unwrap(), n("23"));
        assert_eq!(lib.mean(&[n("1"), n("2"), n("3")]).unwrap(), n("2"));
        assert_eq!(lib.product(&[n("2"), n("3"), n("4")]).unwrap(), n("24"));
        assert_eq!(lib.median(&[n("8"), n("2"), n("5"), n("3"), n("4")]).unwrap(), n("4"));
        assert_eq!(lib.median(&[n("6"), n("1"), n("2"), n("3")]).unwrap(), n("2.5"));
        assert_eq!(lib.mode(&values).unwrap(), FeelValue::list([n("1"), n("6")]));
    }

    #[test]
    fn test_aggregates_accept_a_single_list() {
        let lib = lib();
        let list = FeelValue::list([n("1"), n("2"), n("3")]);
        assert_eq!(lib.sum(&[list.clone()]).unwrap(), n("6"));
        assert_eq!(lib.max(&[list]).unwrap(), n("3"));
    }

    #[test]
    fn test_aggregates_null_and_empty() {
        let lib = lib();
        assert_eq!(lib.sum(&[]).unwrap(), FeelValue::Null);
        assert_eq!(lib.mean(&[FeelValue::list([])]).unwrap(), FeelValue::Null);
        assert_eq!(lib.min(&[n("1"), FeelValue::Null]).unwrap(), FeelValue::Null);
        assert_eq!(lib.mode(&[]).unwrap(), FeelValue::Null);
        assert_eq!(lib.stddev(&[n("1")]).unwrap(), FeelValue::Null);
    }

    #[test]
    fn test_min_max_over_strings_and_mixed() {
        let lib = lib();
        let words = [FeelValue::from("b"), FeelValue::from("a")];
        assert_eq!(lib.min(&words).unwrap(), FeelValue::from("a"));
        assert!(lib.max(&[n("1"), FeelValue::from("a")]).is_err());
    }

    #[test]
    fn test_stddev() {
        let result = lib().stddev(&[n("2"), n("4"), n("7"), n("5")]).unwrap();
        let value = result.as_number().unwrap().to_f64().unwrap();
        assert!((value - 2.081_665_999_466_133).abs() < 1e-12);
    }
}
