//! Duration Operators for FEEL
//!
//! Implements: +, - between durations, * and / by a number, duration /
//! duration, unary minus.
//! Combining a years and months duration with a days and time duration is
//! an error, not null.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::DurationComparator;
use crate::operators::model::{
    any_null, expect_duration, expect_number, OrderedValueModel, ValueModel,
};
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use octofhir_feel_types::{FeelDuration, FeelType, FeelValue, MathContext};

/// Duration operators
pub trait DurationType: OrderedValueModel {
    fn is_years_and_months_duration(&self, value: &FeelValue) -> bool;

    fn is_days_and_time_duration(&self, value: &FeelValue) -> bool;

    fn duration_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn duration_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn duration_multiply_number(
        &self,
        duration: &FeelValue,
        number: &FeelValue,
    ) -> EvalResult<FeelValue>;

    fn duration_divide_number(
        &self,
        duration: &FeelValue,
        number: &FeelValue,
    ) -> EvalResult<FeelValue>;

    /// Ratio of two durations of the same subtype
    fn duration_divide(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn duration_unary_minus(&self, operand: &FeelValue) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDurationType {
    math: MathContext,
    comparator: DurationComparator,
}

impl DefaultDurationType {
    pub fn new(math: MathContext) -> Self {
        Self {
            math,
            comparator: DurationComparator::new(),
        }
    }

    /// Both operands, which must be of the same subtype
    fn same_kind<'a>(
        &self,
        operator: &str,
        left: &'a FeelValue,
        right: &'a FeelValue,
    ) -> EvalResult<(&'a FeelDuration, &'a FeelDuration)> {
        let (a, b) = (expect_duration(left)?, expect_duration(right)?);
        if a.kind() != b.kind() {
            return Err(EvalError::duration_mismatch(
                operator,
                a.feel_type(),
                b.feel_type(),
            ));
        }
        Ok((a, b))
    }

    /// Duration of the same subtype with magnitude `value` (months or seconds)
    fn scaled(&self, template: &FeelDuration, value: BigDecimal) -> EvalResult<FeelValue> {
        let duration = match template {
            FeelDuration::YearsMonths { .. } => value
                .with_scale_round(0, RoundingMode::Down)
                .to_i64()
                .map(FeelDuration::from_months)
                .ok_or_else(|| EvalError::overflow("years and months duration"))?,
            FeelDuration::DaysTime(_) => FeelDuration::from_seconds(&self.math.round(value))?,
        };
        Ok(FeelValue::Duration(duration))
    }
}

impl ValueModel for DefaultDurationType {
    fn feel_type(&self) -> FeelType {
        FeelType::DaysAndTimeDuration
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }

    fn is_instance(&self, value: &FeelValue) -> bool {
        value.as_duration().is_some()
    }

    fn check(&self, value: &FeelValue) -> EvalResult<()> {
        if value.is_null() || self.is_instance(value) {
            Ok(())
        } else {
            Err(EvalError::unexpected("duration", value))
        }
    }

    /// Months of a years and months duration, seconds of a days and time one
    fn value(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::Number(expect_duration(value)?.value()))
    }
}

impl OrderedValueModel for DefaultDurationType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl DurationType for DefaultDurationType {
    fn is_years_and_months_duration(&self, value: &FeelValue) -> bool {
        value.get_type() == FeelType::YearsAndMonthsDuration
    }

    fn is_days_and_time_duration(&self, value: &FeelValue) -> bool {
        value.get_type() == FeelType::DaysAndTimeDuration
    }

    fn duration_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = self.same_kind("add", left, right)?;
        let sum = match (a, b) {
            (FeelDuration::YearsMonths { months: x }, FeelDuration::YearsMonths { months: y }) => {
                x.checked_add(*y).map(FeelDuration::from_months)
            }
            (FeelDuration::DaysTime(x), FeelDuration::DaysTime(y)) => {
                x.checked_add(y).map(FeelDuration::days_time)
            }
            _ => None,
        };
        sum.map(FeelValue::Duration)
            .ok_or_else(|| EvalError::overflow("duration + duration"))
    }

    fn duration_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        self.same_kind("subtract", left, right)?;
        let negated = expect_duration(right)?
            .negate()
            .map(FeelValue::Duration)
            .ok_or_else(|| EvalError::overflow("duration - duration"))?;
        self.duration_add(left, &negated)
    }

    fn duration_multiply_number(
        &self,
        duration: &FeelValue,
        number: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[duration, number]) {
            return Ok(FeelValue::Null);
        }
        let (d, n) = (expect_duration(duration)?, expect_number(number)?);
        self.scaled(d, d.value() * n)
    }

    fn duration_divide_number(
        &self,
        duration: &FeelValue,
        number: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[duration, number]) {
            return Ok(FeelValue::Null);
        }
        let (d, n) = (expect_duration(duration)?, expect_number(number)?);
        if n.is_zero() {
            return Ok(FeelValue::Null);
        }
        self.scaled(d, d.value() / n)
    }

    fn duration_divide(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = self.same_kind("divide", left, right)?;
        if b.is_zero() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::Number(self.math.round(a.value() / b.value())))
    }

    fn duration_unary_minus(&self, operand: &FeelValue) -> EvalResult<FeelValue> {
        if operand.is_null() {
            return Ok(FeelValue::Null);
        }
        expect_duration(operand)?
            .negate()
            .map(FeelValue::Duration)
            .ok_or_else(|| EvalError::overflow("-duration"))
    }
}
