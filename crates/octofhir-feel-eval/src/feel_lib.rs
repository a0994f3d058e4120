//! FEEL library facade
//!
//! [`FeelLib`] gathers the value models and function libraries behind one
//! flat set of operations for generated decision code. Every operation
//! contains internal faults: the fault is logged at `error` level under the
//! `octofhir_feel::lib` target and the result degrades to null. Semantic
//! unknowns are ordinary results and are not logged.
//!
//! # Example
//!
//! ```
//! use octofhir_feel_eval::FeelLib;
//! use octofhir_feel_types::FeelValue;
//!
//! let lib = FeelLib::new();
//! let sum = lib.add(&FeelValue::from(1), &FeelValue::from(2));
//! assert_eq!(sum, FeelValue::from(3));
//!
//! // a fault is contained
//! assert_eq!(lib.add(&FeelValue::from(1), &FeelValue::from(true)), FeelValue::Null);
//! ```

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::library::{ConversionLib, DateTimeLib, ListLib, NumericLib, RangeLib, StringLib};
use crate::logic::Ternary;
use crate::operators::{
    value_is, BooleanType, ContextType, DateTimeType, DateType, DefaultBooleanType,
    DefaultContextType, DefaultDateTimeType, DefaultDateType, DefaultDurationType,
    DefaultFunctionType, DefaultListType, DefaultNumericType, DefaultRangeType,
    DefaultStringType, DefaultTimeType, DurationType, ListType, NumericType,
    OrderedValueModel, RangeType, StringType, TimeType, ValueComparator, ValueModel,
};
use crate::pattern::{RegexBackend, StandardRegex};
use octofhir_feel_types::{FeelValue, MathContext, RoundingPolicy, DECIMAL128_PRECISION};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const LOG_TARGET: &str = "octofhir_feel::lib";

// ============================================================================
// Configuration
// ============================================================================

/// Numeric settings of a [`FeelLib`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeelLibConfig {
    /// Significant digits kept by arithmetic and literals
    pub precision: u64,
    /// Rounding of `+`, `-`, `*`, `/`, `**` and the aggregates
    pub arithmetic_rounding: RoundingPolicy,
    /// Rounding of numbers read from text
    pub literal_rounding: RoundingPolicy,
}

impl Default for FeelLibConfig {
    fn default() -> Self {
        Self {
            precision: DECIMAL128_PRECISION,
            arithmetic_rounding: RoundingPolicy::HalfUp,
            literal_rounding: RoundingPolicy::HalfEven,
        }
    }
}

impl FeelLibConfig {
    pub fn arithmetic_context(&self) -> MathContext {
        MathContext::new(self.precision, self.arithmetic_rounding)
    }

    pub fn literal_context(&self) -> MathContext {
        MathContext::new(self.precision, self.literal_rounding)
    }
}

/// Builder for [`FeelLib`]
#[derive(Debug, Default)]
pub struct FeelLibBuilder {
    config: FeelLibConfig,
    regex_backend: Option<Arc<dyn RegexBackend>>,
}

impl FeelLibBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: FeelLibConfig) -> Self {
        self.config = config;
        self
    }

    pub fn precision(mut self, precision: u64) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn arithmetic_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.config.arithmetic_rounding = rounding;
        self
    }

    pub fn literal_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.config.literal_rounding = rounding;
        self
    }

    /// Regex engine behind `matches`, `replace` and `split`
    pub fn regex_backend(mut self, backend: Arc<dyn RegexBackend>) -> Self {
        self.regex_backend = Some(backend);
        self
    }

    pub fn build(self) -> FeelLib {
        let arithmetic = self.config.arithmetic_context();
        let regex = self
            .regex_backend
            .unwrap_or_else(|| Arc::new(StandardRegex::new()));
        FeelLib {
            config: self.config,
            comparator: ValueComparator::new(),
            boolean: DefaultBooleanType::new(),
            numeric: DefaultNumericType::new(arithmetic),
            string: DefaultStringType::new(),
            date: DefaultDateType::new(),
            time: DefaultTimeType::new(),
            date_time: DefaultDateTimeType::new(),
            duration: DefaultDurationType::new(arithmetic),
            list: DefaultListType::new(),
            context: DefaultContextType::new(),
            range: DefaultRangeType::new(),
            function: DefaultFunctionType::new(),
            numeric_lib: NumericLib::new(arithmetic),
            string_lib: StringLib::new(regex),
            list_lib: ListLib::new(),
            date_time_lib: DateTimeLib::new(),
            range_lib: RangeLib::new(),
            conversion_lib: ConversionLib::new(self.config.literal_context()),
        }
    }
}

// ============================================================================
// Fault containment
// ============================================================================

fn report(operation: &str, args: &[&FeelValue], error: &EvalError) {
    let rendered = args
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log::error!(target: LOG_TARGET, "{operation}({rendered}) failed: {error}");
}

fn contain(operation: &str, args: &[&FeelValue], result: EvalResult<FeelValue>) -> FeelValue {
    result.unwrap_or_else(|error| {
        report(operation, args, &error);
        FeelValue::Null
    })
}

fn contain_ternary(operation: &str, args: &[&FeelValue], result: EvalResult<Ternary>) -> FeelValue {
    contain(operation, args, result.map(FeelValue::from))
}

/// Comparison through one value model; operands of another type are a fault
fn typed<M: ValueModel>(
    operation: &str,
    model: &M,
    left: &FeelValue,
    right: &FeelValue,
    op: impl FnOnce(&M, &FeelValue, &FeelValue) -> EvalResult<Ternary>,
) -> FeelValue {
    let result = model
        .check(left)
        .and_then(|()| model.check(right))
        .and_then(|()| op(model, left, right));
    contain_ternary(operation, &[left, right], result)
}

/// Required arguments followed by an optional one, for reporting
fn with_optional<'a>(required: &[&'a FeelValue], optional: Option<&'a FeelValue>) -> Vec<&'a FeelValue> {
    required.iter().copied().chain(optional).collect()
}

fn all_of(args: &[FeelValue]) -> Vec<&FeelValue> {
    args.iter().collect()
}

fn unsupported(operator: &str, left: &FeelValue, right: &FeelValue) -> EvalError {
    EvalError::invalid_operand(
        operator,
        format!("not defined for {} and {}", left.get_type(), right.get_type()),
    )
}

// ============================================================================
// Facade
// ============================================================================

/// Flat FEEL operator and function namespace
///
/// A `FeelLib` holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct FeelLib {
    config: FeelLibConfig,
    comparator: ValueComparator,
    boolean: DefaultBooleanType,
    numeric: DefaultNumericType,
    string: DefaultStringType,
    date: DefaultDateType,
    time: DefaultTimeType,
    date_time: DefaultDateTimeType,
    duration: DefaultDurationType,
    list: DefaultListType,
    context: DefaultContextType,
    range: DefaultRangeType,
    function: DefaultFunctionType,
    numeric_lib: NumericLib,
    string_lib: StringLib,
    list_lib: ListLib,
    date_time_lib: DateTimeLib,
    range_lib: RangeLib,
    conversion_lib: ConversionLib,
}

impl Default for FeelLib {
    fn default() -> Self {
        Self::new()
    }
}

impl FeelLib {
    /// Library with the decimal128 defaults
    pub fn new() -> Self {
        FeelLibBuilder::new().build()
    }

    pub fn builder() -> FeelLibBuilder {
        FeelLibBuilder::new()
    }

    pub fn config(&self) -> &FeelLibConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Type predicates
    // ------------------------------------------------------------------------

    pub fn is_boolean(&self, value: &FeelValue) -> bool {
        self.boolean.is_instance(value)
    }

    pub fn is_number(&self, value: &FeelValue) -> bool {
        self.numeric.is_instance(value)
    }

    pub fn is_string(&self, value: &FeelValue) -> bool {
        self.string.is_instance(value)
    }

    pub fn is_date(&self, value: &FeelValue) -> bool {
        self.date.is_instance(value)
    }

    pub fn is_time(&self, value: &FeelValue) -> bool {
        self.time.is_instance(value)
    }

    pub fn is_date_time(&self, value: &FeelValue) -> bool {
        self.date_time.is_instance(value)
    }

    /// Either duration subtype
    pub fn is_duration(&self, value: &FeelValue) -> bool {
        self.duration.is_instance(value)
    }

    pub fn is_years_and_months_duration(&self, value: &FeelValue) -> bool {
        self.duration.is_years_and_months_duration(value)
    }

    pub fn is_days_and_time_duration(&self, value: &FeelValue) -> bool {
        self.duration.is_days_and_time_duration(value)
    }

    pub fn is_list(&self, value: &FeelValue) -> bool {
        self.list.is_instance(value)
    }

    pub fn is_context(&self, value: &FeelValue) -> bool {
        self.context.is_instance(value)
    }

    pub fn is_range(&self, value: &FeelValue) -> bool {
        self.range.is_instance(value)
    }

    pub fn is_function(&self, value: &FeelValue) -> bool {
        self.function.is_instance(value)
    }

    // ------------------------------------------------------------------------
    // Comparable magnitudes
    // ------------------------------------------------------------------------

    /// Seconds since the epoch at midnight UTC
    pub fn date_value(&self, value: &FeelValue) -> FeelValue {
        contain("date value", &[value], self.date.value(value))
    }

    /// Seconds since midnight, shifted to UTC when qualified
    pub fn time_value(&self, value: &FeelValue) -> FeelValue {
        contain("time value", &[value], self.time.value(value))
    }

    /// Seconds since the epoch; naive values read as UTC
    pub fn date_time_value(&self, value: &FeelValue) -> FeelValue {
        contain("date and time value", &[value], self.date_time.value(value))
    }

    /// Months or seconds, depending on the subtype
    pub fn duration_value(&self, value: &FeelValue) -> FeelValue {
        contain("duration value", &[value], self.duration.value(value))
    }

    // ------------------------------------------------------------------------
    // Generic comparison
    // ------------------------------------------------------------------------

    /// FEEL `is(a, b)`: same type, same value and same temporal qualifier
    pub fn is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        FeelValue::Boolean(value_is(left, right))
    }

    pub fn equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("=", &[left, right], self.comparator.equal_to(left, right))
    }

    pub fn not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("!=", &[left, right], self.comparator.not_equal_to(left, right))
    }

    pub fn less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("<", &[left, right], self.comparator.less_than(left, right))
    }

    pub fn greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(">", &[left, right], self.comparator.greater_than(left, right))
    }

    pub fn less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("<=", &[left, right], self.comparator.less_equal_than(left, right))
    }

    pub fn greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(
            ">=",
            &[left, right],
            self.comparator.greater_equal_than(left, right),
        )
    }

    // ------------------------------------------------------------------------
    // Typed comparison
    //
    // Each entry point accepts null or its own type only. Any other operand
    // is a fault and yields null.
    // ------------------------------------------------------------------------

    pub fn numeric_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number is", &self.numeric, left, right, ValueModel::is)
    }

    pub fn numeric_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number =", &self.numeric, left, right, ValueModel::equal)
    }

    pub fn numeric_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number !=", &self.numeric, left, right, ValueModel::not_equal)
    }

    pub fn numeric_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number <", &self.numeric, left, right, OrderedValueModel::less_than)
    }

    pub fn numeric_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number >", &self.numeric, left, right, OrderedValueModel::greater_than)
    }

    pub fn numeric_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("number <=", &self.numeric, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn numeric_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "number >=",
            &self.numeric,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn string_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string is", &self.string, left, right, ValueModel::is)
    }

    pub fn string_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string =", &self.string, left, right, ValueModel::equal)
    }

    pub fn string_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string !=", &self.string, left, right, ValueModel::not_equal)
    }

    pub fn string_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string <", &self.string, left, right, OrderedValueModel::less_than)
    }

    pub fn string_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string >", &self.string, left, right, OrderedValueModel::greater_than)
    }

    pub fn string_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("string <=", &self.string, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn string_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "string >=",
            &self.string,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn date_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date is", &self.date, left, right, ValueModel::is)
    }

    pub fn date_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date =", &self.date, left, right, ValueModel::equal)
    }

    pub fn date_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date !=", &self.date, left, right, ValueModel::not_equal)
    }

    pub fn date_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date <", &self.date, left, right, OrderedValueModel::less_than)
    }

    pub fn date_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date >", &self.date, left, right, OrderedValueModel::greater_than)
    }

    pub fn date_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date <=", &self.date, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn date_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "date >=",
            &self.date,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn time_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time is", &self.time, left, right, ValueModel::is)
    }

    pub fn time_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time =", &self.time, left, right, ValueModel::equal)
    }

    pub fn time_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time !=", &self.time, left, right, ValueModel::not_equal)
    }

    pub fn time_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time <", &self.time, left, right, OrderedValueModel::less_than)
    }

    pub fn time_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time >", &self.time, left, right, OrderedValueModel::greater_than)
    }

    pub fn time_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("time <=", &self.time, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn time_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "time >=",
            &self.time,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn date_time_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time is", &self.date_time, left, right, ValueModel::is)
    }

    pub fn date_time_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time =", &self.date_time, left, right, ValueModel::equal)
    }

    pub fn date_time_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time !=", &self.date_time, left, right, ValueModel::not_equal)
    }

    pub fn date_time_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time <", &self.date_time, left, right, OrderedValueModel::less_than)
    }

    pub fn date_time_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time >", &self.date_time, left, right, OrderedValueModel::greater_than)
    }

    pub fn date_time_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("date and time <=", &self.date_time, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn date_time_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "date and time >=",
            &self.date_time,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn duration_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration is", &self.duration, left, right, ValueModel::is)
    }

    pub fn duration_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration =", &self.duration, left, right, ValueModel::equal)
    }

    pub fn duration_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration !=", &self.duration, left, right, ValueModel::not_equal)
    }

    pub fn duration_less_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration <", &self.duration, left, right, OrderedValueModel::less_than)
    }

    pub fn duration_greater_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration >", &self.duration, left, right, OrderedValueModel::greater_than)
    }

    pub fn duration_less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("duration <=", &self.duration, left, right, OrderedValueModel::less_equal_than)
    }

    pub fn duration_greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed(
            "duration >=",
            &self.duration,
            left,
            right,
            OrderedValueModel::greater_equal_than,
        )
    }

    pub fn boolean_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("boolean is", &self.boolean, left, right, ValueModel::is)
    }

    pub fn boolean_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("boolean =", &self.boolean, left, right, ValueModel::equal)
    }

    pub fn boolean_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("boolean !=", &self.boolean, left, right, ValueModel::not_equal)
    }

    pub fn list_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("list is", &self.list, left, right, ValueModel::is)
    }

    pub fn list_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("list =", &self.list, left, right, ValueModel::equal)
    }

    pub fn list_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("list !=", &self.list, left, right, ValueModel::not_equal)
    }

    pub fn context_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("context is", &self.context, left, right, ValueModel::is)
    }

    pub fn context_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("context =", &self.context, left, right, ValueModel::equal)
    }

    pub fn context_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("context !=", &self.context, left, right, ValueModel::not_equal)
    }

    pub fn range_is(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("range is", &self.range, left, right, ValueModel::is)
    }

    pub fn range_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("range =", &self.range, left, right, ValueModel::equal)
    }

    pub fn range_not_equal(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        typed("range !=", &self.range, left, right, ValueModel::not_equal)
    }

    // ------------------------------------------------------------------------
    // Boolean logic
    // ------------------------------------------------------------------------

    pub fn not(&self, operand: &FeelValue) -> FeelValue {
        self.boolean.boolean_not(operand).into()
    }

    pub fn and(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        self.boolean.binary_and(left, right).into()
    }

    pub fn or(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        self.boolean.binary_or(left, right).into()
    }

    /// Conjunction of two or more operands, or of one list
    pub fn boolean_and(&self, operands: &[FeelValue]) -> FeelValue {
        contain_ternary("and", &all_of(operands), self.boolean.boolean_and(operands))
    }

    /// Disjunction of two or more operands, or of one list
    pub fn boolean_or(&self, operands: &[FeelValue]) -> FeelValue {
        contain_ternary("or", &all_of(operands), self.boolean.boolean_or(operands))
    }

    // ------------------------------------------------------------------------
    // Arithmetic, dispatched on operand types
    // ------------------------------------------------------------------------

    pub fn add(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("+", &[left, right], self.dispatch_add(left, right))
    }

    pub fn subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.dispatch_subtract(left, right))
    }

    pub fn multiply(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("*", &[left, right], self.dispatch_multiply(left, right))
    }

    pub fn divide(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("/", &[left, right], self.dispatch_divide(left, right))
    }

    pub fn exponentiation(&self, base: &FeelValue, exponent: &FeelValue) -> FeelValue {
        contain(
            "**",
            &[base, exponent],
            self.numeric.numeric_exponentiation(base, exponent),
        )
    }

    pub fn negate(&self, operand: &FeelValue) -> FeelValue {
        let result = match operand {
            FeelValue::Null => Ok(FeelValue::Null),
            FeelValue::Duration(_) => self.duration.duration_unary_minus(operand),
            _ => self.numeric.numeric_unary_minus(operand),
        };
        contain("-", &[operand], result)
    }

    fn dispatch_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        match (left, right) {
            (FeelValue::Null, _) | (_, FeelValue::Null) => Ok(FeelValue::Null),
            (FeelValue::Number(_), _) => self.numeric.numeric_add(left, right),
            (FeelValue::String(_), _) => self.string.string_add(left, right),
            (FeelValue::Duration(_), FeelValue::Duration(_)) => {
                self.duration.duration_add(left, right)
            }
            (FeelValue::Date(_), FeelValue::Duration(_)) => {
                self.date.date_add_duration(left, right)
            }
            (FeelValue::Duration(_), FeelValue::Date(_)) => {
                self.date.date_add_duration(right, left)
            }
            (FeelValue::Time(_), FeelValue::Duration(_)) => {
                self.time.time_add_duration(left, right)
            }
            (FeelValue::Duration(_), FeelValue::Time(_)) => {
                self.time.time_add_duration(right, left)
            }
            (FeelValue::DateTime(_), FeelValue::Duration(_)) => {
                self.date_time.date_time_add_duration(left, right)
            }
            (FeelValue::Duration(_), FeelValue::DateTime(_)) => {
                self.date_time.date_time_add_duration(right, left)
            }
            _ => Err(unsupported("+", left, right)),
        }
    }

    fn dispatch_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        match (left, right) {
            (FeelValue::Null, _) | (_, FeelValue::Null) => Ok(FeelValue::Null),
            (FeelValue::Number(_), _) => self.numeric.numeric_subtract(left, right),
            (FeelValue::Duration(_), _) => self.duration.duration_subtract(left, right),
            (FeelValue::Date(_), FeelValue::Date(_)) => self.date.date_subtract(left, right),
            (FeelValue::Date(_), FeelValue::Duration(_)) => {
                self.date.date_subtract_duration(left, right)
            }
            (FeelValue::Time(_), FeelValue::Time(_)) => self.time.time_subtract(left, right),
            (FeelValue::Time(_), FeelValue::Duration(_)) => {
                self.time.time_subtract_duration(left, right)
            }
            (FeelValue::DateTime(_), FeelValue::DateTime(_)) => {
                self.date_time.date_time_subtract(left, right)
            }
            (FeelValue::DateTime(_), FeelValue::Duration(_)) => {
                self.date_time.date_time_subtract_duration(left, right)
            }
            _ => Err(unsupported("-", left, right)),
        }
    }

    fn dispatch_multiply(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        match (left, right) {
            (FeelValue::Null, _) | (_, FeelValue::Null) => Ok(FeelValue::Null),
            (FeelValue::Number(_), FeelValue::Duration(_)) => {
                self.duration.duration_multiply_number(right, left)
            }
            (FeelValue::Duration(_), _) => self.duration.duration_multiply_number(left, right),
            (FeelValue::Number(_), _) => self.numeric.numeric_multiply(left, right),
            _ => Err(unsupported("*", left, right)),
        }
    }

    fn dispatch_divide(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        match (left, right) {
            (FeelValue::Null, _) | (_, FeelValue::Null) => Ok(FeelValue::Null),
            (FeelValue::Duration(_), FeelValue::Duration(_)) => {
                self.duration.duration_divide(left, right)
            }
            (FeelValue::Duration(_), _) => self.duration.duration_divide_number(left, right),
            (FeelValue::Number(_), _) => self.numeric.numeric_divide(left, right),
            _ => Err(unsupported("/", left, right)),
        }
    }

    // ------------------------------------------------------------------------
    // Typed arithmetic
    // ------------------------------------------------------------------------

    pub fn numeric_add(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("+", &[left, right], self.numeric.numeric_add(left, right))
    }

    pub fn numeric_subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.numeric.numeric_subtract(left, right))
    }

    pub fn numeric_multiply(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("*", &[left, right], self.numeric.numeric_multiply(left, right))
    }

    /// Division; a zero divisor gives null
    pub fn numeric_divide(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("/", &[left, right], self.numeric.numeric_divide(left, right))
    }

    pub fn string_add(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("+", &[left, right], self.string.string_add(left, right))
    }

    pub fn date_subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.date.date_subtract(left, right))
    }

    pub fn time_subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.time.time_subtract(left, right))
    }

    pub fn date_time_subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.date_time.date_time_subtract(left, right))
    }

    pub fn duration_add(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("+", &[left, right], self.duration.duration_add(left, right))
    }

    pub fn duration_subtract(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("-", &[left, right], self.duration.duration_subtract(left, right))
    }

    pub fn duration_divide(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain("/", &[left, right], self.duration.duration_divide(left, right))
    }

    // ------------------------------------------------------------------------
    // Lists, contexts and ranges
    // ------------------------------------------------------------------------

    /// `list[index]` with 1-based and negative indices
    pub fn element_at(&self, list: &FeelValue, index: &FeelValue) -> FeelValue {
        contain("element at", &[list, index], self.list.element_at(list, index))
    }

    pub fn get_value(&self, context: &FeelValue, key: &FeelValue) -> FeelValue {
        contain("get value", &[context, key], self.context.get_value(context, key))
    }

    pub fn get_entries(&self, context: &FeelValue) -> FeelValue {
        contain("get entries", &[context], self.context.get_entries(context))
    }

    /// Context built from a list of `{key, value}` contexts
    pub fn context(&self, entries: &FeelValue) -> FeelValue {
        contain("context", &[entries], self.context.context(entries))
    }

    pub fn range(
        &self,
        start_included: bool,
        start: &FeelValue,
        end: &FeelValue,
        end_included: bool,
    ) -> FeelValue {
        contain(
            "range",
            &[start, end],
            self.range.range(start_included, start, end, end_included),
        )
    }

    /// Unary test range such as `< 10`
    pub fn range_from_operator(&self, operator: &FeelValue, endpoint: &FeelValue) -> FeelValue {
        contain(
            "range",
            &[operator, endpoint],
            self.range.range_from_operator(operator, endpoint),
        )
    }

    pub fn range_contains(&self, range: &FeelValue, point: &FeelValue) -> FeelValue {
        contain_ternary("in", &[range, point], self.range.range_contains(range, point))
    }

    // ------------------------------------------------------------------------
    // Conversion functions
    // ------------------------------------------------------------------------

    pub fn number(
        &self,
        from: &FeelValue,
        grouping: Option<&FeelValue>,
        decimal: Option<&FeelValue>,
    ) -> FeelValue {
        let mut args = vec![from];
        args.extend(grouping);
        args.extend(decimal);
        contain("number", &args, self.conversion_lib.number(from, grouping, decimal))
    }

    pub fn string(&self, from: &FeelValue) -> FeelValue {
        contain("string", &[from], self.conversion_lib.string(from))
    }

    pub fn date(&self, from: &FeelValue) -> FeelValue {
        contain("date", &[from], self.date_time_lib.date(from))
    }

    pub fn date_from_parts(&self, year: &FeelValue, month: &FeelValue, day: &FeelValue) -> FeelValue {
        contain(
            "date",
            &[year, month, day],
            self.date_time_lib.date_from_parts(year, month, day),
        )
    }

    pub fn time(&self, from: &FeelValue) -> FeelValue {
        contain("time", &[from], self.date_time_lib.time(from))
    }

    pub fn time_from_parts(
        &self,
        hour: &FeelValue,
        minute: &FeelValue,
        second: &FeelValue,
        offset: Option<&FeelValue>,
    ) -> FeelValue {
        contain(
            "time",
            &with_optional(&[hour, minute, second], offset),
            self.date_time_lib.time_from_parts(hour, minute, second, offset),
        )
    }

    pub fn date_and_time(&self, from: &FeelValue) -> FeelValue {
        contain("date and time", &[from], self.date_time_lib.date_and_time(from))
    }

    pub fn date_and_time_from_parts(&self, date: &FeelValue, time: &FeelValue) -> FeelValue {
        contain(
            "date and time",
            &[date, time],
            self.date_time_lib.date_and_time_from_parts(date, time),
        )
    }

    pub fn duration(&self, from: &FeelValue) -> FeelValue {
        contain("duration", &[from], self.date_time_lib.duration(from))
    }

    pub fn years_and_months_duration(&self, from: &FeelValue, to: &FeelValue) -> FeelValue {
        contain(
            "years and months duration",
            &[from, to],
            self.date_time_lib.years_and_months_duration(from, to),
        )
    }

    // ------------------------------------------------------------------------
    // Numeric functions
    // ------------------------------------------------------------------------

    pub fn decimal(&self, n: &FeelValue, scale: &FeelValue) -> FeelValue {
        contain("decimal", &[n, scale], self.numeric_lib.decimal(n, scale))
    }

    pub fn floor(&self, n: &FeelValue, scale: Option<&FeelValue>) -> FeelValue {
        contain("floor", &with_optional(&[n], scale), self.numeric_lib.floor(n, scale))
    }

    pub fn ceiling(&self, n: &FeelValue, scale: Option<&FeelValue>) -> FeelValue {
        contain(
            "ceiling",
            &with_optional(&[n], scale),
            self.numeric_lib.ceiling(n, scale),
        )
    }

    pub fn round(&self, n: &FeelValue, scale: &FeelValue, mode: &FeelValue) -> FeelValue {
        contain("round", &[n, scale, mode], self.numeric_lib.round(n, scale, mode))
    }

    pub fn round_up(&self, n: &FeelValue, scale: &FeelValue) -> FeelValue {
        contain("round up", &[n, scale], self.numeric_lib.round_up(n, scale))
    }

    pub fn round_down(&self, n: &FeelValue, scale: &FeelValue) -> FeelValue {
        contain("round down", &[n, scale], self.numeric_lib.round_down(n, scale))
    }

    pub fn round_half_up(&self, n: &FeelValue, scale: &FeelValue) -> FeelValue {
        contain("round half up", &[n, scale], self.numeric_lib.round_half_up(n, scale))
    }

    pub fn round_half_down(&self, n: &FeelValue, scale: &FeelValue) -> FeelValue {
        contain(
            "round half down",
            &[n, scale],
            self.numeric_lib.round_half_down(n, scale),
        )
    }

    pub fn abs(&self, n: &FeelValue) -> FeelValue {
        contain("abs", &[n], self.numeric_lib.abs(n))
    }

    pub fn modulo(&self, dividend: &FeelValue, divisor: &FeelValue) -> FeelValue {
        contain(
            "modulo",
            &[dividend, divisor],
            self.numeric_lib.modulo(dividend, divisor),
        )
    }

    pub fn int_modulo(&self, dividend: &FeelValue, divisor: &FeelValue) -> FeelValue {
        contain(
            "int modulo",
            &[dividend, divisor],
            self.numeric_lib.int_modulo(dividend, divisor),
        )
    }

    pub fn integer_division(&self, dividend: &FeelValue, divisor: &FeelValue) -> FeelValue {
        contain(
            "integer division",
            &[dividend, divisor],
            self.numeric_lib.integer_division(dividend, divisor),
        )
    }

    pub fn sqrt(&self, n: &FeelValue) -> FeelValue {
        contain("sqrt", &[n], self.numeric_lib.sqrt(n))
    }

    pub fn log(&self, n: &FeelValue) -> FeelValue {
        contain("log", &[n], self.numeric_lib.log(n))
    }

    pub fn exp(&self, n: &FeelValue) -> FeelValue {
        contain("exp", &[n], self.numeric_lib.exp(n))
    }

    pub fn odd(&self, n: &FeelValue) -> FeelValue {
        contain("odd", &[n], self.numeric_lib.odd(n))
    }

    pub fn even(&self, n: &FeelValue) -> FeelValue {
        contain("even", &[n], self.numeric_lib.even(n))
    }

    pub fn min(&self, args: &[FeelValue]) -> FeelValue {
        contain("min", &all_of(args), self.numeric_lib.min(args))
    }

    pub fn max(&self, args: &[FeelValue]) -> FeelValue {
        contain("max", &all_of(args), self.numeric_lib.max(args))
    }

    pub fn sum(&self, args: &[FeelValue]) -> FeelValue {
        contain("sum", &all_of(args), self.numeric_lib.sum(args))
    }

    pub fn mean(&self, args: &[FeelValue]) -> FeelValue {
        contain("mean", &all_of(args), self.numeric_lib.mean(args))
    }

    pub fn product(&self, args: &[FeelValue]) -> FeelValue {
        contain("product", &all_of(args), self.numeric_lib.product(args))
    }

    pub fn median(&self, args: &[FeelValue]) -> FeelValue {
        contain("median", &all_of(args), self.numeric_lib.median(args))
    }

    pub fn stddev(&self, args: &[FeelValue]) -> FeelValue {
        contain("stddev", &all_of(args), self.numeric_lib.stddev(args))
    }

    pub fn mode(&self, args: &[FeelValue]) -> FeelValue {
        contain("mode", &all_of(args), self.numeric_lib.mode(args))
    }

    // ------------------------------------------------------------------------
    // String functions
    // ------------------------------------------------------------------------

    pub fn string_length(&self, s: &FeelValue) -> FeelValue {
        contain("string length", &[s], self.string_lib.string_length(s))
    }

    pub fn substring(&self, s: &FeelValue, start: &FeelValue, length: Option<&FeelValue>) -> FeelValue {
        contain(
            "substring",
            &with_optional(&[s, start], length),
            self.string_lib.substring(s, start, length),
        )
    }

    pub fn upper_case(&self, s: &FeelValue) -> FeelValue {
        contain("upper case", &[s], self.string_lib.upper_case(s))
    }

    pub fn lower_case(&self, s: &FeelValue) -> FeelValue {
        contain("lower case", &[s], self.string_lib.lower_case(s))
    }

    pub fn substring_before(&self, s: &FeelValue, needle: &FeelValue) -> FeelValue {
        contain(
            "substring before",
            &[s, needle],
            self.string_lib.substring_before(s, needle),
        )
    }

    pub fn substring_after(&self, s: &FeelValue, needle: &FeelValue) -> FeelValue {
        contain(
            "substring after",
            &[s, needle],
            self.string_lib.substring_after(s, needle),
        )
    }

    pub fn contains(&self, s: &FeelValue, needle: &FeelValue) -> FeelValue {
        contain("contains", &[s, needle], self.string_lib.contains(s, needle))
    }

    pub fn starts_with(&self, s: &FeelValue, prefix: &FeelValue) -> FeelValue {
        contain("starts with", &[s, prefix], self.string_lib.starts_with(s, prefix))
    }

    pub fn ends_with(&self, s: &FeelValue, suffix: &FeelValue) -> FeelValue {
        contain("ends with", &[s, suffix], self.string_lib.ends_with(s, suffix))
    }

    pub fn matches(&self, input: &FeelValue, pattern: &FeelValue, flags: Option<&FeelValue>) -> FeelValue {
        contain(
            "matches",
            &with_optional(&[input, pattern], flags),
            self.string_lib.matches(input, pattern, flags),
        )
    }

    pub fn replace(
        &self,
        input: &FeelValue,
        pattern: &FeelValue,
        replacement: &FeelValue,
        flags: Option<&FeelValue>,
    ) -> FeelValue {
        contain(
            "replace",
            &with_optional(&[input, pattern, replacement], flags),
            self.string_lib.replace(input, pattern, replacement, flags),
        )
    }

    pub fn split(&self, s: &FeelValue, delimiter: &FeelValue) -> FeelValue {
        contain("split", &[s, delimiter], self.string_lib.split(s, delimiter))
    }

    // ------------------------------------------------------------------------
    // List functions
    // ------------------------------------------------------------------------

    pub fn list_contains(&self, list: &FeelValue, element: &FeelValue) -> FeelValue {
        contain(
            "list contains",
            &[list, element],
            self.list_lib.list_contains(list, element),
        )
    }

    pub fn count(&self, list: &FeelValue) -> FeelValue {
        contain("count", &[list], self.list_lib.count(list))
    }

    pub fn all(&self, args: &[FeelValue]) -> FeelValue {
        contain("all", &all_of(args), self.list_lib.all(args))
    }

    pub fn any(&self, args: &[FeelValue]) -> FeelValue {
        contain("any", &all_of(args), self.list_lib.any(args))
    }

    pub fn sublist(&self, list: &FeelValue, start: &FeelValue, length: Option<&FeelValue>) -> FeelValue {
        contain(
            "sublist",
            &with_optional(&[list, start], length),
            self.list_lib.sublist(list, start, length),
        )
    }

    pub fn append(&self, list: &FeelValue, items: &[FeelValue]) -> FeelValue {
        let mut args = vec![list];
        args.extend(items);
        contain("append", &args, self.list_lib.append(list, items))
    }

    pub fn concatenate(&self, lists: &[FeelValue]) -> FeelValue {
        contain("concatenate", &all_of(lists), self.list_lib.concatenate(lists))
    }

    pub fn insert_before(&self, list: &FeelValue, position: &FeelValue, item: &FeelValue) -> FeelValue {
        contain(
            "insert before",
            &[list, position, item],
            self.list_lib.insert_before(list, position, item),
        )
    }

    pub fn remove(&self, list: &FeelValue, position: &FeelValue) -> FeelValue {
        contain("remove", &[list, position], self.list_lib.remove(list, position))
    }

    pub fn reverse(&self, list: &FeelValue) -> FeelValue {
        contain("reverse", &[list], self.list_lib.reverse(list))
    }

    pub fn index_of(&self, list: &FeelValue, item: &FeelValue) -> FeelValue {
        contain("index of", &[list, item], self.list_lib.index_of(list, item))
    }

    pub fn union(&self, lists: &[FeelValue]) -> FeelValue {
        contain("union", &all_of(lists), self.list_lib.union(lists))
    }

    pub fn distinct_values(&self, list: &FeelValue) -> FeelValue {
        contain("distinct values", &[list], self.list_lib.distinct_values(list))
    }

    pub fn flatten(&self, list: &FeelValue) -> FeelValue {
        contain("flatten", &[list], self.list_lib.flatten(list))
    }

    pub fn sort(&self, list: &FeelValue, precedes: Option<&FeelValue>) -> FeelValue {
        contain(
            "sort",
            &with_optional(&[list], precedes),
            self.list_lib.sort(list, precedes),
        )
    }

    // ------------------------------------------------------------------------
    // Date and time functions
    // ------------------------------------------------------------------------

    pub fn year(&self, value: &FeelValue) -> FeelValue {
        contain("year", &[value], self.date_time_lib.year(value))
    }

    pub fn month(&self, value: &FeelValue) -> FeelValue {
        contain("month", &[value], self.date_time_lib.month(value))
    }

    pub fn day(&self, value: &FeelValue) -> FeelValue {
        contain("day", &[value], self.date_time_lib.day(value))
    }

    pub fn weekday(&self, value: &FeelValue) -> FeelValue {
        contain("weekday", &[value], self.date_time_lib.weekday(value))
    }

    pub fn hour(&self, value: &FeelValue) -> FeelValue {
        contain("hour", &[value], self.date_time_lib.hour(value))
    }

    pub fn minute(&self, value: &FeelValue) -> FeelValue {
        contain("minute", &[value], self.date_time_lib.minute(value))
    }

    pub fn second(&self, value: &FeelValue) -> FeelValue {
        contain("second", &[value], self.date_time_lib.second(value))
    }

    pub fn time_offset(&self, value: &FeelValue) -> FeelValue {
        contain("time offset", &[value], self.date_time_lib.time_offset(value))
    }

    pub fn timezone(&self, value: &FeelValue) -> FeelValue {
        contain("timezone", &[value], self.date_time_lib.timezone(value))
    }

    pub fn day_of_year(&self, value: &FeelValue) -> FeelValue {
        contain("day of year", &[value], self.date_time_lib.day_of_year(value))
    }

    pub fn day_of_week(&self, value: &FeelValue) -> FeelValue {
        contain("day of week", &[value], self.date_time_lib.day_of_week(value))
    }

    pub fn month_of_year(&self, value: &FeelValue) -> FeelValue {
        contain("month of year", &[value], self.date_time_lib.month_of_year(value))
    }

    pub fn week_of_year(&self, value: &FeelValue) -> FeelValue {
        contain("week of year", &[value], self.date_time_lib.week_of_year(value))
    }

    pub fn years(&self, value: &FeelValue) -> FeelValue {
        contain("years", &[value], self.date_time_lib.years(value))
    }

    pub fn months(&self, value: &FeelValue) -> FeelValue {
        contain("months", &[value], self.date_time_lib.months(value))
    }

    pub fn days(&self, value: &FeelValue) -> FeelValue {
        contain("days", &[value], self.date_time_lib.days(value))
    }

    pub fn hours(&self, value: &FeelValue) -> FeelValue {
        contain("hours", &[value], self.date_time_lib.hours(value))
    }

    pub fn minutes(&self, value: &FeelValue) -> FeelValue {
        contain("minutes", &[value], self.date_time_lib.minutes(value))
    }

    pub fn seconds(&self, value: &FeelValue) -> FeelValue {
        contain("seconds", &[value], self.date_time_lib.seconds(value))
    }

    // ------------------------------------------------------------------------
    // Range relations
    // ------------------------------------------------------------------------

    pub fn before(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("before", &[left, right], self.range_lib.before(left, right))
    }

    pub fn after(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("after", &[left, right], self.range_lib.after(left, right))
    }

    pub fn meets(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("meets", &[left, right], self.range_lib.meets(left, right))
    }

    pub fn met_by(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("met by", &[left, right], self.range_lib.met_by(left, right))
    }

    pub fn overlaps(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("overlaps", &[left, right], self.range_lib.overlaps(left, right))
    }

    pub fn overlaps_before(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(
            "overlaps before",
            &[left, right],
            self.range_lib.overlaps_before(left, right),
        )
    }

    pub fn overlaps_after(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(
            "overlaps after",
            &[left, right],
            self.range_lib.overlaps_after(left, right),
        )
    }

    pub fn finishes(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("finishes", &[left, right], self.range_lib.finishes(left, right))
    }

    pub fn finished_by(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(
            "finished by",
            &[left, right],
            self.range_lib.finished_by(left, right),
        )
    }

    pub fn includes(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("includes", &[left, right], self.range_lib.includes(left, right))
    }

    pub fn during(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("during", &[left, right], self.range_lib.during(left, right))
    }

    pub fn starts(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("starts", &[left, right], self.range_lib.starts(left, right))
    }

    pub fn started_by(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary(
            "started by",
            &[left, right],
            self.range_lib.started_by(left, right),
        )
    }

    pub fn coincides(&self, left: &FeelValue, right: &FeelValue) -> FeelValue {
        contain_ternary("coincides", &[left, right], self.range_lib.coincides(left, right))
    }
}
