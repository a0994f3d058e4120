//! Decimal arithmetic context for FEEL numbers
//!
//! FEEL numbers follow IEEE 754-2008 decimal128: 34 significant digits.
//! Values are stored as [`BigDecimal`] and rounded back into the context
//! after every arithmetic step.

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::str::FromStr;

/// Significant digits of a decimal128 value
pub const DECIMAL128_PRECISION: u64 = 34;

/// Rounding policies understood by `round()` and the math context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Away from zero
    Up,
    /// Toward zero
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    #[default]
    HalfEven,
}

impl RoundingPolicy {
    /// Map to the `bigdecimal` rounding mode
    pub const fn rounding_mode(self) -> RoundingMode {
        match self {
            Self::Up => RoundingMode::Up,
            Self::Down => RoundingMode::Down,
            Self::Ceiling => RoundingMode::Ceiling,
            Self::Floor => RoundingMode::Floor,
            Self::HalfUp => RoundingMode::HalfUp,
            Self::HalfDown => RoundingMode::HalfDown,
            Self::HalfEven => RoundingMode::HalfEven,
        }
    }

    /// Resolve a mode name such as `"half_up"`, `"half up"` or `"HALF-UP"`
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "ceiling" => Some(Self::Ceiling),
            "floor" => Some(Self::Floor),
            "halfup" => Some(Self::HalfUp),
            "halfdown" => Some(Self::HalfDown),
            "halfeven" => Some(Self::HalfEven),
            _ => None,
        }
    }
}

const DECIMAL128_DIGITS: NonZeroU64 = match NonZeroU64::new(DECIMAL128_PRECISION) {
    Some(precision) => precision,
    None => NonZeroU64::MIN,
};

/// Precision and rounding applied to arithmetic results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: NonZeroU64,
    rounding: RoundingPolicy,
}

impl MathContext {
    /// decimal128 context rounding half-even, used for literals
    pub const DECIMAL128: Self = Self {
        precision: DECIMAL128_DIGITS,
        rounding: RoundingPolicy::HalfEven,
    };

    /// decimal128 context rounding half-up, used for arithmetic
    pub const ARITHMETIC: Self = Self {
        precision: DECIMAL128_DIGITS,
        rounding: RoundingPolicy::HalfUp,
    };

    /// Create a context; a precision of zero is raised to one digit
    pub fn new(precision: u64, rounding: RoundingPolicy) -> Self {
        Self {
            precision: NonZeroU64::new(precision).unwrap_or(NonZeroU64::MIN),
            rounding,
        }
    }

    /// Same precision, different rounding
    pub fn with_rounding(self, rounding: RoundingPolicy) -> Self {
        Self { rounding, ..self }
    }

    /// Significant digits kept by this context
    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    /// Rounding policy of this context
    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Round `value` to the context precision
    ///
    /// Values that already fit are returned unchanged, keeping their scale.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        if value.digits() > self.precision.get() {
            value.with_precision_round(self.precision, self.rounding.rounding_mode())
        } else {
            value
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}

/// Convert an integral decimal to `i64`
pub fn to_i64(value: &BigDecimal) -> Option<i64> {
    if value.is_integer() { value.to_i64() } else { None }
}

/// Convert an integral decimal to `i32`
pub fn to_i32(value: &BigDecimal) -> Option<i32> {
    to_i64(value).and_then(|v| i32::try_from(v).ok())
}

/// Convert a finite `f64` using its shortest round-trip representation
pub fn from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string())
        .ok()
        .or_else(|| BigDecimal::from_f64(value))
}

/// Canonical text of a number: no exponent, no trailing zeros
pub fn to_plain_string(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
