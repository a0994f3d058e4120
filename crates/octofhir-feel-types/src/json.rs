//! JSON boundary for decision inputs and outputs

use crate::context::FeelContext;
use crate::number::to_plain_string;
use crate::value::FeelValue;
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

impl FeelValue {
    /// Convert a JSON document into a FEEL value
    ///
    /// Numbers keep their full textual precision. Strings stay strings;
    /// temporal values are created by the conversion functions.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => BigDecimal::from_str(&n.to_string()).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Context(FeelContext::from_entries(
                map.iter().map(|(k, v)| (k.as_str(), Self::from_json(v))),
            )),
        }
    }

    /// Convert a FEEL value into JSON
    ///
    /// Integral numbers that fit `i64` stay exact; other numbers go through
    /// `f64`. Temporal values, ranges and functions render as strings.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(n) => number_to_json(n),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Context(ctx) => {
                let map: Map<String, Value> = ctx.iter().map(|(k, v)| (k.clone(), v.to_json())).collect();
                Value::Object(map)
            }
            Self::Date(_)
            | Self::Time(_)
            | Self::DateTime(_)
            | Self::Duration(_)
            | Self::Range(_)
            | Self::Function(_) => Value::String(self.to_string()),
        }
    }
}

fn number_to_json(n: &BigDecimal) -> Value {
    if n.is_integer() {
        if let Some(i) = n.to_i64() {
            return Value::Number(Number::from(i));
        }
    }
    n.to_f64()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(to_plain_string(n)), Value::Number)
}
