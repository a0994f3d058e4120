//! FEEL value domain
//!
//! This crate defines the runtime values of FEEL (DMN 1.3) including:
//! - System types (boolean, number, string, date, time, date and time, durations, ...)
//! - The decimal128 math context and rounding policies
//! - Calendar values qualified by an offset or a zone id
//! - Lists, contexts, ranges and function descriptors
//! - Conversion to and from JSON

pub mod context;
pub mod duration;
pub mod error;
pub mod function;
mod json;
pub mod number;
pub mod range;
pub mod system_types;
pub mod temporal;
pub mod value;

pub use context::FeelContext;
pub use duration::{DurationKind, FeelDuration};
pub use error::{ValueError, ValueResult};
pub use function::FeelFunction;
pub use number::{MathContext, RoundingPolicy, DECIMAL128_PRECISION};
pub use range::{FeelRange, RangeOperator};
pub use system_types::FeelType;
pub use temporal::{FeelDate, FeelDateTime, FeelTime, ZoneQualifier};
pub use value::FeelValue;

pub use bigdecimal::BigDecimal;
