//! FEEL Operator Implementations
//!
//! This module contains one value model per FEEL type, each exposing the
//! type predicate, `is`, `=`, `!=` and its own operators:
//! - Comparison (per-type orders and the generic comparator)
//! - Boolean (not, and, or)
//! - Numeric (+, -, *, /, **)
//! - String (concatenation)
//! - Date, Time, Date and Time (temporal arithmetic)
//! - Duration (duration arithmetic)
//! - List, Context, Range, Function

pub mod boolean;
pub mod comparison;
pub mod context;
pub mod date;
pub mod date_time;
pub mod duration;
pub mod function;
pub mod list;
pub mod model;
pub mod numeric;
pub mod range;
pub mod string;
pub mod time;

pub use boolean::{BooleanType, DefaultBooleanType};
pub use comparison::{
    value_is, BooleanComparator, DateComparator, DateOrder, DateTimeComparator, DateTimeOrder,
    DurationComparator, DurationOrder, NumericComparator, NumericOrder, StringComparator,
    StringOrder, TimeComparator, TimeOrder, ValueComparator,
};
pub use context::{ContextType, DefaultContextType};
pub use date::{DateType, DefaultDateType};
pub use date_time::{DateTimeType, DefaultDateTimeType};
pub use duration::{DefaultDurationType, DurationType};
pub use function::DefaultFunctionType;
pub use list::{DefaultListType, ListType};
pub use model::{OrderedValueModel, ValueModel};
pub use numeric::{DefaultNumericType, NumericType};
pub use range::{DefaultRangeType, RangeType};
pub use string::{DefaultStringType, StringType};
pub use time::{DefaultTimeType, TimeType};
