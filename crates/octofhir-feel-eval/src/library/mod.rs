//! FEEL built-in functions
//!
//! Function libraries grouped the way DMN 1.3 groups them:
//! - Conversion (number, string)
//! - Numeric (rounding, modulo, aggregates)
//! - String (length, substring, regex based functions)
//! - Date and time (constructors, component extraction)
//! - List (membership, set operations, sorting)
//! - Range (Allen's interval relations)

pub mod conversion;
pub mod date_time;
pub mod list;
pub mod numeric;
pub mod range;
pub mod string;

pub use conversion::ConversionLib;
pub use date_time::DateTimeLib;
pub use list::ListLib;
pub use numeric::NumericLib;
pub use range::RangeLib;
pub use string::StringLib;

use octofhir_feel_types::FeelValue;

/// Operands of a variadic function
///
/// A single list argument stands for its items; otherwise the arguments
/// themselves are the operands.
pub(crate) fn variadic(args: &[FeelValue]) -> &[FeelValue] {
    match args {
        [FeelValue::List(items)] => items,
        _ => args,
    }
}
