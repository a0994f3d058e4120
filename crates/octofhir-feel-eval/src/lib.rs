//! FEEL Operator Semantics
//!
//! This crate implements the runtime semantics of FEEL (DMN 1.3) over the
//! values of `octofhir-feel-types`:
//!
//! - **Ternary Logic**: `and`, `or`, `not` over true, false and null
//! - **Comparators**: null dispatch shared by every `=` and `<`
//! - **Value Models**: type predicate, `is`, `=`, ordering and arithmetic per FEEL type
//! - **Function Library**: conversion, numeric, string, list, date and time, range functions
//! - **Facade**: [`FeelLib`], one flat namespace that contains faults
//!
//! # Example
//!
//! ```
//! use octofhir_feel_eval::FeelLib;
//! use octofhir_feel_types::FeelValue;
//!
//! let lib = FeelLib::new();
//! let t = lib.time(&FeelValue::from("00:00:00Z"));
//! let u = lib.time(&FeelValue::from("00:00:00+00:00"));
//! assert_eq!(lib.equal(&t, &u), FeelValue::Boolean(true));
//! ```
//!
//! # Errors
//!
//! Below the facade every operation returns [`EvalResult`]. A null operand or
//! an undefined result such as division by zero is `Ok(FeelValue::Null)`; a
//! type mismatch or other fault is an [`EvalError`]. [`FeelLib`] logs faults
//! and turns them into null.
//!
//! # Three-Valued Logic
//!
//! - `and`: false dominates (null and false = false)
//! - `or`: true dominates (null or true = true)
//! - `=` treats two nulls as equal; `<` over a null is null

pub mod comparator;
pub mod error;
pub mod feel_lib;
pub mod library;
pub mod logic;
pub mod operators;
pub mod pattern;

pub use comparator::{
    ComparableComparator, ComparablePrimitive, EqualityComparator, RelationalComparator,
};
pub use error::{EvalError, EvalResult};
pub use feel_lib::{FeelLib, FeelLibBuilder, FeelLibConfig};
pub use library::{ConversionLib, DateTimeLib, ListLib, NumericLib, RangeLib, StringLib};
pub use logic::{ternary_and, ternary_not, ternary_or, Ternary};
pub use pattern::{RegexBackend, StandardRegex};

pub use operators::comparison::{value_is, ValueComparator};
