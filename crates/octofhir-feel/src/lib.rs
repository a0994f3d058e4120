//! FEEL (DMN 1.3) runtime values and operators for Rust
//!
//! This crate bundles the FEEL runtime core:
//! - The value domain with three-valued logic and 34-digit decimals
//! - Literal parsing for numbers, dates, times and durations
//! - Comparators and per-type operator models
//! - The built-in function library behind one fault-containing facade
//!
//! # Example
//!
//! ```
//! use octofhir_feel::{FeelLib, FeelValue};
//!
//! let lib = FeelLib::new();
//! let due = lib.date(&FeelValue::from("2020-01-31"));
//! let month = lib.duration(&FeelValue::from("P1M"));
//! assert_eq!(lib.string(&lib.add(&due, &month)), FeelValue::from("2020-02-29"));
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_feel_eval as eval;
pub use octofhir_feel_parser as parser;
pub use octofhir_feel_types as types;

// Convenience re-exports
pub use octofhir_feel_eval::{EvalError, EvalResult, FeelLib, FeelLibBuilder, FeelLibConfig, Ternary};
pub use octofhir_feel_types::{FeelType, FeelValue, MathContext, RoundingPolicy};
