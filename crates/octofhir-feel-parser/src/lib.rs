//! FEEL literal parser using Winnow
//!
//! This crate parses the literal formats FEEL conversion functions accept:
//!
//! - Numbers, optionally with grouping and decimal separators
//! - Dates `YYYY-MM-DD` (years up to nine digits, optionally negative)
//! - Times `[T]HH:MM:SS[.fraction][Z|±HH[:]MM|@Zone/Id]`
//! - Date and times `YYYY-MM-DDTHH:MM:SS[...]`
//! - ISO 8601 durations `[-]P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]`
//!
//! Every entry point consumes the whole input and returns validated values
//! from `octofhir-feel-types`.

mod combinators;
mod duration;
mod error;
mod number;
mod temporal;

pub use duration::parse_duration;
pub use error::{LiteralError, LiteralResult};
pub use number::{parse_localized_number, parse_number};
pub use temporal::{parse_date, parse_date_time, parse_time};
