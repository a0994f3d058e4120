//! Equality and relational comparators
//!
//! Every comparison first dispatches on which operands are null:
//!
//! | left | right | equal_to | less_than |
//! |------|-------|----------|-----------|
//! | null | null  | true     | null      |
//! | null | value | false    | null      |
//! | value| null  | false    | null      |
//! | value| value | type specific          |
//!
//! Type-specific comparators only supply the last row.

use crate::error::EvalResult;
use crate::logic::{ternary_not, ternary_or, Ternary};
use octofhir_feel_types::FeelValue;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// `=` and `!=` over FEEL values
pub trait EqualityComparator {
    /// Equality of two non-null operands
    fn value_equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary>;

    fn equal_to(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        match (left.is_null(), right.is_null()) {
            (true, true) => Ok(Some(true)),
            (true, false) | (false, true) => Ok(Some(false)),
            (false, false) => self.value_equal(left, right),
        }
    }

    fn not_equal_to(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        Ok(ternary_not(self.equal_to(left, right)?))
    }
}

/// Ordering operators derived from [`RelationalComparator::compare`]
pub trait RelationalComparator: EqualityComparator {
    /// Order two non-null operands; `None` when they are not comparable
    fn compare(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Option<Ordering>>;

    fn less_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        Ok(self.compare(left, right)?.map(Ordering::is_lt))
    }

    fn greater_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.less_than(right, left)
    }

    fn less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        Ok(ternary_or(
            self.less_than(left, right)?,
            self.equal_to(left, right)?,
        ))
    }

    fn greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        Ok(ternary_or(
            self.greater_than(left, right)?,
            self.equal_to(left, right)?,
        ))
    }
}

/// Order of one FEEL type
///
/// Implementations pick their operand out of a [`FeelValue`] and supply a
/// total order for it.
pub trait ComparablePrimitive {
    /// Payload type
    type Value: ?Sized;

    /// Extract the payload; `None` for any other type
    fn extract(value: &FeelValue) -> Option<&Self::Value>;

    /// Order two payloads; `None` when they are not comparable
    fn compare_values(left: &Self::Value, right: &Self::Value) -> Option<Ordering>;

    /// Equality of two payloads
    fn equal_values(left: &Self::Value, right: &Self::Value) -> bool {
        Self::compare_values(left, right) == Some(Ordering::Equal)
    }
}

/// Comparator that type-checks operands before comparing payloads
///
/// Operands of different runtime types are unequal and unordered; they never
/// raise an error.
pub struct ComparableComparator<P> {
    primitive: PhantomData<fn() -> P>,
}

impl<P> ComparableComparator<P> {
    pub const fn new() -> Self {
        Self {
            primitive: PhantomData,
        }
    }
}

impl<P> Default for ComparableComparator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ComparableComparator<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P> Copy for ComparableComparator<P> {}

impl<P> fmt::Debug for ComparableComparator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<Self>())
    }
}

impl<P: ComparablePrimitive> EqualityComparator for ComparableComparator<P> {
    fn value_equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        match (P::extract(left), P::extract(right)) {
            (Some(a), Some(b)) => Ok(Some(P::equal_values(a, b))),
            _ => Ok(Some(false)),
        }
    }
}

impl<P: ComparablePrimitive> RelationalComparator for ComparableComparator<P> {
    fn compare(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Option<Ordering>> {
        match (P::extract(left), P::extract(right)) {
            (Some(a), Some(b)) => Ok(P::compare_values(a, b)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct IntOrder;

    impl ComparablePrimitive for IntOrder {
        type Value = bigdecimal::BigDecimal;

        fn extract(value: &FeelValue) -> Option<&Self::Value> {
            value.as_number()
        }

        fn compare_values(left: &Self::Value, right: &Self::Value) -> Option<Ordering> {
            Some(left.cmp(right))
        }
    }

    const CMP: ComparableComparator<IntOrder> = ComparableComparator::new();

    fn n(v: i32) -> FeelValue {
        FeelValue::from(v)
    }

    #[rstest]
    #[case(FeelValue::Null, FeelValue::Null, Some(true), None)]
    #[case(FeelValue::Null, n(1), Some(false), None)]
    #[case(n(1), FeelValue::Null, Some(false), None)]
    #[case(n(1), n(2), Some(false), Some(true))]
    #[case(n(2), n(2), Some(true), Some(false))]
    fn test_null_dispatch(
        #[case] left: FeelValue,
        #[case] right: FeelValue,
        #[case] equal: Ternary,
        #[case] less: Ternary,
    ) {
        assert_eq!(CMP.equal_to(&left, &right).unwrap(), equal);
        assert_eq!(CMP.less_than(&left, &right).unwrap(), less);
    }

    #[test]
    fn test_derived_operators() {
        assert_eq!(CMP.greater_than(&n(3), &n(2)).unwrap(), Some(true));
        assert_eq!(CMP.less_equal_than(&n(2), &n(2)).unwrap(), Some(true));
        assert_eq!(CMP.greater_equal_than(&n(1), &n(2)).unwrap(), Some(false));
        assert_eq!(CMP.not_equal_to(&n(1), &n(2)).unwrap(), Some(true));
        assert_eq!(CMP.less_equal_than(&n(1), &FeelValue::Null).unwrap(), None);
        // null = null makes null <= null true
        assert_eq!(
            CMP.less_equal_than(&FeelValue::Null, &FeelValue::Null).unwrap(),
            Some(true)
        );
    }

    #[test]
    fn test_mismatched_types() {
        let text = FeelValue::string("1");
        assert_eq!(CMP.equal_to(&n(1), &text).unwrap(), Some(false));
        assert_eq!(CMP.less_than(&n(1), &text).unwrap(), None);
        assert_eq!(CMP.not_equal_to(&n(1), &text).unwrap(), Some(true));
    }
}
