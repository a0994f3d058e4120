//! Range functions
//!
//! Implements: before, after, meets, met by, overlaps, overlaps before,
//! overlaps after, finishes, finished by, includes, during, starts,
//! started by, coincides.
//!
//! Each relation accepts the point/range combinations DMN 1.3 defines for
//! it; any other combination is an invalid operand. An unbounded end acts
//! as an infinity, and incomparable endpoints make the result unknown.

use crate::comparator::RelationalComparator;
use crate::error::{EvalError, EvalResult};
use crate::logic::{ternary_all, ternary_any, Ternary};
use crate::operators::comparison::ValueComparator;
use octofhir_feel_types::{FeelRange, FeelValue};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
enum Bound<'a> {
    NegInf,
    At(&'a FeelValue),
    PosInf,
}

#[derive(Debug, Clone, Copy)]
struct Interval<'a> {
    start: Bound<'a>,
    start_included: bool,
    end: Bound<'a>,
    end_included: bool,
}

impl<'a> Interval<'a> {
    fn of(range: &'a FeelRange) -> Self {
        Self {
            start: range.start().map_or(Bound::NegInf, Bound::At),
            start_included: range.start_included(),
            end: range.end().map_or(Bound::PosInf, Bound::At),
            end_included: range.end_included(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    Point(Bound<'a>),
    Range(Interval<'a>),
}

fn operand(value: &FeelValue) -> Operand<'_> {
    match value {
        FeelValue::Range(range) => Operand::Range(Interval::of(range)),
        point => Operand::Point(Bound::At(point)),
    }
}

fn unsupported(relation: &str, left: &FeelValue, right: &FeelValue) -> EvalError {
    EvalError::invalid_operand(
        relation,
        format!(
            "not defined for {} and {}",
            left.get_type(),
            right.get_type()
        ),
    )
}

/// Comparisons between bounds
struct Bounds<'c> {
    comparator: &'c ValueComparator,
}

impl Bounds<'_> {
    fn order(&self, a: Bound<'_>, b: Bound<'_>) -> EvalResult<Option<Ordering>> {
        Ok(match (a, b) {
            (Bound::NegInf, Bound::NegInf) | (Bound::PosInf, Bound::PosInf) => {
                Some(Ordering::Equal)
            }
            (Bound::NegInf, _) | (_, Bound::PosInf) => Some(Ordering::Less),
            (Bound::PosInf, _) | (_, Bound::NegInf) => Some(Ordering::Greater),
            (Bound::At(x), Bound::At(y)) => self.comparator.compare(x, y)?,
        })
    }

    fn lt(&self, a: Bound<'_>, b: Bound<'_>) -> EvalResult<Ternary> {
        Ok(self.order(a, b)?.map(Ordering::is_lt))
    }

    fn gt(&self, a: Bound<'_>, b: Bound<'_>) -> EvalResult<Ternary> {
        Ok(self.order(a, b)?.map(Ordering::is_gt))
    }

    fn eq(&self, a: Bound<'_>, b: Bound<'_>) -> EvalResult<Ternary> {
        Ok(self.order(a, b)?.map(Ordering::is_eq))
    }
}

/// `range` includes `point`
pub(crate) fn includes_point(
    comparator: &ValueComparator,
    range: &FeelRange,
    point: &FeelValue,
) -> EvalResult<Ternary> {
    let b = Bounds { comparator };
    let r = Interval::of(range);
    let p = Bound::At(point);
    Ok(ternary_any([
        ternary_all([b.lt(r.start, p)?, b.gt(r.end, p)?]),
        ternary_all([b.eq(r.start, p)?, Some(r.start_included)]),
        ternary_all([b.eq(r.end, p)?, Some(r.end_included)]),
    ]))
}

/// Allen's interval relations over points and ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeLib {
    comparator: ValueComparator,
}

impl RangeLib {
    pub fn new() -> Self {
        Self::default()
    }

    fn bounds(&self) -> Bounds<'_> {
        Bounds {
            comparator: &self.comparator,
        }
    }

    pub fn before(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Point(p1), Operand::Point(p2)) => b.lt(p1, p2),
            (Operand::Point(p), Operand::Range(r)) => Ok(ternary_any([
                b.lt(p, r.start)?,
                ternary_all([b.eq(p, r.start)?, Some(!r.start_included)]),
            ])),
            (Operand::Range(r), Operand::Point(p)) => Ok(ternary_any([
                b.lt(r.end, p)?,
                ternary_all([b.eq(r.end, p)?, Some(!r.end_included)]),
            ])),
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_any([
                b.lt(r1.end, r2.start)?,
                ternary_all([
                    Some(!r1.end_included || !r2.start_included),
                    b.eq(r1.end, r2.start)?,
                ]),
            ])),
        }
    }

    pub fn after(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Point(p1), Operand::Point(p2)) => b.gt(p1, p2),
            (Operand::Point(p), Operand::Range(r)) => Ok(ternary_any([
                b.gt(p, r.end)?,
                ternary_all([b.eq(p, r.end)?, Some(!r.end_included)]),
            ])),
            (Operand::Range(r), Operand::Point(p)) => Ok(ternary_any([
                b.gt(r.start, p)?,
                ternary_all([b.eq(r.start, p)?, Some(!r.start_included)]),
            ])),
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_any([
                b.gt(r1.start, r2.end)?,
                ternary_all([
                    Some(!r1.start_included || !r2.end_included),
                    b.eq(r1.start, r2.end)?,
                ]),
            ])),
        }
    }

    pub fn meets(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                Some(r1.end_included),
                Some(r2.start_included),
                b.eq(r1.end, r2.start)?,
            ])),
            _ => Err(unsupported("meets", left, right)),
        }
    }

    pub fn met_by(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                Some(r1.start_included),
                Some(r2.end_included),
                b.eq(r1.start, r2.end)?,
            ])),
            _ => Err(unsupported("met by", left, right)),
        }
    }

    pub fn overlaps(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                ternary_any([
                    b.gt(r1.end, r2.start)?,
                    ternary_all([
                        b.eq(r1.end, r2.start)?,
                        Some(r1.end_included && r2.start_included),
                    ]),
                ]),
                ternary_any([
                    b.lt(r1.start, r2.end)?,
                    ternary_all([
                        b.eq(r1.start, r2.end)?,
                        Some(r1.start_included && r2.end_included),
                    ]),
                ]),
            ])),
            _ => Err(unsupported("overlaps", left, right)),
        }
    }

    pub fn overlaps_before(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        match (operand(left), operand(right)) {
            (Operand::Range(r1), Operand::Range(r2)) => self.overlap_from_left(r1, r2),
            _ => Err(unsupported("overlaps before", left, right)),
        }
    }

    pub fn overlaps_after(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        match (operand(left), operand(right)) {
            (Operand::Range(r1), Operand::Range(r2)) => self.overlap_from_left(r2, r1),
            _ => Err(unsupported("overlaps after", left, right)),
        }
    }

    /// `r1` starts first and ends inside `r2`
    fn overlap_from_left(&self, r1: Interval<'_>, r2: Interval<'_>) -> EvalResult<Ternary> {
        let b = self.bounds();
        Ok(ternary_all([
            ternary_any([
                b.lt(r1.start, r2.start)?,
                ternary_all([
                    b.eq(r1.start, r2.start)?,
                    Some(r1.start_included && !r2.start_included),
                ]),
            ]),
            ternary_any([
                b.gt(r1.end, r2.start)?,
                ternary_all([
                    b.eq(r1.end, r2.start)?,
                    Some(r1.end_included && r2.start_included),
                ]),
            ]),
            ternary_any([
                b.lt(r1.end, r2.end)?,
                ternary_all([
                    b.eq(r1.end, r2.end)?,
                    Some(!r1.end_included || r2.end_included),
                ]),
            ]),
        ]))
    }

    pub fn finishes(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Point(p), Operand::Range(r)) => {
                Ok(ternary_all([Some(r.end_included), b.eq(r.end, p)?]))
            }
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                Some(r1.end_included == r2.end_included),
                b.eq(r1.end, r2.end)?,
                ternary_any([
                    b.gt(r1.start, r2.start)?,
                    ternary_all([
                        b.eq(r1.start, r2.start)?,
                        Some(!r1.start_included || r2.start_included),
                    ]),
                ]),
            ])),
            _ => Err(unsupported("finishes", left, right)),
        }
    }

    pub fn finished_by(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Range(r), Operand::Point(p)) => {
                Ok(ternary_all([Some(r.end_included), b.eq(r.end, p)?]))
            }
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                Some(r1.end_included == r2.end_included),
                b.eq(r1.end, r2.end)?,
                ternary_any([
                    b.lt(r1.start, r2.start)?,
                    ternary_all([
                        b.eq(r1.start, r2.start)?,
                        Some(r1.start_included || !r2.start_included),
                    ]),
                ]),
            ])),
            _ => Err(unsupported("finished by", left, right)),
        }
    }

    pub fn includes(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        match (left, operand(right)) {
            (FeelValue::Range(range), Operand::Point(_)) => {
                includes_point(&self.comparator, range, right)
            }
            (FeelValue::Range(range), Operand::Range(r2)) => {
                self.contains_range(Interval::of(range), r2)
            }
            _ => Err(unsupported("includes", left, right)),
        }
    }

    pub fn during(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        match (operand(left), right) {
            (Operand::Point(_), FeelValue::Range(range)) => {
                includes_point(&self.comparator, range, left)
            }
            (Operand::Range(r1), FeelValue::Range(range)) => {
                self.contains_range(Interval::of(range), r1)
            }
            _ => Err(unsupported("during", left, right)),
        }
    }

    /// `outer` covers every point of `inner`
    fn contains_range(&self, outer: Interval<'_>, inner: Interval<'_>) -> EvalResult<Ternary> {
        let b = self.bounds();
        Ok(ternary_all([
            ternary_any([
                b.lt(outer.start, inner.start)?,
                ternary_all([
                    b.eq(outer.start, inner.start)?,
                    Some(outer.start_included || !inner.start_included),
                ]),
            ]),
            ternary_any([
                b.gt(outer.end, inner.end)?,
                ternary_all([
                    b.eq(outer.end, inner.end)?,
                    Some(outer.end_included || !inner.end_included),
                ]),
            ]),
        ]))
    }

    pub fn starts(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Point(p), Operand::Range(r)) => {
                Ok(ternary_all([b.eq(r.start, p)?, Some(r.start_included)]))
            }
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                b.eq(r1.start, r2.start)?,
                Some(r1.start_included == r2.start_included),
                ternary_any([
                    b.lt(r1.end, r2.end)?,
                    ternary_all([
                        b.eq(r1.end, r2.end)?,
                        Some(!r1.end_included || r2.end_included),
                    ]),
                ]),
            ])),
            _ => Err(unsupported("starts", left, right)),
        }
    }

    pub fn started_by(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Range(r), Operand::Point(p)) => {
                Ok(ternary_all([b.eq(r.start, p)?, Some(r.start_included)]))
            }
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                b.eq(r1.start, r2.start)?,
                Some(r1.start_included == r2.start_included),
                ternary_any([
                    b.lt(r2.end, r1.end)?,
                    ternary_all([
                        b.eq(r2.end, r1.end)?,
                        Some(!r2.end_included || r1.end_included),
                    ]),
                ]),
            ])),
            _ => Err(unsupported("started by", left, right)),
        }
    }

    pub fn coincides(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        if left.is_null() || right.is_null() {
            return Ok(None);
        }
        let b = self.bounds();
        match (operand(left), operand(right)) {
            (Operand::Point(p1), Operand::Point(p2)) => b.eq(p1, p2),
            (Operand::Range(r1), Operand::Range(r2)) => Ok(ternary_all([
                b.eq(r1.start, r2.start)?,
                Some(r1.start_included == r2.start_included),
                b.eq(r1.end, r2.end)?,
                Some(r1.end_included == r2.end_included),
            ])),
            _ => Err(unsupported("coincides", left, right)),
        }
    }
}
