//! List and Context Function Tests
//!
//! Tests for: element access, list contains, sublist, append, concatenate,
//! insert before, remove, reverse, index of, union, distinct values,
//! flatten, sort, get value, get entries, context

use crate::{boolean, int, ints, lib, null, text};
use octofhir_feel_types::{FeelContext, FeelValue};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn entry(key: &str, value: FeelValue) -> FeelValue {
    FeelValue::Context(FeelContext::new().with("key", text(key)).with("value", value))
}

// ============================================================================
// Element Access
// ============================================================================

#[rstest]
#[case(1, int(10))]
#[case(3, int(30))]
#[case(-1, int(30))]
#[case(-3, int(10))]
#[case(0, null())]
#[case(4, null())]
#[case(-4, null())]
fn test_element_at(#[case] index: i32, #[case] expected: FeelValue) {
    assert_eq!(lib().element_at(&ints(&[10, 20, 30]), &int(index)), expected);
}

#[test]
fn test_list_contains() {
    let lib = lib();
    let list = FeelValue::list([int(1), null(), int(3)]);
    assert_eq!(lib.list_contains(&list, &int(3)), boolean(true));
    assert_eq!(lib.list_contains(&list, &null()), boolean(true));
    assert_eq!(lib.list_contains(&ints(&[1, 2]), &text("1")), boolean(false));
    assert_eq!(lib.count(&ints(&[1, 2, 3])), int(3));
    assert_eq!(lib.count(&null()), null());
}

// ============================================================================
// Building Lists
// ============================================================================

#[test]
fn test_sublist() {
    let lib = lib();
    assert_eq!(lib.sublist(&ints(&[4, 5, 6]), &int(1), Some(&int(2))), ints(&[4, 5]));
    assert_eq!(lib.sublist(&ints(&[4, 5, 6]), &int(-2), None), ints(&[5, 6]));
    assert_eq!(lib.sublist(&ints(&[4, 5, 6]), &int(2), Some(&int(3))), null());
}

#[test]
fn test_building_lists() {
    let lib = lib();
    assert_eq!(lib.append(&ints(&[1]), &[int(2), int(3)]), ints(&[1, 2, 3]));
    assert_eq!(
        lib.concatenate(&[ints(&[1, 2]), ints(&[3])]),
        ints(&[1, 2, 3])
    );
    assert_eq!(lib.concatenate(&[ints(&[1]), null()]), null());
    assert_eq!(
        lib.insert_before(&ints(&[1, 3]), &int(2), &int(2)),
        ints(&[1, 2, 3])
    );
    assert_eq!(lib.remove(&ints(&[1, 2, 3]), &int(-1)), ints(&[1, 2]));
    assert_eq!(lib.remove(&ints(&[1, 2, 3]), &int(0)), null());
    assert_eq!(lib.reverse(&ints(&[1, 2, 3])), ints(&[3, 2, 1]));
}

// ============================================================================
// Set Operations
// ============================================================================

#[test]
fn test_set_operations() {
    let lib = lib();
    assert_eq!(lib.index_of(&ints(&[1, 2, 3, 2]), &int(2)), ints(&[2, 4]));
    assert_eq!(lib.index_of(&ints(&[1, 2]), &int(5)), ints(&[]));
    assert_eq!(
        lib.union(&[ints(&[1, 2]), ints(&[2, 3])]),
        ints(&[1, 2, 3])
    );
    assert_eq!(lib.distinct_values(&ints(&[1, 2, 3, 2, 1])), ints(&[1, 2, 3]));
    let nested = FeelValue::list([
        FeelValue::list([ints(&[1, 2]), ints(&[3])]),
        int(4),
    ]);
    assert_eq!(lib.flatten(&nested), ints(&[1, 2, 3, 4]));
}

#[test]
fn test_sort() {
    let lib = lib();
    assert_eq!(lib.sort(&ints(&[3, 1, 4, -1]), None), ints(&[-1, 1, 3, 4]));
    assert_eq!(
        lib.sort(&FeelValue::list([text("b"), text("a")]), None),
        FeelValue::list([text("a"), text("b")])
    );
    assert_eq!(lib.sort(&FeelValue::list([int(1), text("a")]), None), null());
}

// ============================================================================
// Contexts
// ============================================================================

#[test]
fn test_get_value() {
    let lib = lib();
    let ctx = FeelValue::Context(FeelContext::new().with("a", int(1)).with("b", int(2)));
    assert_eq!(lib.get_value(&ctx, &text("b")), int(2));
    assert_eq!(lib.get_value(&ctx, &text("z")), null());
    assert_eq!(lib.get_value(&ctx, &null()), null());
    assert_eq!(lib.get_value(&ints(&[1]), &text("a")), null());
}

#[test]
fn test_entries_round_trip_through_context() {
    let lib = lib();
    let ctx = FeelValue::Context(FeelContext::new().with("a", int(1)).with("b", text("x")));
    let entries = lib.get_entries(&ctx);
    assert_eq!(
        entries,
        FeelValue::list([entry("a", int(1)), entry("b", text("x"))])
    );
    assert_eq!(lib.context(&entries), ctx);
}

#[test]
fn test_context_rejects_bad_entries() {
    let lib = lib();
    let duplicate = FeelValue::list([entry("a", int(1)), entry("a", int(2))]);
    assert_eq!(lib.context(&duplicate), null());
    let keyless = FeelValue::list([FeelValue::Context(FeelContext::new().with("value", int(1)))]);
    assert_eq!(lib.context(&keyless), null());
}
