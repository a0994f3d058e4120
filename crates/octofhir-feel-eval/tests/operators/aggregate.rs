//! Aggregate Function Tests
//!
//! Tests for: min, max, sum, mean, product, median, stddev, mode, all, any

use crate::{boolean, date, int, ints, lib, null, num, text};
use octofhir_feel_types::FeelValue;
use pretty_assertions::assert_eq;

#[test]
fn test_list_and_variadic_forms_agree() {
    let lib = lib();
    let items = [int(1), int(2), int(3)];
    let list = [ints(&[1, 2, 3])];
    assert_eq!(lib.sum(&items), int(6));
    assert_eq!(lib.sum(&list), int(6));
    assert_eq!(lib.mean(&items), int(2));
    assert_eq!(lib.mean(&list), int(2));
    assert_eq!(lib.min(&items), lib.min(&list));
    assert_eq!(lib.max(&items), int(3));
}

#[test]
fn test_min_max_over_ordered_types() {
    let lib = lib();
    assert_eq!(lib.max(&[text("a"), text("c"), text("b")]), text("c"));
    assert_eq!(
        lib.min(&[date("2020-02-01"), date("2019-12-31")]),
        date("2019-12-31")
    );
    // incomparable operands are a contained fault
    assert_eq!(lib.max(&[int(1), text("a")]), null());
}

#[test]
fn test_null_and_empty_input() {
    let lib = lib();
    assert_eq!(lib.sum(&[ints(&[])]), null());
    assert_eq!(lib.mean(&[]), null());
    assert_eq!(lib.min(&[ints(&[])]), null());
    assert_eq!(lib.sum(&[int(1), null()]), null());
    assert_eq!(lib.max(&[FeelValue::list([int(1), null()])]), null());
    assert_eq!(lib.mode(&[ints(&[])]), null());
}

#[test]
fn test_product_and_median() {
    let lib = lib();
    assert_eq!(lib.product(&[int(2), int(3), int(4)]), int(24));
    assert_eq!(lib.median(&[ints(&[8, 2, 5, 3, 4])]), int(4));
    assert_eq!(lib.median(&[ints(&[6, 1, 2, 3])]), num("2.5"));
}

#[test]
fn test_stddev() {
    let lib = lib();
    assert_eq!(lib.stddev(&[int(1), int(3), int(5)]), int(2));
    assert_eq!(lib.stddev(&[ints(&[7])]), null());
    assert_eq!(lib.stddev(&[text("a"), int(1)]), null());
}

#[test]
fn test_mode() {
    let lib = lib();
    assert_eq!(lib.mode(&[int(6), int(3), int(9), int(6), int(6)]), ints(&[6]));
    assert_eq!(lib.mode(&[ints(&[6, 1, 9, 6, 1])]), ints(&[1, 6]));
}

#[test]
fn test_all_and_any() {
    let lib = lib();
    let mixed = FeelValue::list([boolean(false), null(), boolean(true)]);
    assert_eq!(lib.all(&[mixed.clone()]), boolean(false));
    assert_eq!(lib.any(&[mixed]), boolean(true));
    assert_eq!(lib.all(&[ints(&[])]), boolean(true));
    assert_eq!(lib.any(&[ints(&[])]), boolean(false));
    assert_eq!(lib.all(&[boolean(true)]), boolean(true));
}
