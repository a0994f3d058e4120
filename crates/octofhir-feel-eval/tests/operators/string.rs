//! String Function Tests
//!
//! Tests for: string length, substring, case mapping, contains, matches,
//! replace, split, concatenation, number and string conversion

use crate::{boolean, date, int, lib, null, num, text};
use octofhir_feel_types::FeelValue;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Code Point Semantics
// ============================================================================

#[test]
fn test_length_counts_code_points() {
    let lib = lib();
    assert_eq!(lib.string_length(&text("\u{1F40E}")), int(1));
    assert_eq!(lib.string_length(&text("foo\u{1F40E}bar")), int(7));
    assert_eq!(lib.string_length(&text("")), int(0));
}

#[test]
fn test_substring_of_surrogate_pair() {
    let lib = lib();
    assert_eq!(
        lib.substring(&text("foo\u{1F40E}bar"), &int(4), Some(&int(1))),
        text("\u{1F40E}")
    );
    assert_eq!(
        lib.substring(&text("foo\u{1F40E}bar"), &int(-3), None),
        text("bar")
    );
}

#[rstest]
#[case("foobar", 3, None, text("obar"))]
#[case("foobar", 3, Some(3), text("oba"))]
#[case("foobar", -2, Some(1), text("a"))]
#[case("foobar", 0, None, null())]
fn test_substring(
    #[case] input: &str,
    #[case] start: i32,
    #[case] length: Option<i32>,
    #[case] expected: FeelValue,
) {
    let length = length.map(int);
    assert_eq!(lib().substring(&text(input), &int(start), length.as_ref()), expected);
}

// ============================================================================
// Search and Case
// ============================================================================

#[test]
fn test_search_functions() {
    let lib = lib();
    assert_eq!(lib.upper_case(&text("aBc4")), text("ABC4"));
    assert_eq!(lib.lower_case(&text("aBc4")), text("abc4"));
    assert_eq!(lib.substring_before(&text("foobar"), &text("bar")), text("foo"));
    assert_eq!(lib.substring_after(&text("foobar"), &text("ob")), text("ar"));
    assert_eq!(lib.contains(&text("foobar"), &text("of")), boolean(false));
    assert_eq!(lib.starts_with(&text("foobar"), &text("fo")), boolean(true));
    assert_eq!(lib.ends_with(&text("foobar"), &text("r")), boolean(true));
    assert_eq!(lib.contains(&null(), &text("a")), null());
    assert_eq!(lib.contains(&text("a"), &int(1)), null());
}

#[test]
fn test_concatenation() {
    let lib = lib();
    assert_eq!(lib.add(&text("foo"), &text("bar")), text("foobar"));
    assert_eq!(lib.string_add(&text("foo"), &null()), null());
}

// ============================================================================
// Regular Expressions
// ============================================================================

#[rstest]
#[case("foobar", "^fo*b", None, boolean(true))]
#[case("foobar", "^FO*B", Some("i"), boolean(true))]
#[case("a\nb", "a.b", Some("s"), boolean(true))]
#[case("a\nb", "a.b", None, boolean(false))]
#[case("foobar", "(", None, null())]
#[case("foobar", "o", Some("q"), null())]
fn test_matches(
    #[case] input: &str,
    #[case] pattern: &str,
    #[case] flags: Option<&str>,
    #[case] expected: FeelValue,
) {
    let flags = flags.map(text);
    assert_eq!(lib().matches(&text(input), &text(pattern), flags.as_ref()), expected);
}

#[test]
fn test_replace_and_split() {
    let lib = lib();
    assert_eq!(
        lib.replace(&text("abcd"), &text("(ab)|(a)"), &text("[1=$1][2=$2]"), None),
        text("[1=ab][2=]cd")
    );
    assert_eq!(
        lib.replace(&text("Abc"), &text("a"), &text("x"), Some(&text("i"))),
        text("xbc")
    );
    assert_eq!(
        lib.split(&text("John Doe"), &text("\\s")),
        FeelValue::list([text("John"), text("Doe")])
    );
    assert_eq!(
        lib.split(&text("a;b;c;;"), &text(";")),
        FeelValue::list([text("a"), text("b"), text("c"), text(""), text("")])
    );
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_number_conversion() {
    let lib = lib();
    assert_eq!(
        lib.number(&text("1 000,0"), Some(&text(" ")), Some(&text(","))),
        num("1000.0")
    );
    assert_eq!(lib.number(&text("1,000"), Some(&text(",")), Some(&text(","))), null());
    assert_eq!(lib.number(&text("abc"), None, None), null());
}

#[test]
fn test_string_conversion() {
    let lib = lib();
    assert_eq!(lib.string(&num("1.10")), text("1.1"));
    assert_eq!(lib.string(&date("2020-01-02")), text("2020-01-02"));
    assert_eq!(lib.string(&null()), null());
}
