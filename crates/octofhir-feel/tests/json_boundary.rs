//! Tests for decision inputs and outputs crossing the JSON boundary

use octofhir_feel::{FeelLib, FeelValue};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decision_over_json_input() {
    let lib = FeelLib::new();
    let input = FeelValue::from_json(&json!({
        "applicant": { "age": 42, "income": 5000.50, "birthDate": "1982-03-14" },
        "scores": [7, 9, 8]
    }));

    let applicant = lib.get_value(&input, &FeelValue::from("applicant"));
    let age = lib.get_value(&applicant, &FeelValue::from("age"));
    assert_eq!(lib.greater_equal_than(&age, &FeelValue::from(18)), FeelValue::Boolean(true));

    let birth = lib.date(&lib.get_value(&applicant, &FeelValue::from("birthDate")));
    assert_eq!(lib.year(&birth), FeelValue::from(1982));

    let scores = lib.get_value(&input, &FeelValue::from("scores"));
    assert_eq!(lib.mean(&[scores]).to_json(), json!(8));
}

#[test]
fn test_outputs_render_as_json() {
    let lib = FeelLib::new();
    let due = lib.add(
        &lib.date(&FeelValue::from("2020-01-31")),
        &lib.duration(&FeelValue::from("P1M")),
    );
    let output = FeelValue::list([due, lib.divide(&FeelValue::from(10), &FeelValue::from(4))]);
    assert_eq!(output.to_json(), json!(["2020-02-29", 2.5]));
}

#[test]
fn test_missing_input_stays_null() {
    let lib = FeelLib::new();
    let input = FeelValue::from_json(&json!({ "age": null }));
    let age = lib.get_value(&input, &FeelValue::from("age"));
    assert_eq!(lib.greater_than(&age, &FeelValue::from(18)), FeelValue::Null);
    assert_eq!(lib.get_value(&input, &FeelValue::from("missing")).to_json(), json!(null));
}
