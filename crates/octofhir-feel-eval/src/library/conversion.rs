//! Conversion functions: number(from, grouping, decimal) and string(from)

use crate::error::EvalResult;
use crate::operators::model::expect_string;
use octofhir_feel_parser::parse_localized_number;
use octofhir_feel_types::{FeelValue, MathContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionLib {
    literal: MathContext,
}

impl ConversionLib {
    /// `literal` rounds numbers read from text
    pub fn new(literal: MathContext) -> Self {
        Self { literal }
    }

    /// Read a number, optionally written with locale separators
    ///
    /// A null separator means the separator is not used. Text that does not
    /// form a number is null.
    pub fn number(
        &self,
        from: &FeelValue,
        grouping: Option<&FeelValue>,
        decimal: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if from.is_null() {
            return Ok(FeelValue::Null);
        }
        let text = expect_string(from)?;
        let grouping = separator(grouping)?;
        let decimal = separator(decimal)?;
        match parse_localized_number(text, grouping, decimal) {
            Ok(n) => Ok(FeelValue::Number(self.literal.round(n))),
            Err(e) => {
                log::debug!("number('{text}') is null: {e}");
                Ok(FeelValue::Null)
            }
        }
    }

    /// Text form of any value; null stays null
    pub fn string(&self, from: &FeelValue) -> EvalResult<FeelValue> {
        Ok(match from {
            FeelValue::Null => FeelValue::Null,
            FeelValue::String(_) => from.clone(),
            other => FeelValue::String(other.to_string()),
        })
    }
}

fn separator(value: Option<&FeelValue>) -> EvalResult<Option<&str>> {
    match value {
        None | Some(FeelValue::Null) => Ok(None),
        Some(value) => expect_string(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use octofhir_feel_types::{FeelDate, FeelRange};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    fn n(s: &str) -> FeelValue {
        FeelValue::Number(BigDecimal::from_str(s).unwrap())
    }

    #[rstest]
    #[case("1 000,0", Some(" "), Some(","), Some("1000.0"))]
    #[case("1,000.5", Some(","), Some("."), Some("1000.5"))]
    #[case("1.000.000,01", Some("."), Some(","), Some("1000000.01"))]
    #[case("12", None, None, Some("12"))]
    #[case("1,000", Some(","), Some(","), None)]
    #[case("1:000", Some(":"), None, None)]
    #[case("abc", None, None, None)]
    fn test_number(
        #[case] text: &str,
        #[case] grouping: Option<&str>,
        #[case] decimal: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let grouping = grouping.map(FeelValue::from);
        let decimal = decimal.map(FeelValue::from);
        let result = ConversionLib::default()
            .number(&text.into(), grouping.as_ref(), decimal.as_ref())
            .unwrap();
        assert_eq!(result, expected.map_or(FeelValue::Null, n));
    }

    #[test]
    fn test_number_with_null_separators() {
        let result = ConversionLib::default()
            .number(&"1000.5".into(), Some(&FeelValue::Null), Some(&FeelValue::Null))
            .unwrap();
        assert_eq!(result, n("1000.5"));
    }

    #[test]
    fn test_number_rounds_literal_precision() {
        let result = ConversionLib::default()
            .number(&"1.00000000000000000000000000000000051".into(), None, None)
            .unwrap();
        assert_eq!(result, n("1.000000000000000000000000000000001"));
    }

    #[test]
    fn test_string() {
        let lib = ConversionLib::default();
        assert_eq!(lib.string(&n("1.10")).unwrap(), FeelValue::from("1.1"));
        assert_eq!(lib.string(&FeelValue::Boolean(true)).unwrap(), FeelValue::from("true"));
        assert_eq!(lib.string(&FeelValue::Null).unwrap(), FeelValue::Null);
        let date = FeelValue::Date(FeelDate::new(2020, 1, 2).unwrap());
        assert_eq!(lib.string(&date).unwrap(), FeelValue::from("2020-01-02"));
        let range = FeelValue::Range(FeelRange::closed(1.into(), 2.into()).unwrap());
        assert_eq!(lib.string(&range).unwrap(), FeelValue::from("[1..2]"));
        assert_eq!(
            lib.string(&FeelValue::list([1.into(), "a".into()])).unwrap(),
            FeelValue::from("[1, \"a\"]")
        );
    }
}
