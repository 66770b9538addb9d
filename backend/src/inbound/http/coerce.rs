//! Lenient text fields for request bodies.
//!
//! Text attributes also accept JSON numbers, which are stored in their
//! decimal form: `1001` becomes `"1001"` and `2.5` becomes `"2.5"`. Other
//! JSON types are still rejected.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Plain(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        match value {
            Text::Plain(text) => text,
            Text::Signed(number) => number.to_string(),
            Text::Unsigned(number) => number.to_string(),
            Text::Float(number) if number.is_finite() && number.fract() == 0.0 => {
                format!("{number:.1}")
            }
            Text::Float(number) => number.to_string(),
        }
    }
}

/// Required text field.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Text::deserialize(deserializer).map(String::from)
}

/// Optional text field where `null` and absence are equivalent.
///
/// Pair with `#[serde(default)]`.
pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Text>::deserialize(deserializer).map(|value| value.map(String::from))
}

/// Nullable text field in a partial update.
///
/// Pair with `#[serde(default)]`: absence yields `None`, `null` yields
/// `Some(None)`.
pub(crate) fn present_optional_string<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{Value, json};

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        required: String,
        #[serde(default, deserialize_with = "optional_string")]
        optional: Option<String>,
        #[serde(default, deserialize_with = "present_optional_string")]
        nullable: Option<Option<String>>,
    }

    #[rstest]
    #[case(json!("1001"), "1001")]
    #[case(json!(1001), "1001")]
    #[case(json!(-7), "-7")]
    #[case(json!(18_446_744_073_709_551_615_u64), "18446744073709551615")]
    #[case(json!(2.5), "2.5")]
    #[case(json!(3.0), "3.0")]
    fn numbers_become_text(#[case] raw: Value, #[case] expected: &str) {
        let sample: Sample =
            serde_json::from_value(json!({ "required": raw })).expect("sample parses");
        assert_eq!(sample.required, expected);
    }

    #[rstest]
    #[case(json!(true))]
    #[case(json!(["1001"]))]
    #[case(json!({ "number": 1001 }))]
    fn non_scalar_values_are_rejected(#[case] raw: Value) {
        let parsed = serde_json::from_value::<Sample>(json!({ "required": raw }));
        assert!(parsed.is_err());
    }

    #[rstest]
    fn absent_and_null_are_distinguished_for_nullable_fields() {
        let absent: Sample = serde_json::from_value(json!({ "required": "x" })).expect("parses");
        assert_eq!(absent.optional, None);
        assert_eq!(absent.nullable, None);

        let cleared: Sample = serde_json::from_value(
            json!({ "required": "x", "optional": null, "nullable": null }),
        )
        .expect("parses");
        assert_eq!(cleared.optional, None);
        assert_eq!(cleared.nullable, Some(None));

        let set: Sample =
            serde_json::from_value(json!({ "required": "x", "optional": 5, "nullable": 6 }))
                .expect("parses");
        assert_eq!(set.optional.as_deref(), Some("5"));
        assert_eq!(set.nullable, Some(Some("6".to_owned())));
    }
}
