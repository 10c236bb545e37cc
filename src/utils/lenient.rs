use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept any JSON value where a string is expected.
///
/// Strings pass through, numbers and booleans are rendered as text, and
/// null, arrays and objects become an empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        field: String,
    }

    fn probe(json: &str) -> String {
        serde_json::from_str::<Probe>(json).unwrap().field
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(probe(r#"{"field":"text"}"#), "text");
        assert_eq!(probe(r#"{"field":6}"#), "6");
        assert_eq!(probe(r#"{"field":true}"#), "true");
    }

    #[test]
    fn missing_null_and_compound_are_empty() {
        assert_eq!(probe("{}"), "");
        assert_eq!(probe(r#"{"field":null}"#), "");
        assert_eq!(probe(r#"{"field":[1,2]}"#), "");
        assert_eq!(probe(r#"{"field":{"a":1}}"#), "");
    }
}
