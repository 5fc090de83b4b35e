//! Utilities for serde
//!
//! Records are edited by hand in the admin panel and by older backend
//! versions, so field types drift: ids arrive as numbers, years as integers,
//! cleared fields as `null`. One odd field must not fail a whole list.

use serde_json::Value;

/// Text form of a scalar, `None` for `null`
///
/// Arrays and objects keep their compact JSON text.
fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Optional text fields (ids, links) that may arrive as strings, numbers or `null`
pub mod lenient_option {
    use serde::{Deserialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(super::value_to_string(Value::deserialize(deserializer)?))
    }
}

/// Text fields where `null` reads as empty and numbers are stringified
pub mod lenient_string {
    use serde::{Deserialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(super::value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
    }
}

/// String lists where `null` reads as empty and a lone string as one item
///
/// `null` items are dropped, other scalars are stringified.
pub mod lenient_list {
    use serde::{Deserialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(super::value_to_string)
                .collect(),
            other => super::value_to_string(other).into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(with = "super::lenient_option")]
        id: Option<String>,
        #[serde(with = "super::lenient_string")]
        year: String,
        #[serde(with = "super::lenient_list")]
        tags: Vec<String>,
    }

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).expect("lenient fields never fail")
    }

    #[test]
    fn test_null_reads_as_empty() {
        let parsed = record(json!({ "id": null, "year": null, "tags": null }));

        assert_eq!(parsed.id, None);
        assert_eq!(parsed.year, "");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_numbers_are_stringified() {
        let parsed = record(json!({ "id": 42, "year": 3, "tags": [2024, true, "ai"] }));

        assert_eq!(parsed.id.as_deref(), Some("42"));
        assert_eq!(parsed.year, "3");
        assert_eq!(parsed.tags, vec!["2024", "true", "ai"]);
    }

    #[test]
    fn test_list_shapes() {
        assert_eq!(record(json!({ "tags": "Rust" })).tags, vec!["Rust"]);
        assert_eq!(
            record(json!({ "tags": ["a", null, "b"] })).tags,
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_object_keeps_json_text() {
        let parsed = record(json!({ "id": { "$oid": "65f0c" } }));
        assert_eq!(parsed.id.as_deref(), Some(r#"{"$oid":"65f0c"}"#));
    }
}
