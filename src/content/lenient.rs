//! Tolerant field deserializers for model-produced JSON.
//!
//! Language models get the shape roughly right but not always exactly: a
//! number where a string was asked for, a single string instead of a list,
//! `null` for "nothing". Each helper here accepts any JSON value and maps the
//! ones that do not fit to "absent" instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar as text; `null`, arrays and objects have no text form.
pub(crate) fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Lines from a list of scalars, or from a single scalar.
pub(crate) fn value_lines(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        scalar => scalar_text(scalar).map(|line| vec![line]),
    }
}

/// A record from a JSON object; anything else is absent.
pub(crate) fn value_record<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

pub(crate) fn lines<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_lines(Value::deserialize(deserializer)?))
}

pub(crate) fn lines_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_lines(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(value_record(Value::deserialize(deserializer)?))
}

/// A list of records. Entries that are not objects become `T::default()` so
/// the list keeps its length and every entry still yields a slide.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| value_record(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(json!("x")), Some("x".to_string()));
        assert_eq!(scalar_text(json!(3)), Some("3".to_string()));
        assert_eq!(scalar_text(json!(2.5)), Some("2.5".to_string()));
        assert_eq!(scalar_text(json!(true)), Some("true".to_string()));
        assert_eq!(scalar_text(json!(null)), None);
        assert_eq!(scalar_text(json!(["x"])), None);
    }

    #[test]
    fn test_value_lines() {
        assert_eq!(
            value_lines(json!(["a", 1, null, {"k": "v"}, "b"])),
            Some(vec!["a".to_string(), "1".to_string(), "b".to_string()])
        );
        assert_eq!(value_lines(json!("solo")), Some(vec!["solo".to_string()]));
        assert_eq!(value_lines(json!([])), Some(Vec::new()));
        assert_eq!(value_lines(json!(null)), None);
        assert_eq!(value_lines(json!({"a": 1})), None);
    }
}
