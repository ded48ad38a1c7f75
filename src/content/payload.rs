/// Structured slide content as produced by a language model.
use super::lenient;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content for the opening title slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSlide {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Content for one bulleted slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSlide {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Bullet lines, top to bottom.
    #[serde(default, deserialize_with = "lenient::lines_or_empty")]
    pub content: Vec<String>,
}

/// Content for the closing slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSlide {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Closing remarks, one per line. `None` and `Some(vec![])` differ: the
    /// first falls back to the default remark, the second renders nothing.
    #[serde(default, deserialize_with = "lenient::lines", skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
}

/// The full content payload handed to the assembler.
///
/// Every field is optional. Parsing is lenient (see [`ContentPayload::from_json`]);
/// defaults for absent fields are applied by [`ContentPayload::resolve`].
///
/// # Examples
///
/// ```rust
/// use slidesmith::ContentPayload;
///
/// let payload = ContentPayload::from_json(r#"{
///     "title_slide": {"title": "Ownership", "subtitle": "Rust 101"},
///     "content_slides": [{"title": "Moves", "content": ["Values have one owner"]}]
/// }"#)?;
/// assert_eq!(payload.content_slides.len(), 1);
/// assert!(payload.final_slide.is_none());
/// # Ok::<(), slidesmith::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPayload {
    #[serde(default, deserialize_with = "lenient::record", skip_serializing_if = "Option::is_none")]
    pub title_slide: Option<TitleSlide>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub content_slides: Vec<ContentSlide>,
    #[serde(default, deserialize_with = "lenient::record", skip_serializing_if = "Option::is_none")]
    pub final_slide: Option<FinalSlide>,
}

impl ContentPayload {
    /// Parse a payload from JSON text.
    ///
    /// Only two things are errors: text that is not JSON, and a top-level
    /// value that is not an object. Everything below the top level degrades to
    /// "absent": wrong-typed records are dropped, scalars in text positions
    /// are stringified, a lone string where lines are expected becomes one
    /// line, and unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a payload from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Build a payload from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidPayload(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse the raw text of a model response.
    ///
    /// Models often wrap JSON in a Markdown code fence or add a sentence
    /// around it; the outermost `{ ... }` span is extracted first.
    ///
    /// ```rust
    /// use slidesmith::ContentPayload;
    ///
    /// let reply = "Here you go:\n```json\n{\"title_slide\": {\"title\": \"Tides\"}}\n```";
    /// let payload = ContentPayload::from_model_text(reply)?;
    /// assert_eq!(payload.title_slide.unwrap().title.as_deref(), Some("Tides"));
    /// # Ok::<(), slidesmith::Error>(())
    /// ```
    pub fn from_model_text(text: &str) -> Result<Self> {
        Self::from_json(extract_json_object(text)?)
    }

    /// Serialize the payload back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether the payload carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.title_slide.is_none() && self.content_slides.is_empty() && self.final_slide.is_none()
    }
}

/// The outermost `{ ... }` span of `text`.
fn extract_json_object(text: &str) -> Result<&str> {
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(Error::InvalidPayload(
            "no JSON object found in model response".to_string(),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        let payload = ContentPayload::from_json("{}").unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = ContentPayload::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidPayload(ref m) if m.contains("an array")));
        assert!(matches!(ContentPayload::from_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let payload = ContentPayload::from_json(
            r#"{"title_slide": null, "content_slides": null, "final_slide": {"title": null, "content": null}}"#,
        )
        .unwrap();
        assert!(payload.title_slide.is_none());
        assert!(payload.content_slides.is_empty());
        let final_slide = payload.final_slide.unwrap();
        assert!(final_slide.title.is_none());
        assert!(final_slide.content.is_none());
    }

    #[test]
    fn test_wrong_types_degrade() {
        let payload = ContentPayload::from_json(
            r#"{
                "title_slide": "just a string",
                "content_slides": [
                    {"title": 42, "content": "single line"},
                    "not a record",
                    {"content": ["a", 7, false]}
                ],
                "final_slide": {"content": []},
                "extra": {"ignored": true}
            }"#,
        )
        .unwrap();

        assert!(payload.title_slide.is_none());
        assert_eq!(payload.content_slides.len(), 3);
        assert_eq!(payload.content_slides[0].title.as_deref(), Some("42"));
        assert_eq!(payload.content_slides[0].content, vec!["single line"]);
        assert_eq!(payload.content_slides[1], ContentSlide::default());
        assert_eq!(payload.content_slides[2].content, vec!["a", "7", "false"]);
        assert_eq!(payload.final_slide.unwrap().content, Some(Vec::new()));
    }

    #[test]
    fn test_model_text_with_fence() {
        let text = "```json\n{\"content_slides\": [{\"title\": \"A\"}]}\n```";
        let payload = ContentPayload::from_model_text(text).unwrap();
        assert_eq!(payload.content_slides[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_model_text_without_object() {
        assert!(matches!(
            ContentPayload::from_model_text("Sorry, I can't help with that."),
            Err(Error::InvalidPayload(_))
        ));
        assert!(ContentPayload::from_model_text("} backwards {").is_err());
    }

    #[test]
    fn test_json_roundtrip_skips_absent() {
        let payload = ContentPayload {
            title_slide: Some(TitleSlide {
                title: Some("T".to_string()),
                subtitle: None,
            }),
            ..Default::default()
        };
        let json = payload.to_json().unwrap();
        assert_eq!(json, r#"{"title_slide":{"title":"T"},"content_slides":[]}"#);
        assert_eq!(ContentPayload::from_json(&json).unwrap(), payload);
    }
}
