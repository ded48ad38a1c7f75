/// Parameters of a deck generation request.
use serde::{Deserialize, Serialize};

/// MIME type of a `.pptx` package.
pub const PPTX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// What to generate a deck about.
///
/// Missing `slide_count` and `audience` fall back to 5 and
/// `"University Students"` when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub topic: String,
    #[serde(default = "default_slide_count")]
    pub slide_count: u32,
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_slide_count() -> u32 {
    5
}

fn default_audience() -> String {
    "University Students".to_string()
}

impl DeckRequest {
    /// A request for `topic` with the default slide count and audience.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            slide_count: default_slide_count(),
            audience: default_audience(),
        }
    }

    #[inline]
    pub fn with_slide_count(mut self, count: u32) -> Self {
        self.slide_count = count;
        self
    }

    #[inline]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// File name offered for download.
    ///
    /// ```
    /// use slidesmith::DeckRequest;
    /// assert_eq!(DeckRequest::new("Black holes").download_filename(), "Black_holes.pptx");
    /// ```
    pub fn download_filename(&self) -> String {
        download_filename(&self.topic)
    }

    /// `Content-Disposition` header value for the download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.download_filename())
    }
}

/// Derive a `.pptx` file name from a topic: spaces become underscores.
pub fn download_filename(topic: &str) -> String {
    format!("{}.pptx", topic.replace(' ', "_"))
}
