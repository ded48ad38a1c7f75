/// The seam to whatever produces slide content.
use super::payload::ContentPayload;
use super::request::DeckRequest;
use crate::error::Result;

/// Produces a content payload for a request.
///
/// In production this is a language-model client; prompt construction and
/// the network call live behind this trait.
pub trait ContentSource {
    fn fetch(&self, request: &DeckRequest) -> Result<ContentPayload>;
}

impl<F> ContentSource for F
where
    F: Fn(&DeckRequest) -> Result<ContentPayload>,
{
    fn fetch(&self, request: &DeckRequest) -> Result<ContentPayload> {
        self(request)
    }
}

/// A source that returns the same payload for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    payload: ContentPayload,
}

impl StaticSource {
    pub fn new(payload: ContentPayload) -> Self {
        Self { payload }
    }

    /// A source replaying a recorded model response.
    pub fn from_model_text(text: &str) -> Result<Self> {
        Ok(Self::new(ContentPayload::from_model_text(text)?))
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, _request: &DeckRequest) -> Result<ContentPayload> {
        Ok(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TitleSlide;
    use crate::error::Error;

    #[test]
    fn test_closure_source() {
        let source = |request: &DeckRequest| -> Result<ContentPayload> {
            Ok(ContentPayload {
                title_slide: Some(TitleSlide {
                    title: Some(request.topic.clone()),
                    subtitle: Some(request.audience.clone()),
                }),
                ..Default::default()
            })
        };
        let payload = source.fetch(&DeckRequest::new("Volcanoes")).unwrap();
        let title = payload.title_slide.unwrap();
        assert_eq!(title.title.as_deref(), Some("Volcanoes"));
        assert_eq!(title.subtitle.as_deref(), Some("University Students"));
    }

    #[test]
    fn test_failing_source() {
        let source = |_: &DeckRequest| -> Result<ContentPayload> {
            Err(Error::Source("model unavailable".to_string()))
        };
        assert!(matches!(source.fetch(&DeckRequest::new("x")), Err(Error::Source(_))));
    }

    #[test]
    fn test_static_source_from_model_text() {
        let source = StaticSource::from_model_text("```json\n{}\n```").unwrap();
        assert!(source.fetch(&DeckRequest::new("x")).unwrap().is_empty());
    }
}
