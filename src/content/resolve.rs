//! Defaulting of absent payload fields.
//!
//! Resolution happens once, before assembly, so the assembler works on plain
//! strings and never has to ask whether a field was present.

use super::payload::ContentPayload;
use crate::config::Fallbacks;

/// Opening slide with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: String,
    pub subtitle: String,
}

/// Content slide with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlide {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Closing slide with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClosing {
    pub title: String,
    pub lines: Vec<String>,
}

impl ResolvedClosing {
    /// Remarks joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A payload with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub title: ResolvedTitle,
    pub slides: Vec<ResolvedSlide>,
    pub closing: ResolvedClosing,
}

impl ContentPayload {
    /// Apply `fallbacks` to every absent field.
    pub fn resolve(&self, fallbacks: &Fallbacks) -> ResolvedContent {
        let title_slide = self.title_slide.as_ref();
        let title = ResolvedTitle {
            title: title_slide
                .and_then(|t| t.title.clone())
                .unwrap_or_else(|| fallbacks.title.clone()),
            subtitle: title_slide
                .and_then(|t| t.subtitle.clone())
                .unwrap_or_else(|| fallbacks.subtitle.clone()),
        };

        let slides = self
            .content_slides
            .iter()
            .map(|slide| ResolvedSlide {
                title: slide
                    .title
                    .clone()
                    .unwrap_or_else(|| fallbacks.slide_title.clone()),
                bullets: slide.content.clone(),
            })
            .collect();

        let final_slide = self.final_slide.as_ref();
        let closing = ResolvedClosing {
            title: final_slide
                .and_then(|f| f.title.clone())
                .unwrap_or_else(|| fallbacks.final_title.clone()),
            lines: final_slide
                .and_then(|f| f.content.clone())
                .unwrap_or_else(|| vec![fallbacks.final_content.clone()]),
        };

        ResolvedContent {
            title,
            slides,
            closing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentSlide, FinalSlide, TitleSlide};

    #[test]
    fn test_resolve_all_absent() {
        let resolved = ContentPayload::default().resolve(&Fallbacks::default());
        assert_eq!(resolved.title.title, "Missing Title");
        assert_eq!(resolved.title.subtitle, "Missing Subtitle");
        assert!(resolved.slides.is_empty());
        assert_eq!(resolved.closing.title, "Thank You");
        assert_eq!(resolved.closing.text(), "Questions?");
    }

    #[test]
    fn test_resolve_partial_title() {
        let payload = ContentPayload {
            title_slide: Some(TitleSlide {
                title: None,
                subtitle: Some("Only a subtitle".to_string()),
            }),
            ..Default::default()
        };
        let resolved = payload.resolve(&Fallbacks::default());
        assert_eq!(resolved.title.title, "Missing Title");
        assert_eq!(resolved.title.subtitle, "Only a subtitle");
    }

    #[test]
    fn test_resolve_content_slides() {
        let payload = ContentPayload {
            content_slides: vec![
                ContentSlide {
                    title: Some("Why".to_string()),
                    content: vec!["Because".to_string()],
                },
                ContentSlide::default(),
            ],
            ..Default::default()
        };
        let resolved = payload.resolve(&Fallbacks::default());
        assert_eq!(resolved.slides[0].title, "Why");
        assert_eq!(resolved.slides[0].bullets, vec!["Because"]);
        assert_eq!(resolved.slides[1].title, "Missing Slide Title");
        assert!(resolved.slides[1].bullets.is_empty());
    }

    #[test]
    fn test_empty_closing_remarks_stay_empty() {
        let payload = ContentPayload {
            final_slide: Some(FinalSlide {
                title: Some("Bye".to_string()),
                content: Some(Vec::new()),
            }),
            ..Default::default()
        };
        let resolved = payload.resolve(&Fallbacks::default());
        assert_eq!(resolved.closing.title, "Bye");
        assert_eq!(resolved.closing.text(), "");
    }
}
