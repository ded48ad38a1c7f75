//! Assembly of a content payload into a slide deck.
//!
//! The deck always has the same shape: a title slide, one bulleted slide per
//! content entry, and a closing slide. Absent fields are filled from
//! [`Fallbacks`](crate::config::Fallbacks) before any slide is built.
//!
//! Each section is built independently. A section that cannot be built is
//! left out, logged at `warn`, and reported as [`SectionOutcome::Omitted`];
//! assembly itself never fails.
//!
//! # Example
//!
//! ```rust
//! use slidesmith::{ContentPayload, assemble};
//!
//! let payload = ContentPayload::from_json(r#"{
//!     "content_slides": [{"title": "Agenda", "content": ["Intro", "Demo"]}]
//! }"#)?;
//! let assembly = assemble(&payload);
//!
//! let deck = assembly.deck();
//! assert_eq!(deck.slide_count(), 3);
//! assert_eq!(deck.slides()[0].title().text(), "Missing Title");
//! assert_eq!(deck.slides()[1].body().text(), "Intro\nDemo");
//! assert!(assembly.is_complete());
//! # Ok::<(), slidesmith::Error>(())
//! ```

mod report;

pub use report::{Assembly, Section, SectionError, SectionOutcome, SectionReport};

use crate::common::xml::first_invalid_xml_char;
use crate::config::AssemblyOptions;
use crate::content::{ContentPayload, ResolvedClosing, ResolvedSlide, ResolvedTitle};
use crate::deck::{Alignment, Deck, Paragraph, Slide, SlideLayout, TextFrame};
use log::{debug, warn};

type SectionResult = std::result::Result<Slide, SectionError>;

/// Builds decks from payloads with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    options: AssemblyOptions,
}

impl Assembler {
    pub fn new(options: AssemblyOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// Assemble `payload` into a deck.
    pub fn assemble(&self, payload: &ContentPayload) -> Assembly {
        let content = payload.resolve(&self.options.fallbacks);
        let mut deck = Deck::with_size(self.options.slide_width, self.options.slide_height);
        let mut sections = Vec::with_capacity(content.slides.len() + 2);

        let title = self.title_section(&content.title);
        sections.push(place(&mut deck, Section::Title, title));

        for (index, slide) in content.slides.iter().enumerate() {
            let built = self.content_section(slide);
            sections.push(place(&mut deck, Section::Content { index }, built));
        }

        let closing = self.final_section(&content.closing);
        sections.push(place(&mut deck, Section::Final, closing));

        let assembly = Assembly { deck, sections };
        debug!(
            "assembled {} of {} sections into {} slides",
            assembly.sections.iter().filter(|r| r.outcome.is_rendered()).count(),
            assembly.sections.len(),
            assembly.deck.slide_count()
        );
        assembly
    }

    fn title_section(&self, content: &ResolvedTitle) -> SectionResult {
        self.require_layout(SlideLayout::TitleSlide)?;
        check_text("title", &content.title)?;
        check_text("subtitle", &content.subtitle)?;

        Ok(Slide::title_slide(
            TextFrame::from_text(&content.title),
            TextFrame::from_text(&content.subtitle),
        ))
    }

    fn content_section(&self, content: &ResolvedSlide) -> SectionResult {
        self.require_layout(SlideLayout::TitleAndContent)?;
        check_text("title", &content.title)?;
        for (i, bullet) in content.bullets.iter().enumerate() {
            check_text(&format!("bullet {}", i + 1), bullet)?;
        }

        // An empty bullet list still yields one (empty) paragraph.
        let size = self.options.bullet_font_size;
        let paragraphs = content
            .bullets
            .iter()
            .map(|bullet| Paragraph::new(bullet.as_str()).with_level(0).with_font_size(size))
            .collect::<Vec<_>>();
        let body = if paragraphs.is_empty() {
            TextFrame::from_paragraphs(vec![Paragraph::empty().with_font_size(size)])
        } else {
            TextFrame::from_paragraphs(paragraphs)
        };

        Ok(Slide::title_and_content(TextFrame::from_text(&content.title), body))
    }

    fn final_section(&self, content: &ResolvedClosing) -> SectionResult {
        self.require_layout(SlideLayout::TitleSlide)?;
        check_text("title", &content.title)?;
        for (i, line) in content.lines.iter().enumerate() {
            check_text(&format!("closing line {}", i + 1), line)?;
        }

        Ok(Slide::title_slide(
            TextFrame::from_text(&content.title).with_alignment(Alignment::Center),
            TextFrame::from_text(&content.text()).with_alignment(Alignment::Center),
        ))
    }

    fn require_layout(&self, layout: SlideLayout) -> Result<(), SectionError> {
        if self.options.layouts.contains(layout) {
            Ok(())
        } else {
            Err(SectionError::LayoutUnavailable(layout))
        }
    }
}

/// Assemble `payload` with default options.
pub fn assemble(payload: &ContentPayload) -> Assembly {
    Assembler::default().assemble(payload)
}

fn check_text(field: &str, text: &str) -> Result<(), SectionError> {
    match first_invalid_xml_char(text) {
        Some(character) => Err(SectionError::InvalidCharacter {
            field: field.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Append a built slide to the deck, or log why it was left out.
fn place(deck: &mut Deck, section: Section, built: SectionResult) -> SectionReport {
    let outcome = match built {
        Ok(slide) => SectionOutcome::Rendered {
            slide_index: deck.push(slide),
        },
        Err(reason) => {
            warn!("omitting {section}: {reason}");
            SectionOutcome::Omitted { reason }
        },
    };
    SectionReport { section, outcome }
}
