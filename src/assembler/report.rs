//! Per-section outcomes of an assembly.

use crate::deck::{Deck, SlideLayout};
use std::fmt;
use thiserror::Error;

/// One logical unit of the output deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The opening title slide
    Title,
    /// A content slide, by 0-based position in the payload
    Content { index: usize },
    /// The closing slide
    Final,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Title => f.write_str("title slide"),
            Section::Content { index } => write!(f, "content slide {}", index + 1),
            Section::Final => f.write_str("final slide"),
        }
    }
}

/// Why a section could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The section's layout is not in the configured layout set
    #[error("layout '{0}' is not available")]
    LayoutUnavailable(SlideLayout),

    /// A field holds a character that cannot be stored in an XML part
    #[error("{field} contains character {}, which is not allowed in XML", codepoint(.character))]
    InvalidCharacter { field: String, character: char },
}

fn codepoint(c: &char) -> String {
    format!("U+{:04X}", u32::from(*c))
}

/// What happened to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The section became the slide at `slide_index` (0-based)
    Rendered { slide_index: usize },
    /// The section was left out of the deck
    Omitted { reason: SectionError },
}

impl SectionOutcome {
    #[inline]
    pub fn is_rendered(&self) -> bool {
        matches!(self, SectionOutcome::Rendered { .. })
    }
}

/// A section paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub section: Section,
    pub outcome: SectionOutcome,
}

impl fmt::Display for SectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SectionOutcome::Rendered { slide_index } => {
                write!(f, "{}: slide {}", self.section, slide_index + 1)
            },
            SectionOutcome::Omitted { reason } => write!(f, "{}: omitted ({})", self.section, reason),
        }
    }
}

/// The result of assembling a payload: the deck plus one report per section.
///
/// Sections are reported in section order (title, content slides, final),
/// so a payload with N content slides always yields N+2 reports, whether or
/// not every section made it into the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub(crate) deck: Deck,
    pub(crate) sections: Vec<SectionReport>,
}

impl Assembly {
    #[inline]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[inline]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Split into the deck and the section reports.
    #[inline]
    pub fn into_parts(self) -> (Deck, Vec<SectionReport>) {
        (self.deck, self.sections)
    }

    #[inline]
    pub fn sections(&self) -> &[SectionReport] {
        &self.sections
    }

    /// Sections left out of the deck, with their reasons.
    pub fn omitted(&self) -> impl Iterator<Item = (Section, &SectionError)> {
        self.sections.iter().filter_map(|report| match &report.outcome {
            SectionOutcome::Omitted { reason } => Some((report.section, reason)),
            SectionOutcome::Rendered { .. } => None,
        })
    }

    /// Whether every section was rendered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(|r| r.outcome.is_rendered())
    }

    /// Outcome for a given section, if the payload had it.
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.sections
            .iter()
            .find(|r| r.section == section)
            .map(|r| &r.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display() {
        assert_eq!(Section::Title.to_string(), "title slide");
        assert_eq!(Section::Content { index: 0 }.to_string(), "content slide 1");
        assert_eq!(Section::Final.to_string(), "final slide");
    }

    #[test]
    fn test_error_display() {
        let err = SectionError::InvalidCharacter {
            field: "title".to_string(),
            character: '\u{1}',
        };
        assert_eq!(err.to_string(), "title contains character U+0001, which is not allowed in XML");
        assert_eq!(
            SectionError::LayoutUnavailable(SlideLayout::TitleAndContent).to_string(),
            "layout 'Title and Content' is not available"
        );
    }

    #[test]
    fn test_report_display() {
        let rendered = SectionReport {
            section: Section::Content { index: 2 },
            outcome: SectionOutcome::Rendered { slide_index: 3 },
        };
        assert_eq!(rendered.to_string(), "content slide 3: slide 4");

        let omitted = SectionReport {
            section: Section::Final,
            outcome: SectionOutcome::Omitted {
                reason: SectionError::LayoutUnavailable(SlideLayout::TitleSlide),
            },
        };
        assert_eq!(
            omitted.to_string(),
            "final slide: omitted (layout 'Title Slide' is not available)"
        );
    }
}
