//! In-memory slide deck model.
//!
//! A [`Deck`] is the output of assembly: an ordered list of [`Slide`]s, each
//! built on a fixed [`SlideLayout`] and holding [`TextFrame`]s for its title
//! and body placeholders. The model is format-neutral; [`crate::pptx`] turns it
//! into a `.pptx` package.
//!
//! # Example
//!
//! ```rust
//! use slidesmith::deck::{Deck, Slide, TextFrame};
//!
//! let mut deck = Deck::new();
//! deck.push(Slide::title_slide(
//!     TextFrame::from_text("Rust"),
//!     TextFrame::from_text("A short tour"),
//! ));
//! assert_eq!(deck.slide_count(), 1);
//! assert_eq!(deck.slides()[0].title().text(), "Rust");
//! ```

mod layout;
mod slide;
mod text;

pub use layout::{LayoutSet, PlaceholderKind, SlideLayout};
pub use slide::Slide;
pub use text::{Alignment, Paragraph, TextFrame, TextRun};
pub(crate) use text::split_lines;

use crate::common::Emu;

/// Default slide width: 10 inches (4:3).
pub const DEFAULT_SLIDE_WIDTH: Emu = Emu::from_inches(10);
/// Default slide height: 7.5 inches (4:3).
pub const DEFAULT_SLIDE_HEIGHT: Emu = Emu(6_858_000);
/// Smallest slide side PowerPoint accepts (1 inch).
pub const MIN_SLIDE_EXTENT: Emu = Emu::from_inches(1);
/// Largest slide side PowerPoint accepts (56 inches).
pub const MAX_SLIDE_EXTENT: Emu = Emu::from_inches(56);

/// An ordered collection of slides with a fixed slide size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    slide_width: Emu,
    slide_height: Emu,
}

impl Deck {
    /// Create an empty deck with the default 10" x 7.5" slide size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT)
    }

    /// Create an empty deck with a custom slide size.
    ///
    /// Each side is clamped to [`MIN_SLIDE_EXTENT`]..=[`MAX_SLIDE_EXTENT`].
    pub fn with_size(width: Emu, height: Emu) -> Self {
        Self {
            slides: Vec::new(),
            slide_width: clamp_slide_extent(width),
            slide_height: clamp_slide_extent(height),
        }
    }

    /// Append a slide and return its 0-based index.
    pub fn push(&mut self, slide: Slide) -> usize {
        self.slides.push(slide);
        self.slides.len() - 1
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    #[inline]
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Layouts used by at least one slide, in layout-number order.
    pub fn used_layouts(&self) -> Vec<SlideLayout> {
        SlideLayout::ALL
            .into_iter()
            .filter(|layout| self.slides.iter().any(|s| s.layout() == *layout))
            .collect()
    }

    /// All slide text, slides separated by blank lines.
    pub fn text(&self) -> String {
        self.slides
            .iter()
            .map(Slide::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[inline]
pub(crate) fn clamp_slide_extent(extent: Emu) -> Emu {
    Emu(extent.get().clamp(MIN_SLIDE_EXTENT.get(), MAX_SLIDE_EXTENT.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deck_defaults() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.slide_width().get(), 9_144_000);
        assert_eq!(deck.slide_height().get(), 6_858_000);
    }

    #[test]
    fn test_with_size_clamped() {
        let deck = Deck::with_size(Emu(-5), Emu(i64::MAX / 4));
        assert_eq!(deck.slide_width(), MIN_SLIDE_EXTENT);
        assert_eq!(deck.slide_height(), MAX_SLIDE_EXTENT);
    }

    #[test]
    fn test_push_returns_index() {
        let mut deck = Deck::new();
        let first = deck.push(Slide::title_slide(TextFrame::from_text("a"), TextFrame::default()));
        let second = deck.push(Slide::title_and_content(
            TextFrame::from_text("b"),
            TextFrame::default(),
        ));
        assert_eq!((first, second), (0, 1));
        assert_eq!(deck.slide(1).map(|s| s.layout()), Some(SlideLayout::TitleAndContent));
        assert!(deck.slide(2).is_none());
    }

    #[test]
    fn test_used_layouts() {
        let mut deck = Deck::new();
        deck.push(Slide::title_slide(TextFrame::default(), TextFrame::default()));
        deck.push(Slide::title_slide(TextFrame::default(), TextFrame::default()));
        assert_eq!(deck.used_layouts(), vec![SlideLayout::TitleSlide]);
    }

    #[test]
    fn test_deck_text() {
        let mut deck = Deck::new();
        deck.push(Slide::title_slide(
            TextFrame::from_text("Title"),
            TextFrame::from_text("Sub"),
        ));
        deck.push(Slide::title_and_content(
            TextFrame::from_text("Points"),
            TextFrame::from_text("one\ntwo"),
        ));
        assert_eq!(deck.text(), "Title\nSub\n\nPoints\none\ntwo");
    }
}
