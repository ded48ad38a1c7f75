/// Configuration for slide assembly.
///
/// This module defines the fallback texts substituted for absent fields and
/// the formatting and layout options the assembler applies.
use crate::common::{Emu, FontSize};
use crate::deck::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, LayoutSet, clamp_slide_extent};

/// Text substituted when a payload field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    /// Title of the opening slide
    pub title: String,
    /// Subtitle of the opening slide
    pub subtitle: String,
    /// Title of a content slide
    pub slide_title: String,
    /// Title of the closing slide
    pub final_title: String,
    /// Body of the closing slide when no remarks are given
    pub final_content: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            title: "Missing Title".to_string(),
            subtitle: "Missing Subtitle".to_string(),
            slide_title: "Missing Slide Title".to_string(),
            final_title: "Thank You".to_string(),
            final_content: "Questions?".to_string(),
        }
    }
}

/// Options controlling how a payload is assembled into a deck.
///
/// # Examples
///
/// ```rust
/// use slidesmith::common::FontSize;
/// use slidesmith::AssemblyOptions;
///
/// // Defaults: 24pt bullets, 10" x 7.5" slides, both built-in layouts
/// let options = AssemblyOptions::default();
///
/// // Or customize
/// let options = AssemblyOptions::new()
///     .with_bullet_font_size(FontSize::from_points(20))
///     .with_final_title("Merci");
/// assert_eq!(options.fallbacks.final_title, "Merci");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Fallback texts for absent fields
    pub fallbacks: Fallbacks,
    /// Font size of every bullet line on content slides
    pub bullet_font_size: FontSize,
    /// Slide width
    pub slide_width: Emu,
    /// Slide height
    pub slide_height: Emu,
    /// Layouts sections may be built on
    pub layouts: LayoutSet,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            fallbacks: Fallbacks::default(),
            bullet_font_size: FontSize::from_points(24),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            layouts: LayoutSet::default(),
        }
    }
}

impl AssemblyOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all fallback texts at once.
    #[inline]
    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Set the title used when the closing slide has none.
    #[inline]
    pub fn with_final_title(mut self, title: impl Into<String>) -> Self {
        self.fallbacks.final_title = title.into();
        self
    }

    /// Set the font size for bullet lines.
    #[inline]
    pub fn with_bullet_font_size(mut self, size: FontSize) -> Self {
        self.bullet_font_size = size;
        self
    }

    /// Set the slide size.
    ///
    /// PowerPoint accepts 1" to 56" per side; values outside are clamped.
    /// Sizes set directly on the fields are clamped again when the deck is built.
    #[inline]
    pub fn with_slide_size(mut self, width: Emu, height: Emu) -> Self {
        self.slide_width = clamp_slide_extent(width);
        self.slide_height = clamp_slide_extent(height);
        self
    }

    /// Use the 13.333" x 7.5" widescreen (16:9) slide size.
    #[inline]
    pub fn widescreen(self) -> Self {
        self.with_slide_size(Emu(12_192_000), Emu(6_858_000))
    }

    /// Restrict the layouts sections may be built on.
    #[inline]
    pub fn with_layouts(mut self, layouts: LayoutSet) -> Self {
        self.layouts = layouts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideLayout;

    #[test]
    fn test_options_default() {
        let options = AssemblyOptions::default();
        assert_eq!(options.bullet_font_size.hundredths(), 2400);
        assert_eq!(options.fallbacks.title, "Missing Title");
        assert_eq!(options.fallbacks.final_content, "Questions?");
        assert_eq!(options.layouts, LayoutSet::default());
    }

    #[test]
    fn test_options_builder() {
        let options = AssemblyOptions::new()
            .widescreen()
            .with_bullet_font_size(FontSize::from_points(18))
            .with_layouts(LayoutSet::only(&[SlideLayout::TitleSlide]));
        assert_eq!(options.slide_width.get(), 12_192_000);
        assert_eq!(options.bullet_font_size, FontSize::from_points(18));
        assert!(!options.layouts.contains(SlideLayout::TitleAndContent));
    }

    #[test]
    fn test_slide_size_clamped() {
        let options = AssemblyOptions::new().with_slide_size(Emu(0), Emu::from_inches(100));
        assert_eq!(options.slide_width, Emu::from_inches(1));
        assert_eq!(options.slide_height, Emu::from_inches(56));
    }
}
