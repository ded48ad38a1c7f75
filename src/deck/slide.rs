/// A single slide in a deck.
use super::layout::SlideLayout;
use super::text::TextFrame;

/// A slide built on one of the built-in layouts.
///
/// Every layout has exactly two placeholders: a title and a body. For
/// [`SlideLayout::TitleSlide`] the body is the subtitle; for
/// [`SlideLayout::TitleAndContent`] it is the bulleted content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    layout: SlideLayout,
    title: TextFrame,
    body: TextFrame,
}

impl Slide {
    pub fn new(layout: SlideLayout, title: TextFrame, body: TextFrame) -> Self {
        Self {
            layout,
            title,
            body,
        }
    }

    /// A title slide with a title and subtitle.
    pub fn title_slide(title: TextFrame, subtitle: TextFrame) -> Self {
        Self::new(SlideLayout::TitleSlide, title, subtitle)
    }

    /// A content slide with a title and a bulleted body.
    pub fn title_and_content(title: TextFrame, body: TextFrame) -> Self {
        Self::new(SlideLayout::TitleAndContent, title, body)
    }

    #[inline]
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    #[inline]
    pub fn title(&self) -> &TextFrame {
        &self.title
    }

    /// The body placeholder's text frame.
    #[inline]
    pub fn body(&self) -> &TextFrame {
        &self.body
    }

    /// Alias for [`Slide::body`] on title slides.
    #[inline]
    pub fn subtitle(&self) -> &TextFrame {
        &self.body
    }

    /// Title and body text separated by a newline.
    pub fn text(&self) -> String {
        let mut text = self.title.text();
        text.push('\n');
        text.push_str(&self.body.text());
        text
    }
}
