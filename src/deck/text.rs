//! Text frames, paragraphs and runs.
//!
//! This mirrors the DrawingML text model (`a:txBody` / `a:p` / `a:r`) at the
//! granularity the deck needs: a frame is a non-empty list of paragraphs, a
//! paragraph is a list of runs plus paragraph-level formatting.

use crate::common::FontSize;
use smallvec::SmallVec;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `algn` attribute on `a:pPr`.
    #[inline]
    pub fn as_xml_value(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }

    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Alignment::Left),
            "ctr" => Some(Alignment::Center),
            "r" => Some(Alignment::Right),
            "just" => Some(Alignment::Justify),
            _ => None,
        }
    }
}

/// A run of text sharing the paragraph's formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    text: String,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A paragraph of text.
///
/// A paragraph with no runs renders as an empty line; this is how an empty
/// bullet list is represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    runs: SmallVec<[TextRun; 1]>,
    level: u8,
    alignment: Option<Alignment>,
    font_size: Option<FontSize>,
}

impl Paragraph {
    /// Highest indentation level PresentationML allows.
    pub const MAX_LEVEL: u8 = 8;

    /// Create a paragraph holding `text` as a single run.
    ///
    /// Empty text yields a paragraph without runs.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut runs = SmallVec::new();
        if !text.is_empty() {
            runs.push(TextRun::new(text));
        }
        Self {
            runs,
            ..Self::default()
        }
    }

    /// An empty paragraph.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the indentation level, clamped to `0..=8`.
    #[inline]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.min(Self::MAX_LEVEL);
        self
    }

    #[inline]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[inline]
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Append a run to the paragraph.
    pub fn push_run(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    #[inline]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Font size applied to every run in the paragraph, if set.
    #[inline]
    pub fn font_size(&self) -> Option<FontSize> {
        self.font_size
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        match self.runs.as_slice() {
            [] => String::new(),
            [only] => only.text.clone(),
            runs => runs.iter().map(TextRun::text).collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// The text content of a placeholder shape.
///
/// A frame always holds at least one paragraph, matching `a:txBody`, which
/// requires one `a:p` child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Build a frame from text, one paragraph per line.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    ///
    /// ```
    /// use slidesmith::deck::TextFrame;
    /// let frame = TextFrame::from_text("Thanks!\nSee you soon");
    /// assert_eq!(frame.paragraphs().len(), 2);
    /// assert_eq!(frame.text(), "Thanks!\nSee you soon");
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self::from_paragraphs(split_lines(text).map(Paragraph::new).collect())
    }

    /// Build a frame from paragraphs. An empty list yields one empty paragraph.
    pub fn from_paragraphs(mut paragraphs: Vec<Paragraph>) -> Self {
        if paragraphs.is_empty() {
            paragraphs.push(Paragraph::empty());
        }
        Self { paragraphs }
    }

    /// Apply an alignment to every paragraph.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        for paragraph in &mut self.paragraphs {
            paragraph.alignment = Some(alignment);
        }
        self
    }

    /// Apply a font size to every paragraph.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        for paragraph in &mut self.paragraphs {
            paragraph.font_size = Some(size);
        }
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            for run in paragraph.runs() {
                text.push_str(run.text());
            }
        }
        text
    }

    /// Whether all paragraphs share `alignment`.
    pub fn is_aligned(&self, alignment: Alignment) -> bool {
        self.paragraphs
            .iter()
            .all(|p| p.alignment == Some(alignment))
    }

    /// Iterate over every run in the frame.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }
}

/// Split text at `\n`, `\r\n` or a lone `\r`.
///
/// XML readers normalize carriage returns in character data to `\n`, so a
/// raw `\r` never survives a round trip through a part.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::from_paragraphs(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_carriage_returns() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
        assert_eq!(split_lines("").collect::<Vec<_>>(), [""]);
        assert_eq!(split_lines("x\r\n").collect::<Vec<_>>(), ["x", ""]);
    }

    #[test]
    fn test_from_text_crlf() {
        let frame = TextFrame::from_text("Thanks!\r\nSee you soon");
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.text(), "Thanks!\nSee you soon");
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let p = Paragraph::new("");
        assert!(p.is_empty());
        assert_eq!(p.text(), "");
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(Paragraph::new("x").with_level(42).level(), Paragraph::MAX_LEVEL);
    }

    #[test]
    fn test_multi_run_text() {
        let mut p = Paragraph::new("Hello, ");
        p.push_run(TextRun::new("world"));
        p.push_run(TextRun::new(""));
        assert_eq!(p.runs().len(), 2);
        assert_eq!(p.text(), "Hello, world");
    }

    #[test]
    fn test_frame_never_empty() {
        let frame = TextFrame::from_paragraphs(Vec::new());
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.text(), "");
    }

    #[test]
    fn test_frame_alignment_and_size() {
        let frame = TextFrame::from_text("a\nb")
            .with_alignment(Alignment::Center)
            .with_font_size(FontSize::from_points(18));
        assert!(frame.is_aligned(Alignment::Center));
        assert!(!frame.is_aligned(Alignment::Left));
        assert!(
            frame
                .paragraphs()
                .iter()
                .all(|p| p.font_size() == Some(FontSize::from_points(18)))
        );
    }

    #[test]
    fn test_alignment_xml_values() {
        for a in [Alignment::Left, Alignment::Center, Alignment::Right, Alignment::Justify] {
            assert_eq!(Alignment::from_xml_value(a.as_xml_value()), Some(a));
        }
        assert_eq!(Alignment::from_xml_value("dist"), None);
    }
}
