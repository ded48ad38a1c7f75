//! Slide layouts and the placeholders they provide.

use smallvec::SmallVec;
use std::fmt;

/// Placeholder roles used by the built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Centered title on a title slide
    CenteredTitle,
    /// Subtitle on a title slide
    Subtitle,
    /// Title on a content slide
    Title,
    /// Bulleted body on a content slide
    Body,
}

impl PlaceholderKind {
    /// Value of `p:ph/@type`, or `None` for the generic object placeholder.
    #[inline]
    pub fn ph_type(self) -> Option<&'static str> {
        match self {
            PlaceholderKind::CenteredTitle => Some("ctrTitle"),
            PlaceholderKind::Subtitle => Some("subTitle"),
            PlaceholderKind::Title => Some("title"),
            PlaceholderKind::Body => None,
        }
    }

    /// Value of `p:ph/@idx`; titles are implicitly index 0.
    #[inline]
    pub fn ph_idx(self) -> Option<u32> {
        match self {
            PlaceholderKind::CenteredTitle | PlaceholderKind::Title => None,
            PlaceholderKind::Subtitle | PlaceholderKind::Body => Some(1),
        }
    }

    #[inline]
    pub fn is_title(self) -> bool {
        matches!(self, PlaceholderKind::CenteredTitle | PlaceholderKind::Title)
    }
}

/// Layouts a slide can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideLayout {
    /// Title and subtitle
    TitleSlide,
    /// Title and bulleted body
    TitleAndContent,
}

impl SlideLayout {
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleSlide, SlideLayout::TitleAndContent];

    /// 1-based layout number, used in the `slideLayoutN.xml` part name.
    #[inline]
    pub fn number(self) -> usize {
        match self {
            SlideLayout::TitleSlide => 1,
            SlideLayout::TitleAndContent => 2,
        }
    }

    /// Display name written to `p:cSld/@name`.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
        }
    }

    /// Value of `p:sldLayout/@type`.
    #[inline]
    pub fn layout_type(self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "title",
            SlideLayout::TitleAndContent => "obj",
        }
    }

    /// Title and body placeholders, in that order.
    #[inline]
    pub fn placeholders(self) -> [PlaceholderKind; 2] {
        match self {
            SlideLayout::TitleSlide => [PlaceholderKind::CenteredTitle, PlaceholderKind::Subtitle],
            SlideLayout::TitleAndContent => [PlaceholderKind::Title, PlaceholderKind::Body],
        }
    }

    #[inline]
    pub fn title_placeholder(self) -> PlaceholderKind {
        self.placeholders()[0]
    }

    #[inline]
    pub fn body_placeholder(self) -> PlaceholderKind {
        self.placeholders()[1]
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of layouts available to the assembler.
///
/// Sections whose layout is missing from the set cannot be built and are
/// omitted from the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSet {
    layouts: SmallVec<[SlideLayout; 2]>,
}

impl LayoutSet {
    /// A set with no layouts.
    pub fn empty() -> Self {
        Self {
            layouts: SmallVec::new(),
        }
    }

    /// A set holding exactly the given layouts.
    pub fn only(layouts: &[SlideLayout]) -> Self {
        let mut set = Self::empty();
        for &layout in layouts {
            set.insert(layout);
        }
        set
    }

    pub fn insert(&mut self, layout: SlideLayout) {
        if !self.contains(layout) {
            self.layouts.push(layout);
        }
    }

    pub fn remove(&mut self, layout: SlideLayout) {
        self.layouts.retain(|l| *l != layout);
    }

    #[inline]
    pub fn contains(&self, layout: SlideLayout) -> bool {
        self.layouts.contains(&layout)
    }

    pub fn iter(&self) -> impl Iterator<Item = SlideLayout> + '_ {
        self.layouts.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for LayoutSet {
    fn default() -> Self {
        Self::only(&SlideLayout::ALL)
    }
}
