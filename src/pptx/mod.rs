//! PowerPoint (`.pptx`) output.
//!
//! [`PptxWriter`] turns a [`Deck`](crate::deck::Deck) into a PresentationML
//! package: a ZIP archive of XML parts linked by relationships. The package
//! carries one slide master with the two built-in layouts, a default theme,
//! and one slide part per slide. [`inspect::outline`] reads the text of such a
//! package back.
//!
//! # Example
//!
//! ```rust
//! use slidesmith::deck::{Deck, Slide, TextFrame};
//! use slidesmith::pptx::{DocProperties, PptxWriter, outline};
//!
//! let mut deck = Deck::new();
//! deck.push(Slide::title_and_content(
//!     TextFrame::from_text("Plan"),
//!     TextFrame::from_text("Draft\nReview"),
//! ));
//!
//! let writer = PptxWriter::new().with_properties(DocProperties::new().with_creator("ops"));
//! let bytes = writer.to_bytes(&deck)?;
//!
//! let slides = outline(&bytes)?;
//! assert_eq!(slides[0].title, "Plan");
//! assert_eq!(slides[0].body, vec!["Draft", "Review"]);
//! # Ok::<(), slidesmith::Error>(())
//! ```

mod constants;
mod content_types;
pub mod inspect;
mod package;
mod presentation;
mod rels;
mod slide;
mod template;

pub use inspect::{SlideOutline, outline};
pub use package::PptxWriter;
pub use presentation::DocProperties;
pub use template::{Geometry, Rect};
