//! Slidesmith - assemble PowerPoint decks from structured slide content
//!
//! This library turns a content payload (the JSON a language model returns
//! when asked for a slide outline) into a `.pptx` presentation.
//!
//! # Features
//!
//! - **Lenient payloads**: Missing, `null` or mistyped fields fall back to
//!   placeholder text instead of failing
//! - **Fixed deck shape**: A title slide, one bulleted slide per content entry,
//!   and a closing slide
//! - **Per-section isolation**: A section that cannot be built is left out and
//!   reported; the rest of the deck is still produced
//! - **PPTX output**: A self-contained PresentationML package with its own
//!   master, layouts and theme
//!
//! # Example - Payload to file
//!
//! ```no_run
//! use slidesmith::{ContentPayload, assemble};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let payload = ContentPayload::from_json(r#"{
//!     "title_slide": {"title": "Coral Reefs", "subtitle": "An overview"},
//!     "content_slides": [
//!         {"title": "Why they matter", "content": ["Biodiversity", "Coastal protection"]}
//!     ],
//!     "final_slide": {"title": "Thanks", "content": ["Questions?"]}
//! }"#)?;
//!
//! let assembly = assemble(&payload);
//! for report in assembly.sections() {
//!     println!("{report}");
//! }
//! slidesmith::pptx::PptxWriter::new().save(assembly.deck(), "coral_reefs.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom options
//!
//! ```rust
//! use slidesmith::{Assembler, AssemblyOptions, ContentPayload};
//! use slidesmith::common::FontSize;
//!
//! let options = AssemblyOptions::new()
//!     .widescreen()
//!     .with_bullet_font_size(FontSize::from_points(20))
//!     .with_final_title("Fin");
//!
//! let payload = ContentPayload::default();
//! let deck = Assembler::new(options).assemble(&payload).into_deck();
//! assert_eq!(deck.slides()[1].title().text(), "Fin");
//! ```

/// Shared units and XML helpers
pub mod common;

/// Assembly options and placeholder fallbacks
pub mod config;

/// Content payload model, parsing and content sources
pub mod content;

/// In-memory deck model
pub mod deck;

/// Payload-to-deck assembly with per-section reporting
pub mod assembler;

/// `.pptx` package writing and reading
pub mod pptx;

/// Request-to-file pipeline
pub mod pipeline;

mod error;

pub use error::{Error, Result};

// Re-export commonly used types for convenience
pub use assembler::{Assembler, Assembly, Section, SectionError, SectionOutcome, SectionReport, assemble};
pub use config::{AssemblyOptions, Fallbacks};
pub use content::{ContentPayload, ContentSlide, ContentSource, DeckRequest, FinalSlide, TitleSlide};
pub use deck::Deck;
pub use pipeline::{GeneratedDeck, generate};
pub use pptx::PptxWriter;
