//! Slide content: the payload a language model returns, its defaulting, and
//! the request/source types around it.
//!
//! The flow is `DeckRequest` → [`ContentSource::fetch`] → [`ContentPayload`]
//! → [`ContentPayload::resolve`] → [`ResolvedContent`], which the assembler
//! consumes.

mod lenient;
mod payload;
mod request;
mod resolve;
mod source;

pub use payload::{ContentPayload, ContentSlide, FinalSlide, TitleSlide};
pub use request::{DeckRequest, PPTX_MIME_TYPE, download_filename};
pub use resolve::{ResolvedClosing, ResolvedContent, ResolvedSlide, ResolvedTitle};
pub use source::{ContentSource, StaticSource};
