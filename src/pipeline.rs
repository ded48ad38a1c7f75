//! Request-to-file pipeline: fetch content, assemble, serialize.

use crate::assembler::{Assembler, SectionReport};
use crate::config::AssemblyOptions;
use crate::content::{ContentSource, DeckRequest, PPTX_MIME_TYPE};
use crate::error::Result;
use crate::pptx::PptxWriter;
use log::info;

/// A finished `.pptx` ready to hand to a client.
#[derive(Debug, Clone)]
pub struct GeneratedDeck {
    /// Suggested download name, derived from the topic
    pub filename: String,
    /// Always [`PPTX_MIME_TYPE`]
    pub mime_type: &'static str,
    /// The serialized package
    pub bytes: Vec<u8>,
    /// One report per section, in section order
    pub sections: Vec<SectionReport>,
}

impl GeneratedDeck {
    /// Number of sections left out of the deck.
    pub fn omitted_count(&self) -> usize {
        self.sections.iter().filter(|r| !r.outcome.is_rendered()).count()
    }
}

/// Fetch content for `request` from `source` and build the `.pptx`.
///
/// Fails only if the source fails or the package cannot be written; content
/// problems are reported per section in [`GeneratedDeck::sections`].
///
/// # Examples
///
/// ```rust
/// use slidesmith::{AssemblyOptions, DeckRequest, generate};
/// use slidesmith::content::StaticSource;
///
/// let source = StaticSource::from_model_text(
///     "```json\n{\"title_slide\": {\"title\": \"Tides\"}}\n```",
/// )?;
/// let deck = generate(&source, &DeckRequest::new("Ocean tides"), &AssemblyOptions::default())?;
///
/// assert_eq!(deck.filename, "Ocean_tides.pptx");
/// assert_eq!(deck.sections.len(), 2);
/// # Ok::<(), slidesmith::Error>(())
/// ```
pub fn generate<S>(
    source: &S,
    request: &DeckRequest,
    options: &AssemblyOptions,
) -> Result<GeneratedDeck>
where
    S: ContentSource + ?Sized,
{
    let payload = source.fetch(request)?;
    let (deck, sections) = Assembler::new(options.clone()).assemble(&payload).into_parts();
    let bytes = PptxWriter::new().to_bytes(&deck)?;

    let generated = GeneratedDeck {
        filename: request.download_filename(),
        mime_type: PPTX_MIME_TYPE,
        bytes,
        sections,
    };
    info!(
        "generated {} ({} slides, {} sections omitted, {} bytes)",
        generated.filename,
        deck.slide_count(),
        generated.omitted_count(),
        generated.bytes.len()
    );
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentPayload, StaticSource};
    use crate::error::Error;

    #[test]
    fn test_generate_from_static_source() {
        let payload = ContentPayload::from_json(
            r#"{"content_slides": [{"title": "A", "content": ["x"]}, {"title": "B"}]}"#,
        )
        .unwrap();
        let deck = generate(
            &StaticSource::new(payload),
            &DeckRequest::new("Two words"),
            &AssemblyOptions::default(),
        )
        .unwrap();
        assert_eq!(deck.filename, "Two_words.pptx");
        assert_eq!(deck.mime_type, PPTX_MIME_TYPE);
        assert_eq!(deck.sections.len(), 4);
        assert_eq!(deck.omitted_count(), 0);
        assert_eq!(crate::pptx::outline(&deck.bytes).unwrap().len(), 4);
    }

    #[test]
    fn test_source_error_propagates() {
        let failing = |_: &DeckRequest| -> Result<ContentPayload> {
            Err(Error::Source("rate limited".to_string()))
        };
        let err = generate(&failing, &DeckRequest::new("x"), &AssemblyOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Source(msg) if msg == "rate limited"));
    }

    #[test]
    fn test_omitted_sections_counted() {
        let payload = ContentPayload::from_json(r#"{"title_slide": {"title": "bad\u0001"}}"#).unwrap();
        let deck = generate(
            &StaticSource::new(payload),
            &DeckRequest::new("x"),
            &AssemblyOptions::default(),
        )
        .unwrap();
        assert_eq!(deck.omitted_count(), 1);
        assert_eq!(crate::pptx::outline(&deck.bytes).unwrap().len(), 1);
    }
}
