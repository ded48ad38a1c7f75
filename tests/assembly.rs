//! End-to-end checks: payload JSON in, `.pptx` bytes out, text read back.

use slidesmith::common::{Emu, FontSize};
use slidesmith::content::StaticSource;
use slidesmith::deck::{Alignment, SlideLayout};
use slidesmith::pptx::{PptxWriter, outline};
use slidesmith::{
    Assembler, AssemblyOptions, ContentPayload, DeckRequest, Section, SectionError, assemble,
    generate,
};
use std::io::{Cursor, Read};

fn payload(json: &str) -> ContentPayload {
    ContentPayload::from_json(json).expect("valid payload")
}

#[test]
fn missing_title_slide_uses_fallbacks() {
    let assembly = assemble(&payload(r#"{"content_slides": []}"#));
    let first = &assembly.deck().slides()[0];
    assert_eq!(first.layout(), SlideLayout::TitleSlide);
    assert_eq!(first.title().text(), "Missing Title");
    assert_eq!(first.subtitle().text(), "Missing Subtitle");
}

#[test]
fn empty_content_gives_single_empty_paragraph() {
    let assembly = assemble(&payload(r#"{"content_slides": [{"title": "Blank", "content": []}]}"#));
    let body = assembly.deck().slides()[1].body();
    assert_eq!(body.paragraphs().len(), 1);
    assert_eq!(body.paragraphs()[0].text(), "");

    let slides = outline(&assembly.deck().to_pptx().unwrap()).unwrap();
    assert_eq!(slides[1].title, "Blank");
    assert_eq!(slides[1].body, vec![""]);
}

#[test]
fn bullets_are_paragraphs_at_24pt() {
    let assembly = assemble(&payload(
        r#"{"content_slides": [{"title": "Letters", "content": ["A", "B", "C"]}]}"#,
    ));
    let body = assembly.deck().slides()[1].body();
    let texts: Vec<String> = body.paragraphs().iter().map(|p| p.text()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
    assert!(body
        .paragraphs()
        .iter()
        .all(|p| p.font_size() == Some(FontSize::from_points(24)) && p.level() == 0));

    let bytes = assembly.deck().to_pptx().unwrap();
    assert_eq!(outline(&bytes).unwrap()[1].body, ["A", "B", "C"]);
}

#[test]
fn slide_count_is_content_plus_two() {
    for n in [0usize, 1, 3, 12] {
        let slides: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"title": "S{i}", "content": ["x"]}}"#))
            .collect();
        let json = format!(r#"{{"content_slides": [{}]}}"#, slides.join(","));
        let assembly = assemble(&payload(&json));
        assert_eq!(assembly.deck().slide_count(), n + 2);
        assert_eq!(assembly.sections().len(), n + 2);

        let read_back = outline(&assembly.deck().to_pptx().unwrap()).unwrap();
        assert_eq!(read_back.len(), n + 2);
    }
}

#[test]
fn final_slide_lines_joined_and_centered() {
    let assembly = assemble(&payload(
        r#"{"final_slide": {"content": ["Thanks!", "See you soon"]}}"#,
    ));
    let last = &assembly.deck().slides()[1];
    assert_eq!(last.title().text(), "Thank You");
    assert_eq!(last.subtitle().text(), "Thanks!\nSee you soon");
    assert!(last.title().is_aligned(Alignment::Center));
    assert!(last.subtitle().is_aligned(Alignment::Center));

    let slides = outline(&assembly.deck().to_pptx().unwrap()).unwrap();
    assert_eq!(slides[1].body_text(), "Thanks!\nSee you soon");
}

#[test]
fn all_absent_gives_two_slides() {
    let assembly = assemble(&payload("{}"));
    assert_eq!(assembly.deck().slide_count(), 2);
    assert!(assembly.is_complete());

    let slides = outline(&assembly.deck().to_pptx().unwrap()).unwrap();
    assert_eq!(slides[0].title, "Missing Title");
    assert_eq!(slides[0].body, ["Missing Subtitle"]);
    assert_eq!(slides[1].title, "Thank You");
    assert_eq!(slides[1].body, ["Questions?"]);
}

#[test]
fn mistyped_fields_degrade_to_defaults() {
    let assembly = assemble(&payload(
        r#"{
            "title_slide": "not a record",
            "content_slides": [42, {"title": 7, "content": "single line"}],
            "final_slide": {"title": null, "content": true}
        }"#,
    ));
    let slides = assembly.deck().slides();
    assert_eq!(slides.len(), 4);
    assert_eq!(slides[0].title().text(), "Missing Title");
    assert_eq!(slides[1].title().text(), "Missing Slide Title");
    assert_eq!(slides[2].title().text(), "7");
    assert_eq!(slides[2].body().text(), "single line");
    assert_eq!(slides[3].title().text(), "Thank You");
}

#[test]
fn invalid_character_is_reported_not_raised() {
    let assembly = assemble(&payload(
        r#"{"content_slides": [{"title": "ok"}, {"title": "bell\u0007"}]}"#,
    ));
    assert_eq!(assembly.sections().len(), 4);
    assert_eq!(assembly.deck().slide_count(), 3);

    let omitted: Vec<_> = assembly.omitted().collect();
    assert_eq!(omitted.len(), 1);
    assert_eq!(omitted[0].0, Section::Content { index: 1 });
    assert!(matches!(omitted[0].1, SectionError::InvalidCharacter { character: '\u{7}', .. }));

    // The remaining slides still make a readable package
    let slides = outline(&assembly.deck().to_pptx().unwrap()).unwrap();
    let titles: Vec<_> = slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Missing Title", "ok", "Thank You"]);
}

#[test]
fn model_text_with_fence_assembles() {
    let text = "Here is your deck:\n```json\n{\"title_slide\": {\"title\": \"Volcanoes\", \"subtitle\": \"Fire below\"}}\n```";
    let assembly = assemble(&ContentPayload::from_model_text(text).unwrap());
    assert_eq!(assembly.deck().slides()[0].subtitle().text(), "Fire below");
}

#[test]
fn saved_file_reads_back() {
    let assembly = assemble(&payload(
        r#"{"title_slide": {"title": "Saved & <escaped>"}, "content_slides": [{"content": ["é", "日本語"]}]}"#,
    ));
    let request = DeckRequest::new("Saved deck");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(request.download_filename());

    PptxWriter::new().save(assembly.deck(), &path).unwrap();

    assert!(path.ends_with("Saved_deck.pptx"));
    let slides = outline(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(slides[0].title, "Saved & <escaped>");
    assert_eq!(slides[1].body, ["é", "日本語"]);
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn out_of_range_slide_size_fields_are_clamped() {
    let mut options = AssemblyOptions::default();
    options.slide_width = Emu(i64::MAX / 4);
    options.slide_height = Emu(-5);

    let source = StaticSource::new(payload("{}"));
    let deck = generate(&source, &DeckRequest::new("Huge"), &options).unwrap();

    let presentation = read_part(&deck.bytes, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="51206400" cy="914400"/>"#));
    assert_eq!(outline(&deck.bytes).unwrap().len(), 2);
}

#[test]
fn bullet_font_size_never_below_minimum() {
    let options = AssemblyOptions::new().with_bullet_font_size(FontSize::from_points(0));
    let assembly = Assembler::new(options)
        .assemble(&payload(r#"{"content_slides": [{"content": ["tiny"]}]}"#));

    let slide = read_part(&assembly.deck().to_pptx().unwrap(), "ppt/slides/slide2.xml");
    assert!(slide.contains(r#"sz="100""#));
    assert!(!slide.contains(r#"sz="0""#));
}

#[test]
fn crlf_in_model_text_becomes_line_breaks() {
    let assembly = assemble(&payload(
        r#"{"content_slides": [{"content": ["a\r\nb"]}], "final_slide": {"content": ["x\r\ny"]}}"#,
    ));
    let bytes = assembly.deck().to_pptx().unwrap();
    assert!(!read_part(&bytes, "ppt/slides/slide2.xml").contains('\r'));

    let slides = outline(&bytes).unwrap();
    assert_eq!(slides[1].body, ["a\nb"]);
    assert_eq!(slides[2].body, ["x", "y"]);
}
