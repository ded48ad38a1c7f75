//! Reading back the text outline of a `.pptx` package.
//!
//! Only what this crate writes is understood: slide order comes from
//! `ppt/presentation.xml`, and each slide's text is taken from its title and
//! body placeholders.

use crate::common::xml::unescape_xml;
use crate::deck::SlideLayout;
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// Text content of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutline {
    /// Layout the slide is linked to, when it is one of the built-in layouts
    pub layout: Option<SlideLayout>,
    /// Title placeholder text, paragraphs joined with `\n`
    pub title: String,
    /// One entry per body paragraph
    pub body: Vec<String>,
}

impl SlideOutline {
    /// Body paragraphs joined with `\n`.
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }
}

/// Read the outline of every slide in `bytes`, in presentation order.
///
/// # Examples
///
/// ```rust
/// use slidesmith::{ContentPayload, assemble};
/// use slidesmith::pptx::outline;
///
/// let payload = ContentPayload::from_json(r#"{"title_slide": {"title": "Hi"}}"#)?;
/// let bytes = assemble(&payload).deck().to_pptx()?;
///
/// let slides = outline(&bytes)?;
/// assert_eq!(slides.len(), 2);
/// assert_eq!(slides[0].title, "Hi");
/// assert_eq!(slides[1].body, vec!["Questions?"]);
/// # Ok::<(), slidesmith::Error>(())
/// ```
pub fn outline(bytes: &[u8]) -> Result<Vec<SlideOutline>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let pres_rels = read_rels(&read_part(&mut archive, "ppt/_rels/presentation.xml.rels")?)?;
    let slide_rids = read_slide_ids(&read_part(&mut archive, "ppt/presentation.xml")?)?;

    let mut slides = Vec::with_capacity(slide_rids.len());
    for rid in slide_rids {
        let target = pres_rels
            .get(&rid)
            .ok_or_else(|| Error::PartNotFound(format!("relationship {rid}")))?;
        let (dir, file) = match target.rsplit_once('/') {
            Some((dir, file)) => (format!("ppt/{dir}"), file),
            None => ("ppt".to_string(), target.as_str()),
        };

        let mut slide = read_slide(&read_part(&mut archive, &format!("{dir}/{file}"))?)?;

        let rels_path = format!("{dir}/_rels/{file}.rels");
        if archive.by_name(&rels_path).is_ok() {
            let rels = read_rels(&read_part(&mut archive, &rels_path)?)?;
            slide.layout = rels.values().find_map(|target| layout_from_target(target));
        }
        slides.push(slide);
    }

    Ok(slides)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut file = archive
        .by_name(name)
        .map_err(|_| Error::PartNotFound(name.to_string()))?;
    let mut content = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut content)?;
    Ok(content)
}

fn layout_from_target(target: &str) -> Option<SlideLayout> {
    SlideLayout::ALL
        .into_iter()
        .find(|layout| target.ends_with(&format!("slideLayout{}.xml", layout.number())))
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes().flatten() {
        if attr.key.as_ref() == key {
            let value =
                std::str::from_utf8(&attr.value).map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(Some(unescape_xml(value)));
        }
    }
    Ok(None)
}

/// Map of relationship id to target.
fn read_rels(xml: &[u8]) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_reader(xml);
    let mut rels = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) =
                    (attribute(&e, b"Id")?, attribute(&e, b"Target")?)
                {
                    rels.insert(id, target);
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

/// Slide relationship ids from `p:sldIdLst`, in order.
fn read_slide_ids(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"p:sldId" => {
                if let Some(rid) = attribute(&e, b"r:id")? {
                    ids.push(rid);
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(ids)
}

fn read_slide(xml: &[u8]) -> Result<SlideOutline> {
    let mut reader = Reader::from_reader(xml);
    let mut slide = SlideOutline::default();
    let mut buf = Vec::new();

    let mut in_shape = false;
    let mut is_title = false;
    let mut shape_paragraphs: Vec<String> = Vec::new();
    // Raw (still escaped) text of the current paragraph
    let mut paragraph: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"p:sp" => {
                    in_shape = true;
                    is_title = false;
                    shape_paragraphs.clear();
                },
                b"a:p" if in_shape => paragraph = Some(String::new()),
                b"a:t" => in_text = paragraph.is_some(),
                b"a:br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.push('\n');
                    }
                },
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"p:ph" if in_shape => {
                    is_title = matches!(
                        attribute(&e, b"type")?.as_deref(),
                        Some("title") | Some("ctrTitle")
                    );
                },
                b"a:p" if in_shape => shape_paragraphs.push(String::new()),
                b"a:br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.push('\n');
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?);
                }
            },
            Event::GeneralRef(e) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    let name = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                    p.push('&');
                    p.push_str(name);
                    p.push(';');
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if let Some(raw) = paragraph.take() {
                        shape_paragraphs.push(unescape_xml(&raw));
                    }
                },
                b"p:sp" => {
                    in_shape = false;
                    let paragraphs = std::mem::take(&mut shape_paragraphs);
                    if is_title {
                        slide.title = paragraphs.join("\n");
                    } else {
                        slide.body.extend(paragraphs);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(slide)
}
