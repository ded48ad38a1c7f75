/// Presentation-level parts: `presentation.xml` and the document properties.
use super::constants::{PML_NAMESPACES, XML_DECLARATION};
use super::template::{Geometry, MASTER_ID};
use crate::common::xml::escape_xml;
use crate::deck::Deck;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

/// First `p:sldId/@id`; PowerPoint requires ids of at least 256.
pub const FIRST_SLIDE_ID: u32 = 256;

/// Generate `ppt/presentation.xml`.
///
/// `master_rel_id` and `slide_rel_ids` are the presentation part's rIds for
/// the slide master and for each slide, in deck order.
pub(crate) fn presentation_xml(
    deck: &Deck,
    master_rel_id: &str,
    slide_rel_ids: &[String],
) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<p:presentation {PML_NAMESPACES} saveSubsetFonts="1">"#)?;

    xml.push_str("<p:sldMasterIdLst>");
    write!(xml, r#"<p:sldMasterId id="{MASTER_ID}" r:id="{master_rel_id}"/>"#)?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (index, rel_id) in slide_rel_ids.iter().enumerate() {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + index as u32,
                rel_id
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    let geometry = Geometry::new(deck.slide_width(), deck.slide_height());
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}""#,
        deck.slide_width(),
        deck.slide_height()
    )?;
    if let Some(size_type) = geometry.size_type() {
        write!(xml, r#" type="{size_type}""#)?;
    }
    xml.push_str("/>");
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}

/// Document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocProperties {
    /// Document title; defaults to the first slide's title
    pub title: Option<String>,
    /// Author
    pub creator: String,
    /// Creation and modification time
    pub created: DateTime<Utc>,
}

impl DocProperties {
    pub fn new() -> Self {
        Self {
            title: None,
            creator: env!("CARGO_PKG_NAME").to_string(),
            created: Utc::now(),
        }
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    #[inline]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }
}

impl Default for DocProperties {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate `docProps/core.xml`.
pub(crate) fn core_props_xml(props: &DocProperties, deck: &Deck) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    let title = props
        .title
        .clone()
        .or_else(|| deck.slides().first().map(|s| s.title().text()));
    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(&title))?;
    }
    let creator = escape_xml(&props.creator);
    write!(xml, "<dc:creator>{creator}</dc:creator>")?;
    write!(xml, "<cp:lastModifiedBy>{creator}</cp:lastModifiedBy>")?;
    xml.push_str("<cp:revision>1</cp:revision>");

    let stamp = props.created.to_rfc3339_opts(SecondsFormat::Secs, true);
    write!(xml, r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#)?;
    write!(xml, r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#)?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate `docProps/app.xml`.
pub(crate) fn app_props_xml(deck: &Deck) -> Result<String> {
    let geometry = Geometry::new(deck.slide_width(), deck.slide_height());
    let paragraphs: usize = deck
        .slides()
        .iter()
        .map(|s| s.title().paragraphs().len() + s.body().paragraphs().len())
        .sum();
    let words: usize = deck
        .slides()
        .iter()
        .flat_map(|s| s.title().runs().chain(s.body().runs()))
        .map(|run| run.text().split_whitespace().count())
        .sum();

    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str("<TotalTime>0</TotalTime>");
    write!(xml, "<Words>{words}</Words>")?;
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    write!(xml, "<PresentationFormat>{}</PresentationFormat>", geometry.format_name())?;
    write!(xml, "<Paragraphs>{paragraphs}</Paragraphs>")?;
    write!(xml, "<Slides>{}</Slides>", deck.slide_count())?;
    xml.push_str("<Notes>0</Notes><HiddenSlides>0</HiddenSlides><MMClips>0</MMClips>");
    xml.push_str("<ScaleCrop>false</ScaleCrop><LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc><HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("<AppVersion>16.0000</AppVersion>");
    xml.push_str("</Properties>");
    Ok(xml)
}
