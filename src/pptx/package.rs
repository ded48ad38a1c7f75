//! Serialization of a [`Deck`] into a `.pptx` package.
//!
//! The package is built part by part: every part is generated as XML text,
//! registered in `[Content_Types].xml`, linked from its source part's
//! relationships, and written into a ZIP archive.

use super::constants::{content_type as ct, relationship_type as rt};
use super::content_types::ContentTypes;
use super::presentation::{DocProperties, app_props_xml, core_props_xml, presentation_xml};
use super::rels::Relationships;
use super::slide::slide_xml;
use super::template::{
    Geometry, pres_props_xml, slide_layout_xml, slide_master_xml, table_styles_xml, theme_xml,
    view_props_xml,
};
use crate::deck::{Deck, SlideLayout};
use crate::error::Result;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

const MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";

/// Writes decks as PresentationML packages.
///
/// # Examples
///
/// ```rust
/// use slidesmith::deck::{Deck, Slide, TextFrame};
/// use slidesmith::pptx::PptxWriter;
///
/// let mut deck = Deck::new();
/// deck.push(Slide::title_slide(
///     TextFrame::from_text("Hello"),
///     TextFrame::from_text("World"),
/// ));
///
/// let bytes = PptxWriter::new().to_bytes(&deck)?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), slidesmith::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    properties: DocProperties,
}

impl PptxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `properties` for `docProps/core.xml`.
    #[inline]
    pub fn with_properties(mut self, properties: DocProperties) -> Self {
        self.properties = properties;
        self
    }

    #[inline]
    pub fn properties(&self) -> &DocProperties {
        &self.properties
    }

    /// Serialize `deck` into an in-memory `.pptx`.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write_package(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Serialize `deck` into any writer.
    pub fn write_to<W: Write>(&self, deck: &Deck, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes(deck)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize `deck` into a file at `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, deck: &Deck, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let file = self.write_package(deck, BufWriter::new(file))?;
        file.into_inner().map_err(|e| e.into_error())?;
        debug!("saved {} slides to {}", deck.slide_count(), path.as_ref().display());
        Ok(())
    }

    fn write_package<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let geometry = Geometry::new(deck.slide_width(), deck.slide_height());
        let mut package = PartWriter::new(writer);

        // Package relationships
        let mut pkg_rels = Relationships::new();
        pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
        package.write_rels("_rels/.rels", &pkg_rels)?;

        // Presentation part and its relationships
        let mut pres_rels = Relationships::new();
        let master_rid = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rids = (1..=deck.slide_count())
            .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{n}.xml")))
            .collect::<Vec<_>>();
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        package.write_part(
            "ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            &presentation_xml(deck, &master_rid, &slide_rids)?,
        )?;
        package.write_rels("ppt/_rels/presentation.xml.rels", &pres_rels)?;

        // Slide master, layouts and theme
        let mut master_rels = Relationships::new();
        let layout_rids = SlideLayout::ALL
            .iter()
            .map(|layout| master_rels.add(rt::SLIDE_LAYOUT, layout_target(*layout)))
            .collect::<Vec<_>>();
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        package.write_part(
            MASTER_PART,
            ct::PML_SLIDE_MASTER,
            &slide_master_xml(&geometry, &layout_rids),
        )?;
        package.write_rels("ppt/slideMasters/_rels/slideMaster1.xml.rels", &master_rels)?;

        for layout in SlideLayout::ALL {
            let n = layout.number();
            let mut layout_rels = Relationships::new();
            layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
            package.write_part(
                &format!("ppt/slideLayouts/slideLayout{n}.xml"),
                ct::PML_SLIDE_LAYOUT,
                &slide_layout_xml(layout, &geometry),
            )?;
            package.write_rels(
                &format!("ppt/slideLayouts/_rels/slideLayout{n}.xml.rels"),
                &layout_rels,
            )?;
        }

        package.write_part(THEME_PART, ct::OFC_THEME, &theme_xml())?;
        package.write_part("ppt/presProps.xml", ct::PML_PRES_PROPS, &pres_props_xml())?;
        package.write_part("ppt/viewProps.xml", ct::PML_VIEW_PROPS, &view_props_xml())?;
        package.write_part("ppt/tableStyles.xml", ct::PML_TABLE_STYLES, &table_styles_xml())?;

        // Slides
        for (i, slide) in deck.slides().iter().enumerate() {
            let n = i + 1;
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, layout_target(slide.layout()));
            package.write_part(
                &format!("ppt/slides/slide{n}.xml"),
                ct::PML_SLIDE,
                &slide_xml(slide)?,
            )?;
            package.write_rels(&format!("ppt/slides/_rels/slide{n}.xml.rels"), &slide_rels)?;
        }

        // Document properties
        package.write_part(
            "docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            &core_props_xml(&self.properties, deck)?,
        )?;
        package.write_part(
            "docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            &app_props_xml(deck)?,
        )?;

        let writer = package.finish()?;
        debug!("wrote pptx package with {} slides", deck.slide_count());
        Ok(writer)
    }
}

impl Deck {
    /// Serialize this deck into `.pptx` bytes with default document properties.
    pub fn to_pptx(&self) -> Result<Vec<u8>> {
        PptxWriter::new().to_bytes(self)
    }
}

/// Relative target of a layout part, as seen from a slide or the master.
fn layout_target(layout: SlideLayout) -> String {
    format!("../slideLayouts/slideLayout{}.xml", layout.number())
}

/// ZIP writer that tracks content types as parts are added.
///
/// `[Content_Types].xml` is written last, once every part is known.
struct PartWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
}

impl<W: Write + Seek> PartWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: ContentTypes::new(),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
    }

    fn write_part(&mut self, path: &str, content_type: &'static str, xml: &str) -> Result<()> {
        let partname = format!("/{path}");
        // Parts whose type matches their extension's default need no override
        if self.content_types.content_type(&partname) != Some(content_type) {
            self.content_types.add_override(partname, content_type);
        }
        self.write_entry(path, xml)
    }

    fn write_rels(&mut self, path: &str, rels: &Relationships) -> Result<()> {
        trace!("{path}: {} relationships", rels.len());
        self.write_entry(path, &rels.to_xml())
    }

    fn write_entry(&mut self, path: &str, xml: &str) -> Result<()> {
        trace!("writing part {path} ({} bytes)", xml.len());
        self.zip.start_file(path, Self::options())?;
        self.zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        let xml = self.content_types.to_xml();
        self.zip.start_file("[Content_Types].xml", Self::options())?;
        self.zip.write_all(xml.as_bytes())?;
        Ok(self.zip.finish()?)
    }
}
