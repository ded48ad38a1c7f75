/// Slide part generation.
use super::constants::{PML_NAMESPACES, XML_DECLARATION};
use super::template::{placeholder_name, write_ph};
use crate::common::xml::escape_xml;
use crate::deck::{Paragraph, PlaceholderKind, Slide, TextFrame, split_lines};
use crate::error::Result;
use std::fmt::Write as FmtWrite;

/// Generate the XML of a slide part.
///
/// Placeholders carry no geometry of their own; position and size are
/// inherited from the slide layout.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(XML_DECLARATION);
    write!(xml, "<p:sld {PML_NAMESPACES}>")?;
    xml.push_str("<p:cSld><p:spTree>");

    // Group shape properties (required); the group uses id 1
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    let layout = slide.layout();
    write_placeholder_shape(&mut xml, 2, layout.title_placeholder(), slide.title())?;
    write_placeholder_shape(&mut xml, 3, layout.body_placeholder(), slide.body())?;

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

fn write_placeholder_shape(
    xml: &mut String,
    shape_id: u32,
    kind: PlaceholderKind,
    frame: &TextFrame,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape_id,
        placeholder_name(kind, shape_id)
    )?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str("<p:nvPr>");
    write_ph(xml, kind);
    xml.push_str("</p:nvPr>");
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for paragraph in frame.paragraphs() {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    let level = paragraph.level();
    let alignment = paragraph.alignment();
    if level > 0 || alignment.is_some() {
        xml.push_str("<a:pPr");
        if level > 0 {
            write!(xml, r#" lvl="{level}""#)?;
        }
        if let Some(alignment) = alignment {
            write!(xml, r#" algn="{}""#, alignment.as_xml_value())?;
        }
        xml.push_str("/>");
    }

    let size_attr = match paragraph.font_size() {
        Some(size) => format!(r#" sz="{}""#, size.hundredths()),
        None => String::new(),
    };

    for run in paragraph.runs() {
        // Line breaks inside a run become a:br between run segments
        for (i, segment) in split_lines(run.text()).enumerate() {
            if i > 0 {
                write!(xml, r#"<a:br><a:rPr lang="en-US"{size_attr} dirty="0"/></a:br>"#)?;
            }
            if segment.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            write!(xml, r#"<a:rPr lang="en-US"{size_attr} dirty="0"/>"#)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(segment))?;
            xml.push_str("</a:r>");
        }
    }

    write!(xml, r#"<a:endParaRPr lang="en-US"{size_attr} dirty="0"/>"#)?;
    xml.push_str("</a:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FontSize;
    use crate::deck::{Alignment, TextRun};

    fn paragraph_xml(paragraph: &Paragraph) -> String {
        let mut xml = String::new();
        write_paragraph(&mut xml, paragraph).unwrap();
        xml
    }

    #[test]
    fn test_title_slide_placeholders() {
        let slide = Slide::title_slide(TextFrame::from_text("Hello"), TextFrame::from_text("World"));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 1"/>"#));
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="Subtitle 2"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert!(xml.contains("<a:t>World</a:t>"));
    }

    #[test]
    fn test_content_slide_placeholders() {
        let slide = Slide::title_and_content(TextFrame::from_text("T"), TextFrame::from_text("b"));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains(r#"name="Content Placeholder 2""#));
    }

    #[test]
    fn test_paragraph_formatting() {
        let p = Paragraph::new("A & B")
            .with_level(1)
            .with_alignment(Alignment::Center)
            .with_font_size(FontSize::from_points(24));
        assert_eq!(
            paragraph_xml(&p),
            concat!(
                r#"<a:p><a:pPr lvl="1" algn="ctr"/>"#,
                r#"<a:r><a:rPr lang="en-US" sz="2400" dirty="0"/><a:t>A &amp; B</a:t></a:r>"#,
                r#"<a:endParaRPr lang="en-US" sz="2400" dirty="0"/></a:p>"#
            )
        );
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(
            paragraph_xml(&Paragraph::empty()),
            r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#
        );
    }

    #[test]
    fn test_line_break_in_run() {
        let mut p = Paragraph::empty();
        p.push_run(TextRun::new("one\ntwo"));
        let xml = paragraph_xml(&p);
        assert!(xml.contains(r#"<a:t>one</a:t></a:r><a:br><a:rPr lang="en-US" dirty="0"/></a:br><a:r>"#));
        assert!(xml.contains("<a:t>two</a:t>"));
    }

    #[test]
    fn test_carriage_return_never_written_raw() {
        let mut p = Paragraph::empty();
        p.push_run(TextRun::new("a\r\nb\rc"));
        let xml = paragraph_xml(&p);
        assert!(!xml.contains('\r'));
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert!(xml.contains("<a:t>a</a:t>"));
        assert!(xml.contains("<a:t>c</a:t>"));
    }
}
