/// Relationship parts (`*.rels`).
use super::constants::{XML_DECLARATION, namespace};
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

/// The relationships of one source part, numbered `rId1`, `rId2`, ... in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its rId.
    pub fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target: target.into(),
        });
        r_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::RELATIONSHIPS);
        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.r_id,
                rel.reltype,
                escape_xml(&rel.target)
            );
        }
        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::constants::relationship_type as rt;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "../theme/theme1.xml");
        let xml = rels.to_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>"#
        ));
        assert!(xml.ends_with("</Relationships>"));
    }
}
