/// The `[Content_Types].xml` part.
use super::constants::{XML_DECLARATION, content_type as ct, namespace};
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

/// Maps part names to content types.
///
/// `rels` and `xml` extensions get `Default` entries; every other part is
/// listed with an `Override`. Entries are written sorted for stable output.
#[derive(Debug, Clone)]
pub struct ContentTypes {
    defaults: BTreeMap<&'static str, &'static str>,
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypes {
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels", ct::OPC_RELATIONSHIPS);
        defaults.insert("xml", ct::XML);
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register a part by its absolute part name (e.g. `/ppt/slides/slide1.xml`).
    pub fn add_override(&mut self, partname: impl Into<String>, content_type: &'static str) {
        self.overrides.insert(partname.into(), content_type);
    }

    pub fn content_type(&self, partname: &str) -> Option<&'static str> {
        if let Some(found) = self.overrides.get(partname) {
            return Some(*found);
        }
        let ext = partname.rsplit_once('.').map(|(_, ext)| ext)?;
        self.defaults.get(ext).copied()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::CONTENT_TYPES);
        for (ext, content_type) in &self.defaults {
            let _ = write!(xml, r#"<Default Extension="{ext}" ContentType="{content_type}"/>"#);
        }
        for (partname, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                content_type
            );
        }
        xml.push_str("</Types>");
        xml
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypes::new();
        cti.add_override("/ppt/slides/slide1.xml", ct::PML_SLIDE);
        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_lookup() {
        let mut cti = ContentTypes::new();
        cti.add_override("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN);
        assert_eq!(cti.content_type("/ppt/presentation.xml"), Some(ct::PML_PRESENTATION_MAIN));
        assert_eq!(cti.content_type("/_rels/.rels"), Some(ct::OPC_RELATIONSHIPS));
        assert_eq!(cti.content_type("/media/image1.png"), None);
    }
}
