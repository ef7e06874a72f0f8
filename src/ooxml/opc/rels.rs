//! Relationship parts (`*.rels`): parsing on read, serialization on write.

use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

/// A single relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub r_id: String,
    /// Relationship type URI
    pub reltype: String,
    /// Target reference, relative to the source part's directory
    pub target_ref: String,
    /// Whether the target lives outside the package (hyperlinks and the like)
    pub external: bool,
}

impl Relationship {
    /// Create an internal relationship.
    pub fn new(r_id: impl Into<String>, reltype: &str, target_ref: impl Into<String>) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.to_string(),
            target_ref: target_ref.into(),
            external: false,
        }
    }

    /// Resolve the target to a ZIP member name.
    ///
    /// `base_dir` is the directory of the source part without leading slash (`""` for the
    /// package itself, `"word"` for `word/document.xml`). Absolute targets ignore it.
    pub fn target_membername(&self, base_dir: &str) -> String {
        let joined = if let Some(absolute) = self.target_ref.strip_prefix('/') {
            absolute.to_string()
        } else if base_dir.is_empty() {
            self.target_ref.clone()
        } else {
            format!("{}/{}", base_dir, self.target_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                other => segments.push(other),
            }
        }
        segments.join("/")
    }
}

/// Parse a relationships part.
pub fn parse_rels_xml(rels_xml: &[u8]) -> Result<SmallVec<[Relationship; 8]>> {
    let mut rels = SmallVec::new();
    let mut reader = Reader::from_reader(rels_xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(attr.unescape_value()?.to_string()),
                            b"Type" => reltype = Some(attr.unescape_value()?.to_string()),
                            b"Target" => target_ref = Some(attr.unescape_value()?.to_string()),
                            b"TargetMode" => external = attr.unescape_value()? == "External",
                            _ => {},
                        }
                    }

                    if let (Some(r_id), Some(reltype), Some(target_ref)) = (r_id, reltype, target_ref)
                    {
                        rels.push(Relationship {
                            r_id,
                            reltype,
                            target_ref,
                            external,
                        });
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(format!("Rels parse error: {}", e))),
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

/// Serialize relationships into a complete `.rels` part.
pub fn generate_rels_xml(rels: &[Relationship]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}""#,
            escape_xml(&rel.r_id),
            escape_xml(&rel.reltype),
            escape_xml(&rel.target_ref)
        )?;
        if rel.external {
            xml.push_str(r#" TargetMode="External""#);
        }
        xml.push_str("/>");
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_parse_package_rels() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
    <Relationship Id="rId9" Type="http://example.com/link" Target="https://example.com" TargetMode="External"/>
</Relationships>"#;

        let rels = parse_rels_xml(xml).unwrap();
        assert_eq!(rels.len(), 3);
        assert_eq!(rels[1].r_id, "rId1");
        assert_eq!(rels[1].reltype, rt::OFFICE_DOCUMENT);
        assert_eq!(rels[1].target_ref, "word/document.xml");
        assert!(!rels[1].external);
        assert!(rels[2].external);
    }

    #[test]
    fn test_target_membername() {
        let rel = Relationship::new("rId1", rt::STYLES, "styles.xml");
        assert_eq!(rel.target_membername("word"), "word/styles.xml");

        let rel = Relationship::new("rId1", rt::OFFICE_DOCUMENT, "/word/document2.xml");
        assert_eq!(rel.target_membername(""), "word/document2.xml");

        let rel = Relationship::new("rId1", rt::STYLES, "../customXml/item1.xml");
        assert_eq!(rel.target_membername("word"), "customXml/item1.xml");
    }

    #[test]
    fn test_generate_and_reparse() {
        let rels = vec![
            Relationship::new("rId1", rt::STYLES, "styles.xml"),
            Relationship::new("rId2", rt::NUMBERING, "numbering.xml"),
        ];
        let xml = generate_rels_xml(&rels).unwrap();
        assert!(xml.starts_with("<?xml"));

        let parsed = parse_rels_xml(xml.as_bytes()).unwrap();
        assert_eq!(parsed.as_slice(), rels.as_slice());
    }
}
