//! Package implementation for Word documents.
use crate::ooxml::docx::document::Document;
use crate::ooxml::docx::parts::DocumentPart;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PhysPkgReader;
use crate::ooxml::opc::constants::member;
use crate::ooxml::opc::rels::parse_rels_xml;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// A Word (.docx) package.
///
/// This is the main entry point for reading Word documents. The main document part is
/// located through the package relationships and loaded when the package is opened.
///
/// # Examples
///
/// ```rust,no_run
/// use mdocx::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
/// for para in doc.paragraphs() {
///     println!("{}", para.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// Member name of the main document part (usually `word/document.xml`)
    main_part: String,
    /// The main document part
    part: DocumentPart,
}

impl Package {
    /// Open a .docx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a .docx package from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }

    /// Create a .docx package from a reader.
    ///
    /// Fails with [`OoxmlError::Zip`] if the data is not a ZIP archive and with
    /// [`OoxmlError::PartNotFound`] if the archive has no main document part.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut phys = PhysPkgReader::new(reader)?;
        let main_part = Self::main_part_name(&mut phys)?;

        let xml = phys.blob_for(&main_part).map_err(|e| match e {
            OoxmlError::PartNotFound(name) => {
                OoxmlError::PartNotFound(format!("main document part: {}", name))
            },
            other => other,
        })?;

        tracing::debug!(part = %main_part, bytes = xml.len(), "loaded main document part");
        Ok(Self {
            main_part,
            part: DocumentPart::new(xml),
        })
    }

    /// Find the main part through the `officeDocument` package relationship.
    fn main_part_name<R: Read + Seek>(phys: &mut PhysPkgReader<R>) -> Result<String> {
        let Some(rels_xml) = phys.optional_blob_for(member::PACKAGE_RELS)? else {
            return Ok(member::DOCUMENT.to_string());
        };

        // Transitional and Strict conformance use different namespaces, same suffix
        parse_rels_xml(&rels_xml)?
            .iter()
            .find(|rel| !rel.external && rel.reltype.ends_with("/officeDocument"))
            .map(|rel| rel.target_membername(""))
            .ok_or_else(|| {
                OoxmlError::PartNotFound("main document part: no officeDocument relationship".to_string())
            })
    }

    /// Get the main document.
    ///
    /// Parses the body on each call.
    pub fn document(&self) -> Result<Document> {
        Ok(Document::new(self.part.body()?))
    }

    /// Member name of the main document part.
    #[inline]
    pub fn main_part(&self) -> &str {
        &self.main_part
    }

    /// Raw XML of the main document part.
    #[inline]
    pub fn document_xml(&self) -> &[u8] {
        self.part.xml_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn zip_with(members: &[(&str, &str)]) -> Vec<u8> {
        let mut zip_data = Vec::new();
        {
            let mut writer = ZipWriter::new(Cursor::new(&mut zip_data));
            let options = SimpleFileOptions::default();
            for (name, content) in members {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        zip_data
    }

    const BODY: &str = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body><w:p><w:r><w:t>Test</w:t></w:r></w:p></w:body>
</w:document>"#;

    #[test]
    fn test_main_part_from_relationships() {
        let data = zip_with(&[
            (
                "_rels/.rels",
                r#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document2.xml"/>
</Relationships>"#,
            ),
            ("word/document2.xml", BODY),
        ]);

        let pkg = Package::from_bytes(data).unwrap();
        assert_eq!(pkg.main_part(), "word/document2.xml");
        let doc = pkg.document().unwrap();
        assert_eq!(doc.paragraphs()[0].text(), "Test");
    }

    #[test]
    fn test_main_part_default_without_rels() {
        let data = zip_with(&[("word/document.xml", BODY)]);
        let pkg = Package::from_bytes(data).unwrap();
        assert_eq!(pkg.main_part(), "word/document.xml");
    }

    #[test]
    fn test_missing_main_part() {
        let data = zip_with(&[("docProps/app.xml", "<Properties/>")]);
        assert!(matches!(
            Package::from_bytes(data),
            Err(OoxmlError::PartNotFound(msg)) if msg.contains("word/document.xml")
        ));
    }

    #[test]
    fn test_not_a_docx() {
        assert!(matches!(
            Package::from_bytes(b"# just markdown".to_vec()),
            Err(OoxmlError::Zip(_))
        ));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Package::open(dir.path().join("absent.docx"));
        assert!(matches!(result, Err(OoxmlError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
