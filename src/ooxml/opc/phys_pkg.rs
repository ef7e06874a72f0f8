//! Physical access to an OPC package (the ZIP container behind a `.docx`).
//!
//! Reading loads members on demand from any `Read + Seek` source; writing builds the
//! archive in memory with Deflate compression and hands back the finished bytes.

use crate::ooxml::error::{OoxmlError, Result};
use std::io::{Cursor, Read, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Largest member accepted by [`PhysPkgReader::blob_for`] unless overridden.
pub const DEFAULT_PART_LIMIT: u64 = 256 * 1024 * 1024;

// Initial buffer size; the size declared in the archive is not trusted
const INITIAL_BLOB_CAPACITY: u64 = 64 * 1024;

/// Physical package reader that provides access to the members of a ZIP-based package.
pub struct PhysPkgReader<R: Read + Seek> {
    archive: ZipArchive<R>,
    part_limit: u64,
}

impl<R: Read + Seek> PhysPkgReader<R> {
    /// Open a package over a seekable reader.
    ///
    /// Fails with [`OoxmlError::Zip`] when the data is not a ZIP archive.
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self {
            archive,
            part_limit: DEFAULT_PART_LIMIT,
        })
    }

    /// Set the largest member size, in uncompressed bytes, that may be read.
    pub fn with_part_limit(mut self, limit: u64) -> Self {
        self.part_limit = limit;
        self
    }

    /// Get the binary content of a member by its name (e.g. `word/document.xml`).
    ///
    /// Fails with [`OoxmlError::InvalidFormat`] when the member inflates past the part
    /// limit.
    pub fn blob_for(&mut self, membername: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(membername).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => OoxmlError::PartNotFound(membername.to_string()),
            other => OoxmlError::from(other),
        })?;

        let mut blob = Vec::with_capacity(file.size().min(INITIAL_BLOB_CAPACITY) as usize);
        (&mut file).take(self.part_limit.saturating_add(1)).read_to_end(&mut blob)?;
        if blob.len() as u64 > self.part_limit {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} exceeds {} bytes",
                membername, self.part_limit
            )));
        }
        Ok(blob)
    }

    /// Like [`blob_for`](Self::blob_for), but a missing member is `None` instead of an error.
    pub fn optional_blob_for(&mut self, membername: &str) -> Result<Option<Vec<u8>>> {
        match self.blob_for(membername) {
            Ok(blob) => Ok(Some(blob)),
            Err(OoxmlError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, membername: &str) -> bool {
        self.archive.file_names().any(|name| name == membername)
    }

    /// Number of members in the package.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the package has no members.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

/// Physical package writer that collects members into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::with_capacity(16 * 1024))),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Write a member with Deflate compression.
    pub fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.archive.start_file(membername, self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        writer.write("word/document.xml", b"<w:document/>").unwrap();
        writer.write("_rels/.rels", b"<Relationships/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.len(), 2);
        assert!(reader.contains("_rels/.rels"));
        assert_eq!(reader.blob_for("word/document.xml").unwrap(), b"<w:document/>");
    }

    #[test]
    fn test_missing_member() {
        let mut writer = PhysPkgWriter::new();
        writer.write("a.xml", b"<a/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            reader.blob_for("b.xml"),
            Err(OoxmlError::PartNotFound(name)) if name == "b.xml"
        ));
        assert!(reader.optional_blob_for("b.xml").unwrap().is_none());
    }

    #[test]
    fn test_part_limit() {
        let mut writer = PhysPkgWriter::new();
        writer.write("word/document.xml", &[b'x'; 100]).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(Cursor::new(bytes.clone()))
            .unwrap()
            .with_part_limit(10);
        assert!(matches!(
            reader.blob_for("word/document.xml"),
            Err(OoxmlError::InvalidFormat(msg)) if msg.contains("word/document.xml")
        ));

        let mut reader = PhysPkgReader::new(Cursor::new(bytes)).unwrap().with_part_limit(100);
        assert_eq!(reader.blob_for("word/document.xml").unwrap().len(), 100);
    }

    #[test]
    fn test_declared_size_is_not_trusted() {
        let data = b"<w:document/>";
        let archive = zip64_with_declared_size("word/document.xml", data, 1 << 62);
        let mut reader = PhysPkgReader::new(Cursor::new(archive)).unwrap();

        match reader.blob_for("word/document.xml") {
            Ok(blob) => assert_eq!(blob, data),
            Err(e) => assert!(!matches!(e, OoxmlError::PartNotFound(_)), "{e}"),
        }
    }

    #[test]
    fn test_not_a_zip() {
        let result = PhysPkgReader::new(Cursor::new(b"plain text, not a zip".to_vec()));
        assert!(matches!(result, Err(OoxmlError::Zip(_))));
    }

    fn crc32(data: &[u8]) -> u32 {
        let mut crc = 0xFFFF_FFFFu32;
        for &byte in data {
            crc ^= byte as u32;
            for _ in 0..8 {
                let mask = (crc & 1).wrapping_neg();
                crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
            }
        }
        !crc
    }

    /// A single stored member whose central directory entry carries a zip64 extra field
    /// declaring `declared` uncompressed bytes.
    pub(crate) fn zip64_with_declared_size(name: &str, data: &[u8], declared: u64) -> Vec<u8> {
        let crc = crc32(data);
        let len = data.len() as u32;
        let mut out = Vec::new();

        // local file header with the real sizes
        out.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
        out.extend_from_slice(&45u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // flags
        out.extend_from_slice(&0u16.to_le_bytes()); // stored
        out.extend_from_slice(&0u16.to_le_bytes()); // time
        out.extend_from_slice(&0x21u16.to_le_bytes()); // date
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(data);

        let cd_offset = out.len() as u32;
        out.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
        out.extend_from_slice(&45u16.to_le_bytes()); // made by
        out.extend_from_slice(&45u16.to_le_bytes()); // needed
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0x21u16.to_le_bytes());
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&u32::MAX.to_le_bytes()); // compressed, in extra
        out.extend_from_slice(&u32::MAX.to_le_bytes()); // uncompressed, in extra
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&20u16.to_le_bytes()); // extra length
        out.extend_from_slice(&0u16.to_le_bytes()); // comment length
        out.extend_from_slice(&0u16.to_le_bytes()); // disk
        out.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
        out.extend_from_slice(&0u32.to_le_bytes()); // external attributes
        out.extend_from_slice(&0u32.to_le_bytes()); // local header offset
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&0x0001u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(&declared.to_le_bytes());
        out.extend_from_slice(&(len as u64).to_le_bytes());
        let cd_size = out.len() as u32 - cd_offset;

        out.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&cd_size.to_le_bytes());
        out.extend_from_slice(&cd_offset.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out
    }
}
