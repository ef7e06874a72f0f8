/// Package assembly for generated documents: content types, relationships and parts.
use crate::ooxml::error::Result;
use crate::ooxml::opc::PhysPkgWriter;
use crate::ooxml::opc::constants::{content_type as ct, member, namespace, relationship_type as rt};
use crate::ooxml::opc::rels::{Relationship, generate_rels_xml};
use std::fmt::Write as FmtWrite;

use super::doc::MutableDocument;
use super::numbering::{BULLET_NUM_ID, DECIMAL_NUM_ID, builtin_numbering, generate_numbering_xml};
use super::style::{builtin_styles, generate_styles_xml};

const APPLICATION_NAME: &str = "mdocx";

/// Write every part of `doc` into a new ZIP archive and return its bytes.
pub(crate) fn write_package(doc: &MutableDocument) -> Result<Vec<u8>> {
    let mut writer = PhysPkgWriter::new();

    writer.write(member::CONTENT_TYPES, content_types_xml()?.as_bytes())?;
    writer.write(member::PACKAGE_RELS, package_rels_xml()?.as_bytes())?;
    writer.write(member::CORE_PROPERTIES, core_props_xml()?.as_bytes())?;
    writer.write(member::EXTENDED_PROPERTIES, app_props_xml()?.as_bytes())?;
    writer.write(member::DOCUMENT, doc.to_xml()?.as_bytes())?;
    writer.write(member::DOCUMENT_RELS, document_rels_xml()?.as_bytes())?;

    let styles = builtin_styles(BULLET_NUM_ID, DECIMAL_NUM_ID);
    writer.write(member::STYLES, generate_styles_xml(&styles)?.as_bytes())?;
    writer.write(
        member::NUMBERING,
        generate_numbering_xml(&builtin_numbering())?.as_bytes(),
    )?;

    writer.finish()
}

fn content_types_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;
    write!(
        xml,
        r#"<Default Extension="rels" ContentType="{}"/>"#,
        ct::OPC_RELATIONSHIPS
    )?;
    write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;

    let overrides = [
        (member::DOCUMENT, ct::WML_DOCUMENT_MAIN),
        (member::STYLES, ct::WML_STYLES),
        (member::NUMBERING, ct::WML_NUMBERING),
        (member::CORE_PROPERTIES, ct::OPC_CORE_PROPERTIES),
        (member::EXTENDED_PROPERTIES, ct::OFC_EXTENDED_PROPERTIES),
    ];
    for (membername, content_type) in overrides {
        write!(
            xml,
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            membername, content_type
        )?;
    }

    xml.push_str("</Types>");
    Ok(xml)
}

fn package_rels_xml() -> Result<String> {
    generate_rels_xml(&[
        Relationship::new("rId1", rt::OFFICE_DOCUMENT, member::DOCUMENT),
        Relationship::new("rId2", rt::CORE_PROPERTIES, member::CORE_PROPERTIES),
        Relationship::new("rId3", rt::EXTENDED_PROPERTIES, member::EXTENDED_PROPERTIES),
    ])
}

fn document_rels_xml() -> Result<String> {
    // Targets are relative to word/
    generate_rels_xml(&[
        Relationship::new("rId1", rt::STYLES, "styles.xml"),
        Relationship::new("rId2", rt::NUMBERING, "numbering.xml"),
    ])
}

fn core_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    write!(xml, "<dc:creator>{}</dc:creator>", APPLICATION_NAME)?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

fn app_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION_NAME)?;
    xml.push_str("</Properties>");
    Ok(xml)
}
