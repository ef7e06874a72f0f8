/// Numbering definitions (`word/numbering.xml`) for list paragraph styles.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Numbering instance ID used by the "List Bullet" style.
pub const BULLET_NUM_ID: u32 = 1;
/// Numbering instance ID used by the "List Number" style.
pub const DECIMAL_NUM_ID: u32 = 2;

/// Kind of list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet glyph
    Bullet,
    /// 1. 2. 3. ...
    Decimal,
}

impl ListKind {
    fn num_fmt(self) -> &'static str {
        match self {
            ListKind::Bullet => "bullet",
            ListKind::Decimal => "decimal",
        }
    }

    fn lvl_text(self) -> &'static str {
        match self {
            ListKind::Bullet => "\u{2022}",
            ListKind::Decimal => "%1.",
        }
    }
}

/// A single-level numbering definition bound to one numbering instance.
#[derive(Debug, Clone)]
pub struct NumberingDefinition {
    /// `w:abstractNumId`
    pub abstract_id: u32,
    /// `w:numId` referenced from paragraph styles
    pub num_id: u32,
    pub kind: ListKind,
    /// Left indent in twips; the marker hangs by 360
    pub indent_left: u32,
}

impl NumberingDefinition {
    pub fn new(abstract_id: u32, num_id: u32, kind: ListKind) -> Self {
        Self {
            abstract_id,
            num_id,
            kind,
            indent_left: 360,
        }
    }

    fn abstract_to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:abstractNum w:abstractNumId="{}"><w:multiLevelType w:val="singleLevel"/>"#,
            self.abstract_id
        )?;
        write!(
            xml,
            r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="{}"/><w:lvlText w:val="{}"/><w:lvlJc w:val="left"/>"#,
            self.kind.num_fmt(),
            escape_xml(self.kind.lvl_text())
        )?;
        write!(
            xml,
            r#"<w:pPr><w:ind w:left="{}" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>"#,
            self.indent_left
        )?;
        Ok(())
    }

    fn num_to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            self.num_id, self.abstract_id
        )?;
        Ok(())
    }
}

/// The bullet and decimal definitions used by the built-in list styles.
pub fn builtin_numbering() -> Vec<NumberingDefinition> {
    vec![
        NumberingDefinition::new(0, BULLET_NUM_ID, ListKind::Bullet),
        NumberingDefinition::new(1, DECIMAL_NUM_ID, ListKind::Decimal),
    ]
}

/// Generate a complete numbering.xml document.
///
/// All `w:abstractNum` elements must precede the `w:num` elements.
pub fn generate_numbering_xml(definitions: &[NumberingDefinition]) -> Result<String> {
    let mut xml = String::with_capacity(256 + definitions.len() * 400);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:numbering xmlns:w="{}">"#, namespace::WML_MAIN)?;

    for def in definitions {
        def.abstract_to_xml(&mut xml)?;
    }
    for def in definitions {
        def.num_to_xml(&mut xml)?;
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}
