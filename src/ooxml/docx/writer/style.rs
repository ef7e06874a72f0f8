/// Style writer support for DOCX documents.
///
/// Generated documents carry a fixed set of built-in styles: the ones Markdown
/// conversion addresses (headings, list paragraphs) plus the defaults Word expects.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Style type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    Paragraph,
    Character,
}

impl StyleType {
    fn to_xml(self) -> &'static str {
        match self {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
        }
    }
}

/// Map a style UI name to the ID Word uses for built-in styles ("List Bullet" → "ListBullet").
pub fn style_id_from_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A mutable style definition for writing.
///
/// # Examples
///
/// ```rust
/// use mdocx::ooxml::docx::writer::MutableStyle;
///
/// let h2 = MutableStyle::heading(2);
/// assert_eq!(h2.style_id(), "Heading2");
/// assert_eq!(h2.name(), "Heading 2");
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "Heading 1")
    name: String,
    style_type: StyleType,
    is_default: bool,
    based_on: Option<String>,
    next: Option<String>,
    /// UI priority (lower = higher in the gallery)
    priority: Option<i32>,
    is_quick_style: bool,
    font_name: Option<String>,
    /// Font size in half-points (e.g., 24 = 12pt)
    font_size: Option<u32>,
    bold: bool,
    italic: bool,
    /// RGB hex color, e.g. "2F5496"
    color: Option<String>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
    /// Outline level for headings (0-based)
    outline_level: Option<u8>,
    /// Numbering instance the paragraph style is attached to
    num_id: Option<u32>,
}

impl MutableStyle {
    /// Create a new style with the given ID, name, and type.
    pub fn new(style_id: impl Into<String>, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            based_on: None,
            next: None,
            priority: None,
            is_quick_style: false,
            font_name: None,
            font_size: None,
            bold: false,
            italic: false,
            color: None,
            space_before: None,
            space_after: None,
            outline_level: None,
            num_id: None,
        }
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style_type(&self) -> StyleType {
        self.style_type
    }

    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    pub fn num_id(&self) -> Option<u32> {
        self.num_id
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;
        if let Some(ref based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }
        if let Some(ref next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, escape_xml(next))?;
        }
        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.style_type == StyleType::Paragraph {
            let has_para_props = self.space_before.is_some()
                || self.space_after.is_some()
                || self.outline_level.is_some()
                || self.num_id.is_some();

            if has_para_props {
                xml.push_str("<w:pPr>");
                if let Some(num_id) = self.num_id {
                    write!(xml, r#"<w:numPr><w:numId w:val="{}"/></w:numPr>"#, num_id)?;
                }
                if self.space_before.is_some() || self.space_after.is_some() {
                    xml.push_str("<w:spacing");
                    if let Some(before) = self.space_before {
                        write!(xml, r#" w:before="{}""#, before)?;
                    }
                    if let Some(after) = self.space_after {
                        write!(xml, r#" w:after="{}""#, after)?;
                    }
                    xml.push_str("/>");
                }
                if self.num_id.is_some() {
                    xml.push_str("<w:contextualSpacing/>");
                }
                if let Some(level) = self.outline_level {
                    write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
                }
                xml.push_str("</w:pPr>");
            }
        }

        let has_run_props = self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold
            || self.italic
            || self.color.is_some();

        if has_run_props {
            xml.push_str("<w:rPr>");
            if let Some(ref font_name) = self.font_name {
                let font = escape_xml(font_name);
                write!(
                    xml,
                    r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                    font
                )?;
            }
            if self.bold {
                xml.push_str("<w:b/><w:bCs/>");
            }
            if self.italic {
                xml.push_str("<w:i/><w:iCs/>");
            }
            if let Some(ref color) = self.color {
                write!(xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");
        Ok(())
    }

    /// The "Normal" paragraph style every other style is based on.
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.is_default = true;
        style.is_quick_style = true;
        style
    }

    /// The "Title" style (heading level 0).
    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title", StyleType::Paragraph);
        style.based_on = Some("Normal".to_string());
        style.next = Some("Normal".to_string());
        style.priority = Some(10);
        style.is_quick_style = true;
        style.font_name = Some("Calibri Light".to_string());
        style.font_size = Some(56);
        style.space_after = Some(0);
        style
    }

    /// "Heading N" for N in 1..=9.
    ///
    /// Sizes step down from 16pt to the body size; the upper three levels are blue like
    /// Word's default theme.
    pub fn heading(level: u8) -> Self {
        let level = level.clamp(1, 9);
        let mut style = Self::new(
            format!("Heading{}", level),
            format!("Heading {}", level),
            StyleType::Paragraph,
        );
        style.based_on = Some("Normal".to_string());
        style.next = Some("Normal".to_string());
        style.priority = Some(9);
        style.is_quick_style = true;
        style.font_name = Some("Calibri Light".to_string());
        style.bold = level <= 4;
        style.italic = level == 4 || level == 7;
        style.font_size = Some(match level {
            1 => 32,
            2 => 26,
            3 => 24,
            _ => 22,
        });
        style.color = match level {
            1 | 2 => Some("2F5496".to_string()),
            3 => Some("1F3763".to_string()),
            _ => None,
        };
        style.space_before = Some(if level == 1 { 480 } else { 200 });
        style.space_after = Some(0);
        style.outline_level = Some(level - 1);
        style
    }

    /// "List Bullet", attached to the bullet numbering instance.
    pub fn list_bullet(num_id: u32) -> Self {
        let mut style = Self::new("ListBullet", "List Bullet", StyleType::Paragraph);
        style.based_on = Some("Normal".to_string());
        style.priority = Some(99);
        style.num_id = Some(num_id);
        style
    }

    /// "List Number", attached to the decimal numbering instance.
    pub fn list_number(num_id: u32) -> Self {
        let mut style = Self::new("ListNumber", "List Number", StyleType::Paragraph);
        style.based_on = Some("Normal".to_string());
        style.priority = Some(99);
        style.num_id = Some(num_id);
        style
    }

    /// Default character style.
    pub fn default_paragraph_font() -> Self {
        let mut style = Self::new(
            "DefaultParagraphFont",
            "Default Paragraph Font",
            StyleType::Character,
        );
        style.is_default = true;
        style.priority = Some(1);
        style
    }
}

/// The built-in style set written into every generated document.
pub fn builtin_styles(bullet_num_id: u32, decimal_num_id: u32) -> Vec<MutableStyle> {
    let mut styles = Vec::with_capacity(14);
    styles.push(MutableStyle::normal());
    styles.push(MutableStyle::default_paragraph_font());
    styles.push(MutableStyle::title());
    styles.extend((1..=9).map(MutableStyle::heading));
    styles.push(MutableStyle::list_bullet(bullet_num_id));
    styles.push(MutableStyle::list_number(decimal_num_id));
    styles
}

/// Generate a complete styles.xml document from a list of styles.
pub fn generate_styles_xml(styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + styles.len() * 320);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}
