//! DocumentPart - the main document.xml part of a Word document.
use crate::ooxml::docx::paragraph::{Paragraph, Run};
use crate::ooxml::docx::table::{Cell, Row, Table, VMergeState, expand_row};
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// The main document part of a Word document (`/word/document.xml`).
pub struct DocumentPart {
    xml: Vec<u8>,
}

/// Block content of the document body, split by kind.
///
/// Only blocks that are direct children of `<w:body>` are kept; paragraphs inside
/// content controls, text boxes and nested tables are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
}

impl DocumentPart {
    pub fn new(xml: Vec<u8>) -> Self {
        Self { xml }
    }

    /// Get the XML bytes of the document.
    #[inline]
    pub fn xml_bytes(&self) -> &[u8] {
        &self.xml
    }

    /// Parse the body into paragraphs and tables.
    pub fn body(&self) -> Result<Body> {
        BodyParser::default().parse(&self.xml)
    }
}

/// Widest table grid Word produces; larger `w:gridSpan` values are clamped to it.
const MAX_GRID_SPAN: usize = 63;

/// Elements the parser tracks; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Body,
    Paragraph,
    ParagraphProps,
    Hyperlink,
    /// `true` when the run belongs to the enclosing paragraph's own text
    Run(bool),
    RunProps,
    Text,
    Table,
    Row,
    Cell,
    CellProps,
    Other,
}

#[derive(Default)]
struct TableBuilder {
    rows: Vec<Row>,
    raw_cells: Vec<Cell>,
    cell: Option<Cell>,
}

/// Streaming state machine over `word/document.xml`.
#[derive(Default)]
struct BodyParser {
    stack: Vec<Tag>,
    paragraphs: Vec<Paragraph>,
    open_runs: Vec<Option<Run>>,
    tables: Vec<TableBuilder>,
    body: Body,
}

impl BodyParser {
    fn parse(mut self, xml: &[u8]) -> Result<Body> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => self.start(&e)?,
                Ok(Event::Empty(e)) => {
                    self.start(&e)?;
                    self.end();
                },
                Ok(Event::End(_)) => self.end(),
                Ok(Event::Text(e)) if self.capturing_text() => {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|err| OoxmlError::Xml(format!("Invalid UTF-8 in text: {}", err)))?;
                    self.push_text(text);
                },
                Ok(Event::GeneralRef(e)) if self.capturing_text() => {
                    let resolved = resolve_entity(&e).ok_or_else(|| {
                        OoxmlError::Xml(format!("Unknown entity: &{};", String::from_utf8_lossy(&e)))
                    })?;
                    self.push_text(resolved.encode_utf8(&mut [0; 4]));
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        tracing::debug!(
            paragraphs = self.body.paragraphs.len(),
            tables = self.body.tables.len(),
            "parsed document body"
        );
        Ok(self.body)
    }

    fn parent(&self) -> Option<Tag> {
        self.stack.last().copied()
    }

    fn grandparent(&self) -> Option<Tag> {
        self.stack.len().checked_sub(2).map(|i| self.stack[i])
    }

    /// Inside `<w:t>` of a run that counts toward the paragraph text.
    fn capturing_text(&self) -> bool {
        self.parent() == Some(Tag::Text) && self.grandparent() == Some(Tag::Run(true))
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Some(run)) = self.open_runs.last_mut() {
            run.text.push_str(text);
        }
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let parent = self.parent();
        let tag = match e.local_name().as_ref() {
            b"body" => Tag::Body,
            b"p" => {
                self.paragraphs.push(Paragraph::default());
                self.open_runs.push(None);
                Tag::Paragraph
            },
            b"pPr" if parent == Some(Tag::Paragraph) => Tag::ParagraphProps,
            b"pStyle" if parent == Some(Tag::ParagraphProps) => {
                if let Some(para) = self.paragraphs.last_mut() {
                    para.style = attr_value(e, b"val")?;
                }
                Tag::Other
            },
            b"hyperlink" if parent == Some(Tag::Paragraph) => Tag::Hyperlink,
            b"r" => {
                let counted = parent == Some(Tag::Paragraph)
                    || (parent == Some(Tag::Hyperlink)
                        && self.grandparent() == Some(Tag::Paragraph));
                if counted && let Some(slot) = self.open_runs.last_mut() {
                    *slot = Some(Run::default());
                }
                Tag::Run(counted)
            },
            b"rPr" if parent == Some(Tag::Run(true)) => Tag::RunProps,
            b"b" if parent == Some(Tag::RunProps) => {
                let on = attr_value(e, b"val")?.is_none_or(|v| is_on(&v));
                if let Some(Some(run)) = self.open_runs.last_mut() {
                    run.bold = on;
                }
                Tag::Other
            },
            b"t" if parent == Some(Tag::Run(true)) => Tag::Text,
            b"tab" | b"ptab" if parent == Some(Tag::Run(true)) => {
                self.push_text("\t");
                Tag::Other
            },
            b"br" if parent == Some(Tag::Run(true)) => {
                let kind = attr_value(e, b"type")?;
                if kind.as_deref().is_none_or(|k| k == "textWrapping") {
                    self.push_text("\n");
                }
                Tag::Other
            },
            b"cr" if parent == Some(Tag::Run(true)) => {
                self.push_text("\n");
                Tag::Other
            },
            b"noBreakHyphen" if parent == Some(Tag::Run(true)) => {
                self.push_text("-");
                Tag::Other
            },
            b"tbl" => {
                self.tables.push(TableBuilder::default());
                Tag::Table
            },
            b"tr" if parent == Some(Tag::Table) => {
                if let Some(table) = self.tables.last_mut() {
                    table.raw_cells.clear();
                }
                Tag::Row
            },
            b"tc" if parent == Some(Tag::Row) => {
                if let Some(table) = self.tables.last_mut() {
                    table.cell = Some(Cell::default());
                }
                Tag::Cell
            },
            b"tcPr" if parent == Some(Tag::Cell) => Tag::CellProps,
            b"gridSpan" if parent == Some(Tag::CellProps) => {
                let span = attr_value(e, b"val")?
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(1)
                    .clamp(1, MAX_GRID_SPAN);
                if let Some(cell) = self.current_cell_mut() {
                    cell.grid_span = span;
                }
                Tag::Other
            },
            b"vMerge" if parent == Some(Tag::CellProps) => {
                let state = match attr_value(e, b"val")?.as_deref() {
                    Some("restart") => VMergeState::Restart,
                    _ => VMergeState::Continue,
                };
                if let Some(cell) = self.current_cell_mut() {
                    cell.v_merge = Some(state);
                }
                Tag::Other
            },
            _ => Tag::Other,
        };
        self.stack.push(tag);
        Ok(())
    }

    fn end(&mut self) {
        let Some(tag) = self.stack.pop() else {
            return;
        };
        let parent = self.parent();

        match tag {
            Tag::Run(true) => {
                if let Some(slot) = self.open_runs.last_mut()
                    && let Some(run) = slot.take()
                    && let Some(para) = self.paragraphs.last_mut()
                {
                    para.runs.push(run);
                }
            },
            Tag::Paragraph => {
                self.open_runs.pop();
                let Some(para) = self.paragraphs.pop() else {
                    return;
                };
                match parent {
                    Some(Tag::Body) => self.body.paragraphs.push(para),
                    Some(Tag::Cell) => {
                        if let Some(cell) = self.current_cell_mut() {
                            cell.paragraphs.push(para);
                        }
                    },
                    _ => {},
                }
            },
            Tag::Cell => {
                if let Some(table) = self.tables.last_mut()
                    && let Some(cell) = table.cell.take()
                {
                    table.raw_cells.push(cell);
                }
            },
            Tag::Row => {
                if let Some(table) = self.tables.last_mut() {
                    let raw_cells = std::mem::take(&mut table.raw_cells);
                    let row = expand_row(raw_cells, table.rows.last());
                    table.rows.push(row);
                }
            },
            Tag::Table => {
                if let Some(table) = self.tables.pop()
                    && parent == Some(Tag::Body)
                {
                    self.body.tables.push(Table { rows: table.rows });
                }
            },
            _ => {},
        }
    }

    fn current_cell_mut(&mut self) -> Option<&mut Cell> {
        self.tables.last_mut().and_then(|t| t.cell.as_mut())
    }
}

/// Read an attribute by local name, unescaped.
fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| OoxmlError::Xml(err.to_string()))?;
        if attr.key.local_name().as_ref() == local {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// OOXML on/off values: absent or anything but an explicit "off" means on.
fn is_on(value: &str) -> bool {
    !matches!(value, "0" | "false" | "off")
}

/// Resolve a character or predefined entity reference (without `&` and `;`).
fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => {
            let digits = std::str::from_utf8(hex).ok()?;
            char::from_u32(u32::from_str_radix(digits, 16).ok()?)
        },
        [b'#', dec @ ..] => {
            let digits = std::str::from_utf8(dec).ok()?;
            char::from_u32(digits.parse().ok()?)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Body {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        DocumentPart::new(xml.into_bytes()).body().unwrap()
    }

    #[test]
    fn test_paragraph_text_and_style() {
        let body = parse(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p><w:p/>"#,
        );
        assert_eq!(body.paragraphs.len(), 2);
        assert_eq!(body.paragraphs[0].text(), "Title");
        assert_eq!(body.paragraphs[0].style(), Some("Heading2"));
        assert_eq!(body.paragraphs[1].text(), "");
    }

    #[test]
    fn test_bold_runs() {
        let body = parse(
            r#"<w:p><w:r><w:t xml:space="preserve">This is </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r><w:r><w:rPr><w:b w:val="0"/></w:rPr><w:t xml:space="preserve"> and plain.</w:t></w:r></w:p>"#,
        );
        let runs = body.paragraphs[0].runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text(), "This is ");
        assert!(!runs[0].bold());
        assert!(runs[1].bold());
        assert!(!runs[2].bold());
        assert_eq!(body.paragraphs[0].text(), "This is bold and plain.");
    }

    #[test]
    fn test_tabs_breaks_and_hyperlinks() {
        let body = parse(
            r#"<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t><w:br w:type="page"/></w:r><w:hyperlink w:anchor="x"><w:r><w:t>link</w:t></w:r></w:hyperlink></w:p>"#,
        );
        assert_eq!(body.paragraphs[0].text(), "a\tb\nclink");
    }

    #[test]
    fn test_entities_resolved() {
        let body = parse(r#"<w:p><w:r><w:t>Tom &amp; Jerry &lt;3 &#169; &#x2022;</w:t></w:r></w:p>"#);
        assert_eq!(body.paragraphs[0].text(), "Tom & Jerry <3 \u{a9} \u{2022}");
    }

    #[test]
    fn test_deleted_and_field_text_ignored() {
        let body = parse(
            r#"<w:p><w:r><w:delText>gone</w:delText></w:r><w:r><w:instrText>PAGE</w:instrText></w:r><w:r><w:t>kept</w:t></w:r></w:p>"#,
        );
        assert_eq!(body.paragraphs[0].text(), "kept");
    }

    #[test]
    fn test_tables_separate_from_paragraphs() {
        let body = parse(
            r#"<w:p><w:r><w:t>before</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc><w:tc><w:p/></w:tc><w:tc><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>after</w:t></w:r></w:p>"#,
        );
        let texts: Vec<String> = body.paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(texts, ["before", "after"]);

        assert_eq!(body.tables.len(), 1);
        let cells: Vec<String> = body.tables[0].rows()[0]
            .cells()
            .iter()
            .map(Cell::text)
            .collect();
        assert_eq!(cells, ["A", "", "B"]);
    }

    #[test]
    fn test_nested_table_not_in_cell_text() {
        let body = parse(
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>outer</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p/></w:tc></w:tr></w:tbl>"#,
        );
        assert_eq!(body.tables.len(), 1);
        assert_eq!(body.tables[0].rows()[0].cells()[0].text(), "outer\n");
    }

    #[test]
    fn test_grid_span_and_vmerge() {
        let body = parse(concat!(
            r#"<w:tbl>"#,
            r#"<w:tr><w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p><w:r><w:t>Wide</w:t></w:r></w:p></w:tc>"#,
            r#"<w:tc><w:tcPr><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>Tall</w:t></w:r></w:p></w:tc></w:tr>"#,
            r#"<w:tr><w:tc><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>y</w:t></w:r></w:p></w:tc>"#,
            r#"<w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc></w:tr>"#,
            r#"</w:tbl>"#,
        ));
        let rows = body.tables[0].rows();
        let first: Vec<String> = rows[0].cells().iter().map(Cell::text).collect();
        let second: Vec<String> = rows[1].cells().iter().map(Cell::text).collect();
        assert_eq!(first, ["Wide", "Wide", "Tall"]);
        assert_eq!(second, ["x", "y", "Tall"]);
    }

    #[test]
    fn test_grid_span_clamped() {
        let body = parse(concat!(
            r#"<w:tbl><w:tr>"#,
            r#"<w:tc><w:tcPr><w:gridSpan w:val="4000000000"/></w:tcPr><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc>"#,
            r#"<w:tc><w:tcPr><w:gridSpan w:val="0"/></w:tcPr><w:p><w:r><w:t>b</w:t></w:r></w:p></w:tc>"#,
            r#"</w:tr></w:tbl>"#,
        ));
        let cells = body.tables[0].rows()[0].cells();
        assert_eq!(cells.len(), MAX_GRID_SPAN + 1);
        assert_eq!(cells[MAX_GRID_SPAN].text(), "b");
    }

    #[test]
    fn test_content_control_paragraphs_skipped() {
        let body = parse(
            r#"<w:sdt><w:sdtContent><w:p><w:r><w:t>hidden</w:t></w:r></w:p></w:sdtContent></w:sdt><w:p><w:r><w:t>shown</w:t></w:r></w:p>"#,
        );
        assert_eq!(body.paragraphs.len(), 1);
        assert_eq!(body.paragraphs[0].text(), "shown");
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let part = DocumentPart::new(b"<w:document><w:body><w:p></w:body>".to_vec());
        assert!(matches!(part.body(), Err(OoxmlError::Xml(_))));
    }
}
