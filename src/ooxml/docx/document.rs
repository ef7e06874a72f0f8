//! Document - the main API for reading Word document content.
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::parts::Body;
use crate::ooxml::docx::table::Table;

/// A Word document.
///
/// Gives ordered access to the body-level paragraphs and tables of a package's main
/// document part.
///
/// # Examples
///
/// ```rust,no_run
/// use mdocx::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// for table in doc.tables() {
///     for row in table.rows() {
///         let cells: Vec<String> = row.cells().iter().map(|c| c.text()).collect();
///         println!("{}", cells.join(" | "));
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    body: Body,
}

impl Document {
    #[inline]
    pub(crate) fn new(body: Body) -> Self {
        Self { body }
    }

    /// All paragraph text, one paragraph per line.
    pub fn text(&self) -> String {
        self.body
            .paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get all body-level paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.body.paragraphs
    }

    /// Get all body-level tables in document order.
    pub fn tables(&self) -> &[Table] {
        &self.body.tables
    }

    pub fn paragraph_count(&self) -> usize {
        self.body.paragraphs.len()
    }

    pub fn table_count(&self) -> usize {
        self.body.tables.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::ooxml::docx::Package;
    use crate::ooxml::docx::writer::MutableDocument;

    #[test]
    fn test_round_trip_through_writer() {
        let mut doc = MutableDocument::new();
        doc.add_heading("Title", 2).unwrap();
        doc.add_paragraph_with_text("");
        let para = doc.add_paragraph();
        para.add_run_with_text("This is ");
        para.add_run_with_text("bold").bold(true);
        para.add_run_with_text(" and plain.");
        doc.add_paragraph_with_text("item one").set_style("List Bullet");

        let pkg = Package::from_bytes(doc.to_bytes().unwrap()).unwrap();
        let read = pkg.document().unwrap();

        assert_eq!(read.paragraph_count(), 4);
        assert_eq!(read.table_count(), 0);
        assert_eq!(read.paragraphs()[0].style(), Some("Heading2"));
        assert_eq!(read.paragraphs()[0].text(), "Title");
        assert_eq!(read.paragraphs()[1].text(), "");

        let runs = read.paragraphs()[2].runs();
        assert_eq!(runs.len(), 3);
        assert!(runs[1].bold());
        assert_eq!(runs[1].text(), "bold");

        assert_eq!(read.paragraphs()[3].style(), Some("ListBullet"));
        assert_eq!(read.text(), "Title\n\nThis is bold and plain.\nitem one");
    }
}
