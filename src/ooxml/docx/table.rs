/// Table, Row, and Cell structures read from a Word document.
use crate::ooxml::docx::paragraph::Paragraph;

/// Vertical merge state for table cells.
///
/// In OOXML, vertical merging uses the `<w:vMerge>` element:
/// - `restart`: starts a new vertical merge (first cell in the merge)
/// - `continue`: continues the merge from the cell above (no `val` attribute or `val="continue"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMergeState {
    Restart,
    Continue,
}

/// A table in a Word document.
///
/// Represents a `<w:tbl>` element. Tables contain rows, which contain cells,
/// which contain paragraphs.
///
/// ```rust,ignore
/// for table in document.tables() {
///     for (row_idx, row) in table.rows().iter().enumerate() {
///         for (col_idx, cell) in row.cells().iter().enumerate() {
///             println!("Cell [{},{}]: {}", row_idx, col_idx, cell.text());
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Get all rows in this table.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows in this table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::cell_count)
    }
}

/// A row in a table.
///
/// Cells are exposed per grid column: a cell spanning several columns appears once for
/// each of them, and a vertically merged continuation shows the cell it continues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
}

impl Row {
    /// Get the cells of this row, one per grid column.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// A cell in a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) grid_span: usize,
    pub(crate) v_merge: Option<VMergeState>,
}

impl Cell {
    /// Cell text: the text of each direct paragraph, separated by `\n`.
    ///
    /// Paragraphs of nested tables are not included.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get the direct paragraphs of this cell.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of grid columns the cell spans (`<w:gridSpan>`), at least 1.
    pub fn grid_span(&self) -> usize {
        self.grid_span.max(1)
    }

    /// Vertical merge state, if the cell takes part in a vertical merge.
    pub fn v_merge(&self) -> Option<VMergeState> {
        self.v_merge
    }
}

/// Expand the raw `<w:tc>` list of a row to one cell per grid column.
///
/// `above` is the previous, already expanded row of the same table.
pub(crate) fn expand_row(raw_cells: Vec<Cell>, above: Option<&Row>) -> Row {
    let mut cells: Vec<Cell> = Vec::with_capacity(raw_cells.len());

    for raw in raw_cells {
        let span = raw.grid_span();
        let column = cells.len();
        let cell = if raw.v_merge == Some(VMergeState::Continue) {
            above
                .and_then(|row| row.cells.get(column))
                .cloned()
                .unwrap_or(raw)
        } else {
            raw
        };
        for _ in 0..span {
            cells.push(cell.clone());
        }
    }

    Row { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::paragraph::Run;
    use smallvec::smallvec;

    fn cell(text: &str) -> Cell {
        Cell {
            paragraphs: vec![Paragraph {
                runs: smallvec![Run::new(text, false)],
                style: None,
            }],
            grid_span: 1,
            v_merge: None,
        }
    }

    #[test]
    fn test_cell_text_joins_paragraphs() {
        let mut c = cell("first");
        c.paragraphs.push(Paragraph::default());
        c.paragraphs.push(cell("third").paragraphs.remove(0));
        assert_eq!(c.text(), "first\n\nthird");
    }

    #[test]
    fn test_expand_grid_span() {
        let mut wide = cell("wide");
        wide.grid_span = 2;
        let row = expand_row(vec![wide, cell("B")], None);

        let texts: Vec<String> = row.cells().iter().map(Cell::text).collect();
        assert_eq!(texts, ["wide", "wide", "B"]);
    }

    #[test]
    fn test_expand_vertical_merge() {
        let mut top = cell("merged");
        top.v_merge = Some(VMergeState::Restart);
        let first = expand_row(vec![top, cell("x")], None);

        let mut continuation = Cell::default();
        continuation.v_merge = Some(VMergeState::Continue);
        let second = expand_row(vec![continuation, cell("y")], Some(&first));

        assert_eq!(second.cells()[0].text(), "merged");
        assert_eq!(second.cells()[1].text(), "y");
    }

    #[test]
    fn test_continue_without_row_above_keeps_own_cell() {
        let mut orphan = cell("orphan");
        orphan.v_merge = Some(VMergeState::Continue);
        let row = expand_row(vec![orphan], None);
        assert_eq!(row.cells()[0].text(), "orphan");
    }

    #[test]
    fn test_table_dimensions() {
        let table = Table {
            rows: vec![expand_row(vec![cell("a"), cell("b")], None)],
        };
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
        assert_eq!(Table::default().column_count(), 0);
    }
}
