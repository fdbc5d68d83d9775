//! The matrix: ordered rows of text cells.
//!
//! A matrix carries no types and no schema. Row 0 is only read as a header
//! by the adapters that want one (JSON, SQL, HTML output); nothing here
//! enforces it, and rows may have different lengths.

/// A single cell. Always text, possibly empty.
pub type Cell = String;

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// The intermediate form shared by every reader and writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matrix from already-built rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row 0, when read as field names.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Every row after the header.
    pub fn records(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl<R, S> From<Vec<R>> for Matrix
where
    R: IntoIterator<Item = S>,
    S: Into<Cell>,
{
    fn from(rows: Vec<R>) -> Self {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl FromIterator<Row> for Matrix {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
