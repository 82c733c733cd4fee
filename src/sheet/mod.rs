//! Untyped 2-D view of a spreadsheet, before any holdings semantics are applied.

mod xlsx;

use crate::core::ParseError;
use std::borrow::Cow;

/// One spreadsheet cell as read from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value, or whitespace only.
    Empty,
    /// A text value (trimmed).
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl Cell {
    /// `true` for [`Cell::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The cell rendered as text; `None` when empty.
    ///
    /// Whole numbers render without a fractional part so numeric tickers and
    /// codes read the way the sheet shows them.
    #[must_use]
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Empty => None,
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(Cow::Owned(format!("{n:.0}")))
            }
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            Self::Empty
        } else {
            Self::Text(t.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        if n.is_nan() { Self::Empty } else { Self::Number(n) }
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// A rectangular grid of cells; every row has the same width.
///
/// Row indices are absolute sheet positions: leading blank rows are kept so
/// that layout offsets count from the top of the sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSheet {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl RawSheet {
    /// Builds a sheet from row-major cells, padding short rows with empties.
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for r in &mut rows {
            r.resize(width, Cell::Empty);
        }
        Self { rows, width }
    }

    /// Reads the first worksheet of an xlsx workbook.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Workbook`] if the bytes are not a readable workbook and
    /// [`ParseError::NoWorksheet`] if it holds no sheet.
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        xlsx::read_first_sheet(bytes)
    }

    /// Number of rows, blank rows included.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
