use super::{Cell, RawSheet};
use crate::core::ParseError;
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

pub(super) fn read_first_sheet(bytes: &[u8]) -> Result<RawSheet, ParseError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ParseError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::NoWorksheet)?
        .map_err(|e| ParseError::Workbook(e.to_string()))?;

    // calamine trims the range to the first used cell; restore absolute positions.
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let lead_cols = first_col as usize;

    let mut rows: Vec<Vec<Cell>> = (0..first_row).map(|_| Vec::new()).collect();
    for r in range.rows() {
        let mut row = vec![Cell::Empty; lead_cols];
        row.extend(r.iter().map(cell_from_data));
        rows.push(row);
    }

    Ok(RawSheet::from_rows(rows))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Float(f) => Cell::from(*f),
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => Cell::Number(*i as f64),
        other => Cell::from(other.to_string()),
    }
}
