//! Sheet cleaning: boilerplate, empty columns, header promotion, incomplete rows,
//! weight coercion and identifier columns.

use std::collections::HashMap;

use super::layout::{RequiredColumns, SheetLayout};
use super::model::{HoldingRecord, HoldingsTable};
use super::preamble;
use crate::core::ParseError;
use crate::sheet::{Cell, RawSheet};

/// Cleans a raw holdings sheet into a table tagged with `index_label`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the sheet is too short, the header row is
/// malformed or misses an expected column, or a weight cell is neither numeric
/// nor the zero sentinel.
#[tracing::instrument(skip(sheet, layout), err, fields(rows = sheet.height()))]
pub fn clean(
    sheet: &RawSheet,
    layout: &SheetLayout,
    index_label: &str,
) -> Result<HoldingsTable, ParseError> {
    let header_row = layout.boilerplate_rows;
    if sheet.height() <= header_row {
        return Err(ParseError::TooFewRows {
            expected: header_row + 1,
            found: sheet.height(),
        });
    }
    let body = &sheet.rows()[header_row..];

    // Columns that hold anything at all below the boilerplate.
    let kept: Vec<usize> = (0..sheet.width())
        .filter(|&c| body.iter().any(|r| !r[c].is_empty()))
        .collect();
    tracing::debug!(
        dropped = sheet.width() - kept.len(),
        "removed empty columns"
    );

    let columns = promote_header(&body[0], &kept)?;
    let col = |label: &str| {
        columns
            .get(label)
            .copied()
            .ok_or_else(|| ParseError::MissingColumn(label.to_string()))
    };
    for expected in &layout.expected_headers {
        col(expected)?;
    }
    let name = col(&layout.name_column)?;
    let ticker = col(&layout.ticker_column)?;
    let sector = col(&layout.sector_column)?;
    let currency = col(&layout.currency_column)?;
    let weight = col(&layout.weight_column)?;

    let mapped = [
        &layout.name_column,
        &layout.ticker_column,
        &layout.sector_column,
        &layout.currency_column,
        &layout.weight_column,
    ];
    let mut unknown: Vec<(&String, usize)> = columns
        .iter()
        .filter(|(label, _)| !mapped.contains(label) && !layout.dropped_columns.contains(*label))
        .map(|(label, &c)| (label, c))
        .collect();
    unknown.sort_unstable_by_key(|&(_, c)| c);
    if let Some(&(label, _)) = unknown.first() {
        if !layout.allow_unknown_columns {
            return Err(ParseError::UnexpectedColumn(label.clone()));
        }
        for (label, _) in &unknown {
            tracing::warn!(column = %label, "unexpected column in holdings sheet, ignoring");
        }
    }

    let required: Vec<usize> = match &layout.required_columns {
        RequiredColumns::All => kept.clone(),
        RequiredColumns::Only(labels) => labels.iter().map(|l| col(l)).collect::<Result<_, _>>()?,
    };

    let mut records = Vec::with_capacity(body.len().saturating_sub(1));
    let mut incomplete = 0usize;
    for (offset, row) in body.iter().enumerate().skip(1) {
        if required.iter().any(|&c| row[c].is_empty()) {
            incomplete += 1;
            continue;
        }
        let text = |c: usize| row[c].text().map(|t| t.into_owned()).unwrap_or_default();
        records.push(HoldingRecord {
            name: text(name),
            ticker: text(ticker),
            sector: text(sector),
            weight_percent: coerce_weight(&row[weight], &layout.zero_weight_token, header_row + offset)?,
            reweight_percent: None,
            local_currency: text(currency),
            index_label: index_label.to_string(),
        });
    }
    tracing::debug!(kept = records.len(), incomplete, "cleaned holdings rows");

    Ok(HoldingsTable::new(
        index_label,
        preamble::read_metadata(sheet, layout.boilerplate_rows),
        records,
    ))
}

/// Maps header labels of the kept columns to their sheet column.
fn promote_header(row: &[Cell], kept: &[usize]) -> Result<HashMap<String, usize>, ParseError> {
    let mut columns = HashMap::with_capacity(kept.len());
    for (position, &c) in kept.iter().enumerate() {
        let label = row[c]
            .text()
            .ok_or(ParseError::BlankHeader { column: position })?
            .into_owned();
        if columns.insert(label.clone(), c).is_some() {
            return Err(ParseError::DuplicateHeader(label));
        }
    }
    Ok(columns)
}

/// Reads a weight cell; the sentinel reads as zero, anything else must be a finite number.
fn coerce_weight(cell: &Cell, zero_token: &str, row: usize) -> Result<f64, ParseError> {
    let invalid = |value: String| ParseError::InvalidWeight { row, value };
    match cell {
        Cell::Number(n) if n.is_finite() => Ok(*n),
        Cell::Number(n) => Err(invalid(n.to_string())),
        Cell::Text(t) if t == zero_token => Ok(0.0),
        Cell::Text(t) => t
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| invalid(t.clone())),
        Cell::Empty => Err(invalid(String::new())),
    }
}
