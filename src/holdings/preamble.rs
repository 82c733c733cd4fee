use chrono::NaiveDate;

use super::model::FundMetadata;
use crate::sheet::{Cell, RawSheet};

/// Best-effort read of the label/value rows above the header.
///
/// Unknown labels and unparseable values are ignored.
pub(crate) fn read_metadata(sheet: &RawSheet, boilerplate_rows: usize) -> FundMetadata {
    let mut meta = FundMetadata::default();

    for row in sheet.rows().iter().take(boilerplate_rows) {
        let mut filled = row.iter().filter_map(Cell::text);
        let (Some(label), Some(value)) = (filled.next(), filled.next()) else {
            continue;
        };
        let label = label.trim_end_matches(':').trim().to_ascii_lowercase();

        match label.as_str() {
            "fund name" => meta.fund_name = Some(value.into_owned()),
            "ticker symbol" => meta.ticker = Some(value.into_owned()),
            "holdings" | "as of" => meta.as_of = parse_as_of(&value),
            _ => {}
        }
    }

    meta
}

/// Parses `As of 17-Oct-2026` (the prefix is optional).
fn parse_as_of(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    let date = v
        .get(..5)
        .filter(|p| p.eq_ignore_ascii_case("as of"))
        .map_or(v, |_| v[5..].trim());
    NaiveDate::parse_from_str(date, "%d-%b-%Y")
        .or_else(|_| NaiveDate::parse_from_str(date, "%m/%d/%Y"))
        .ok()
}
