use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

use crate::core::HoldingsError;

/// Where one fund's holdings sheet comes from, and how its index is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundSource {
    /// Fund ticker, e.g. `SPY`.
    pub ticker: String,
    /// Label of the tracked index, e.g. `S&P 500`.
    pub index_label: String,
    /// Download URL of the daily holdings sheet.
    pub url: Url,
}

impl FundSource {
    /// Creates a source from a URL string.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Url` if `url` does not parse.
    pub fn new(
        ticker: impl Into<String>,
        index_label: impl Into<String>,
        url: &str,
    ) -> Result<Self, HoldingsError> {
        Ok(Self {
            ticker: ticker.into(),
            index_label: index_label.into(),
            url: Url::parse(url)?,
        })
    }

    /// SPDR S&P 500 ETF Trust, tracking the S&P 500.
    #[must_use]
    pub fn spy() -> Self {
        Self::new("SPY", "S&P 500", crate::core::DEFAULT_SPY_URL).expect("static url")
    }

    /// SPDR S&P 500 ESG ETF, tracking the S&P 500 ESG index.
    #[must_use]
    pub fn efiv() -> Self {
        Self::new("EFIV", "S&P 500 ESG", crate::core::DEFAULT_EFIV_URL).expect("static url")
    }
}

/// Fund details printed above the holdings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundMetadata {
    /// Full fund name.
    pub fund_name: Option<String>,
    /// Ticker as printed in the sheet.
    pub ticker: Option<String>,
    /// Snapshot date of the holdings.
    pub as_of: Option<NaiveDate>,
}

/// One security of a cleaned holdings sheet, before rebalancing.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRecord {
    pub name: String,
    pub ticker: String,
    pub sector: String,
    /// Weight as reported by the fund.
    pub weight_percent: f64,
    /// Weight after unassigned holdings are removed; set by reweighting.
    pub reweight_percent: Option<f64>,
    pub local_currency: String,
    pub index_label: String,
}

/// A cleaned holdings table for one fund.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingsTable {
    pub(crate) index_label: String,
    pub(crate) metadata: FundMetadata,
    pub(crate) records: Vec<HoldingRecord>,
}

impl HoldingsTable {
    /// Assembles a table from already-cleaned records.
    #[must_use]
    pub fn new(
        index_label: impl Into<String>,
        metadata: FundMetadata,
        records: Vec<HoldingRecord>,
    ) -> Self {
        Self {
            index_label: index_label.into(),
            metadata,
            records,
        }
    }

    #[must_use]
    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    #[must_use]
    pub const fn metadata(&self) -> &FundMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn records(&self) -> &[HoldingRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of reported weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(|r| r.weight_percent).sum()
    }

    /// Summed weight of rows in `sector`.
    #[must_use]
    pub fn sector_weight(&self, sector: &str) -> f64 {
        self.records
            .iter()
            .filter(|r| r.sector == sector)
            .map(|r| r.weight_percent)
            .sum()
    }
}

/// Export label of the rebalanced weight column.
pub const WEIGHT_LABEL: &str = "Weight %";

/// One security of a rebalanced table; its weight is the rebalanced figure.
///
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    #[serde(rename = "Index")]
    pub index_label: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Weight %")]
    pub weight_percent: f64,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Local Currency")]
    pub local_currency: String,
}

/// A holdings table with unassigned rows removed and weights rescaled to 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct ReweightedTable {
    pub(crate) index_label: String,
    pub(crate) metadata: FundMetadata,
    pub(crate) unassigned_mass: f64,
    pub(crate) holdings: Vec<Holding>,
}

impl ReweightedTable {
    #[must_use]
    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    #[must_use]
    pub const fn metadata(&self) -> &FundMetadata {
        &self.metadata
    }

    /// Reported weight carried by the removed unassigned rows.
    #[must_use]
    pub const fn unassigned_mass(&self) -> f64 {
        self.unassigned_mass
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of rebalanced weights; 100 up to rounding.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight_percent).sum()
    }

    /// Distinct sectors in sorted order.
    #[must_use]
    pub fn sectors(&self) -> BTreeSet<&str> {
        self.holdings.iter().map(|h| h.sector.as_str()).collect()
    }

    /// Rows as a JSON array in export column order.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, HoldingsError> {
        Ok(serde_json::to_string_pretty(&self.holdings)?)
    }
}

#[cfg(feature = "dataframe")]
mod df {
    use super::{Holding, ReweightedTable};
    use crate::core::dataframe::ToDataFrame;
    use polars::prelude::*;

    impl ToDataFrame for ReweightedTable {
        fn to_dataframe(&self) -> PolarsResult<DataFrame> {
            let rows = self.holdings();
            let col = |f: fn(&Holding) -> &str| rows.iter().map(|h| f(h).to_string()).collect::<Vec<_>>();
            df!(
                "Index" => col(|h| h.index_label.as_str()),
                "Name" => col(|h| h.name.as_str()),
                "Ticker" => col(|h| h.ticker.as_str()),
                "Weight %" => rows.iter().map(|h| h.weight_percent).collect::<Vec<f64>>(),
                "Sector" => col(|h| h.sector.as_str()),
                "Local Currency" => col(|h| h.local_currency.as_str()),
            )
        }

        fn empty_dataframe() -> PolarsResult<DataFrame> {
            df!(
                "Index" => Vec::<String>::new(),
                "Name" => Vec::<String>::new(),
                "Ticker" => Vec::<String>::new(),
                "Weight %" => Vec::<f64>::new(),
                "Sector" => Vec::<String>::new(),
                "Local Currency" => Vec::<String>::new(),
            )
        }
    }

}
