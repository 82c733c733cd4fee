//! Holdings ingestion and rebalancing.
//!
//! Internals are split into:
//! - `fetch`:    one HTTP GET per fund, spreadsheet bytes to [`RawSheet`]
//! - `ingest`:   layout-driven cleaning into a [`HoldingsTable`]
//! - `reweight`: removal of unassigned holdings and rescaling to 100%
//! - `preamble`: fund name / ticker / as-of date above the table

mod fetch;
pub mod ingest;
mod layout;
mod model;
mod preamble;
pub mod reweight;

pub use layout::{RequiredColumns, SheetLayout};
pub use model::{
    FundMetadata, FundSource, Holding, HoldingRecord, HoldingsTable, ReweightedTable, WEIGHT_LABEL,
};

use crate::{HoldingsClient, HoldingsError, sheet::RawSheet};

impl HoldingsTable {
    /// Rebalances this table without the `unassigned_sector` rows.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Division` when every holding is unassigned.
    pub fn reweighted(self, unassigned_sector: &str) -> Result<ReweightedTable, HoldingsError> {
        reweight::reweight(self, unassigned_sector)
    }
}

/// A builder for loading one fund's holdings.
///
/// # Example
///
/// ```no_run
/// # use holdings_compare::{FundSource, HoldingsBuilder, HoldingsClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HoldingsClient::default();
/// let spy = HoldingsBuilder::new(&client, FundSource::spy()).fetch().await?;
/// println!("{} holdings, {:.2}% was unassigned", spy.len(), spy.unassigned_mass());
/// # Ok(())
/// # }
/// ```
pub struct HoldingsBuilder {
    client: HoldingsClient,
    source: FundSource,
    layout: SheetLayout,
}

impl HoldingsBuilder {
    /// Creates a builder for `source` using the SSGA sheet layout.
    pub fn new(client: &HoldingsClient, source: FundSource) -> Self {
        Self {
            client: client.clone(),
            source,
            layout: SheetLayout::ssga(),
        }
    }

    /// Uses a different sheet layout.
    #[must_use]
    pub fn layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The source this builder loads.
    pub fn source(&self) -> &FundSource {
        &self.source
    }

    /// Downloads and cleans the sheet without rebalancing.
    ///
    /// # Errors
    ///
    /// Fetch errors for network, status or content-type failures, `Parse` for layout problems.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.source.ticker))]
    pub async fn fetch_cleaned(&self) -> Result<HoldingsTable, HoldingsError> {
        let sheet = fetch::fetch_sheet(&self.client, &self.source.url, &self.source.ticker).await?;
        self.clean(&sheet)
    }

    /// Downloads, cleans and rebalances the sheet.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_cleaned`], plus `Division` when every holding is unassigned.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.source.ticker))]
    pub async fn fetch(&self) -> Result<ReweightedTable, HoldingsError> {
        self.fetch_cleaned()
            .await?
            .reweighted(&self.layout.unassigned_sector)
    }

    /// Cleans and rebalances an in-memory xlsx workbook.
    ///
    /// # Errors
    ///
    /// `Parse` for unreadable workbooks or layout problems, `Division` as in [`Self::fetch`].
    pub fn load_xlsx(&self, bytes: &[u8]) -> Result<ReweightedTable, HoldingsError> {
        self.load_sheet(&RawSheet::from_xlsx_bytes(bytes)?)
    }

    /// Cleans and rebalances an already-loaded sheet.
    ///
    /// # Errors
    ///
    /// `Parse` for layout problems, `Division` as in [`Self::fetch`].
    pub fn load_sheet(&self, sheet: &RawSheet) -> Result<ReweightedTable, HoldingsError> {
        self.clean(sheet)?.reweighted(&self.layout.unassigned_sector)
    }

    fn clean(&self, sheet: &RawSheet) -> Result<HoldingsTable, HoldingsError> {
        Ok(ingest::clean(sheet, &self.layout, &self.source.index_label)?)
    }
}
