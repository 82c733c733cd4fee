//! holdings-compare: SPDR ETF holdings, rebalanced and compared.
//!
//! The pipeline has three stages:
//! - [`holdings`]: download a fund's daily holdings workbook, clean it against a
//!   [`SheetLayout`], and rebalance weights without the unassigned (cash) rows.
//! - [`compare`]: load two funds independently.
//! - [`chart`]: linked sector/company bar charts, rendered as Vega-Lite.

pub mod chart;
pub mod compare;
pub mod config;
pub mod core;
pub mod holdings;
pub mod sheet;

pub use chart::{Dashboard, SectorFilter, SectorSelection, SelectionScope};
pub use compare::Comparison;
pub use config::RunConfig;
pub use crate::core::{ErrorKind, HoldingsClient, HoldingsClientBuilder, HoldingsError, ParseError};
pub use holdings::{
    FundMetadata, FundSource, Holding, HoldingRecord, HoldingsBuilder, HoldingsTable,
    RequiredColumns, ReweightedTable, SheetLayout,
};
pub use sheet::{Cell, RawSheet};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
