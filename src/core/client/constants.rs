//! Centralized constants for default sources, timeouts and UA.

use std::time::Duration;

/// Default desktop UA; the SSGA CDN rejects some bare library agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Overall request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Daily holdings sheet of the SPDR S&P 500 ETF Trust (SPY).
pub const DEFAULT_SPY_URL: &str = "https://www.ssga.com/us/en/intermediary/library-content/products/fund-data/etfs/us/holdings-daily-us-en-spy.xlsx";

/// Daily holdings sheet of the SPDR S&P 500 ESG ETF (EFIV).
pub const DEFAULT_EFIV_URL: &str = "https://www.ssga.com/us/en/intermediary/library-content/products/fund-data/etfs/us/holdings-daily-us-en-efiv.xlsx";

/// Content types accepted as a spreadsheet download.
pub(crate) const SPREADSHEET_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/octet-stream",
    "application/zip",
    "application/x-zip-compressed",
];
