#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};

use holdings_compare::{FundSource, HoldingsClient, SheetLayout};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture_bytes(endpoint: &str, ticker: &str, ext: &str) -> Vec<u8> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{ticker}.{ext}");
    let path = dir.join(&filename);
    fs::read(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn holdings_path(ticker: &str) -> String {
    format!(
        "/library-content/products/fund-data/etfs/us/holdings-daily-us-en-{}.xlsx",
        ticker.to_ascii_lowercase()
    )
}

pub fn mock_holdings<'a>(server: &'a MockServer, ticker: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(holdings_path(ticker));
        then.status(200)
            .header("content-type", XLSX_CONTENT_TYPE)
            .body(fixture_bytes("holdings", ticker, "xlsx"));
    })
}

pub fn source(server: &MockServer, ticker: &str, label: &str) -> FundSource {
    FundSource::new(ticker, label, &server.url(holdings_path(ticker))).unwrap()
}

pub fn spy_source(server: &MockServer) -> FundSource {
    source(server, "SPY", "S&P 500")
}

pub fn efiv_source(server: &MockServer) -> FundSource {
    source(server, "EFIV", "S&P 500 ESG")
}

pub fn client() -> HoldingsClient {
    HoldingsClient::builder().build().unwrap()
}

pub fn layout() -> SheetLayout {
    SheetLayout::ssga()
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("HC_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("HC_RECORD").ok().as_deref() == Some("1")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn load_fixture_table(ticker: &str) -> holdings_compare::ReweightedTable {
    let source = match ticker {
        "SPY" => FundSource::spy(),
        "EFIV" => FundSource::efiv(),
        other => panic!("no fixture for {other}"),
    };
    holdings_compare::HoldingsBuilder::new(&client(), source)
        .load_xlsx(&fixture_bytes("holdings", ticker, "xlsx"))
        .unwrap()
}
