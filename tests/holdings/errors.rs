use httpmock::Method::GET;
use holdings_compare::{ErrorKind, HoldingsBuilder, HoldingsError, ParseError};

use crate::common;

#[tokio::test]
async fn not_found_is_a_fetch_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(common::holdings_path("SPY"));
        then.status(404).body("gone");
    });
    let client = common::client();

    let err = HoldingsBuilder::new(&client, common::spy_source(&server))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.kind(), ErrorKind::Fetch);
    match err {
        HoldingsError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("holdings-daily-us-en-spy.xlsx"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn html_landing_page_is_rejected() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(common::holdings_path("SPY"));
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body>Please accept cookies</body></html>");
    });
    let client = common::client();

    let err = HoldingsBuilder::new(&client, common::spy_source(&server))
        .fetch()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(
        matches!(err, HoldingsError::ContentType { ref content_type, .. } if content_type.starts_with("text/html")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn corrupt_workbook_is_a_parse_error() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(common::holdings_path("EFIV"));
        then.status(200)
            .header("content-type", common::XLSX_CONTENT_TYPE)
            .body("definitely not a zip archive");
    });
    let client = common::client();

    let err = HoldingsBuilder::new(&client, common::efiv_source(&server))
        .fetch()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, HoldingsError::Parse(ParseError::Workbook(_))), "got {err:?}");
}

#[test]
fn wrong_boilerplate_count_misses_the_header() {
    let client = common::client();
    let bytes = common::fixture_bytes("holdings", "SPY", "xlsx");
    let layout = common::layout().boilerplate_rows(3);

    let err = HoldingsBuilder::new(&client, holdings_compare::FundSource::spy())
        .layout(layout)
        .load_xlsx(&bytes)
        .unwrap_err();

    // Row 3 is blank, so the promoted header has no labels.
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn unknown_zero_token_rejects_the_hyphen() {
    let client = common::client();
    let bytes = common::fixture_bytes("holdings", "SPY", "xlsx");
    let layout = common::layout().zero_weight_token("n/a");

    let err = HoldingsBuilder::new(&client, holdings_compare::FundSource::spy())
        .layout(layout)
        .load_xlsx(&bytes)
        .unwrap_err();

    match err {
        HoldingsError::Parse(ParseError::InvalidWeight { row, value }) => {
            assert_eq!(row, 11);
            assert_eq!(value, "-");
        }
        other => panic!("expected an invalid weight, got {other:?}"),
    }
}
