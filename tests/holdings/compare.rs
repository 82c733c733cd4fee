use holdings_compare::{Comparison, ErrorKind, SelectionScope};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn offline_comparison_loads_both_funds_independently() {
    let server = common::setup_server();
    let spy_mock = common::mock_holdings(&server, "SPY");
    let efiv_mock = common::mock_holdings(&server, "EFIV");
    let client = common::client();

    let cmp = Comparison::fetch(
        &client,
        common::spy_source(&server),
        common::efiv_source(&server),
        &common::layout(),
    )
    .await
    .unwrap();

    spy_mock.assert();
    efiv_mock.assert();

    assert_eq!(cmp.left().index_label(), "S&P 500");
    assert_eq!(cmp.right().index_label(), "S&P 500 ESG");
    assert_eq!(cmp.combined().count(), 13);
    assert_eq!(
        cmp.combined().filter(|h| h.ticker == "AAPL").count(),
        2,
        "each index keeps its own copy of shared constituents"
    );

    // Each table rebalances against its own unassigned mass.
    let aapl = |t: &holdings_compare::ReweightedTable| {
        t.holdings().iter().find(|h| h.ticker == "AAPL").unwrap().weight_percent
    };
    assert_eq!(aapl(cmp.left()), 31.58);
    assert_eq!(aapl(cmp.right()), 26.13);

    let dash = cmp.dashboard(SelectionScope::PerIndex);
    assert_eq!(dash.pairs().len(), 2);
    assert_eq!(dash.palette().domain().count(), 7);
}

#[tokio::test]
async fn second_fund_failure_aborts_the_comparison() {
    let server = common::setup_server();
    let _spy = common::mock_holdings(&server, "SPY");
    let _efiv = server.mock(|when, then| {
        when.method(GET).path(common::holdings_path("EFIV"));
        then.status(503);
    });
    let client = common::client();

    let err = Comparison::fetch(
        &client,
        common::spy_source(&server),
        common::efiv_source(&server),
        &common::layout(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
}
