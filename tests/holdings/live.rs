use holdings_compare::{FundSource, HoldingsBuilder, HoldingsClient};

async fn live_fund(source: FundSource) {
    let client = HoldingsClient::builder().build().unwrap();

    // Writes `tests/fixtures/holdings_<TICKER>.xlsx` when HC_RECORD=1 with the test-mode feature.
    let table = HoldingsBuilder::new(&client, source).fetch().await.unwrap();

    if !crate::common::is_recording() {
        assert!(!table.is_empty(), "expected holdings for {}", table.index_label());
        assert!(
            (table.total_weight() - 100.0).abs() <= 0.005 * table.len() as f64 + 0.01,
            "rebalanced weights should sum to about 100, got {}",
            table.total_weight()
        );
        assert!(table.holdings().iter().all(|h| h.sector != "Unassigned"));
        assert!(table.metadata().as_of.is_some(), "sheet should carry an as-of date");
    }
}

#[tokio::test]
#[ignore]
async fn live_spy_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }
    live_fund(FundSource::spy()).await;
}

#[tokio::test]
#[ignore]
async fn live_efiv_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }
    live_fund(FundSource::efiv()).await;
}
