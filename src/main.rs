use std::fs;

use holdings_compare::{Comparison, HoldingsClient, RunConfig, SheetLayout};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let default = if std::env::var("HC_DEBUG").ok().as_deref() == Some("1") {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = RunConfig::from_env()?;
    let client = HoldingsClient::builder().timeout(cfg.timeout).build()?;
    tracing::debug!(timeout = ?client.timeout(), scope = ?cfg.scope, "client ready");

    let comparison = Comparison::fetch(
        &client,
        cfg.left.clone(),
        cfg.right.clone(),
        &SheetLayout::ssga(),
    )
    .await
    .inspect_err(|e| tracing::error!(kind = ?e.kind(), "{e}"))?;

    for table in [comparison.left(), comparison.right()] {
        tracing::info!(
            index = table.index_label(),
            as_of = ?table.metadata().as_of,
            holdings = table.len(),
            sectors = table.sectors().len(),
            unassigned = table.unassigned_mass(),
            total = table.total_weight(),
            "rebalanced"
        );
    }
    tracing::info!(rows = comparison.combined().count(), "combined holdings");

    let dashboard = comparison.dashboard(cfg.scope);
    if let Some(path) = &cfg.spec_output {
        fs::write(path, serde_json::to_string_pretty(&dashboard.to_vega_lite()?)?)?;
        tracing::info!(path = %path.display(), "wrote Vega-Lite spec");
    }
    fs::write(&cfg.output, dashboard.render_html()?)?;
    tracing::info!(path = %cfg.output.display(), "wrote comparison chart");

    Ok(())
}
