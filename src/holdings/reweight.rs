use super::model::{Holding, HoldingsTable, ReweightedTable};
use crate::core::HoldingsError;

/// Unassigned mass at or above this leaves nothing to rebalance onto.
const FULL_MASS: f64 = 100.0 - 1e-9;

/// Two decimals, halves to even.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Rescales weights so the assigned holdings sum to 100%, then drops the
/// `unassigned_sector` rows.
///
/// Every record gets its `reweight_percent` before the filter runs.
///
/// # Errors
///
/// Returns `HoldingsError::Division` when the unassigned rows carry the whole fund.
#[tracing::instrument(skip(table), err, fields(index = %table.index_label, rows = table.len()))]
pub fn reweight(
    mut table: HoldingsTable,
    unassigned_sector: &str,
) -> Result<ReweightedTable, HoldingsError> {
    let unassigned = table.sector_weight(unassigned_sector);
    if unassigned >= FULL_MASS {
        return Err(HoldingsError::Division {
            label: table.index_label,
            unassigned,
        });
    }
    let remaining = 100.0 - unassigned;

    for r in &mut table.records {
        r.reweight_percent = Some(round2(r.weight_percent * 100.0 / remaining));
    }

    let holdings: Vec<Holding> = table
        .records
        .into_iter()
        .filter(|r| r.sector != unassigned_sector)
        .map(|r| Holding {
            weight_percent: r.reweight_percent.unwrap_or(r.weight_percent),
            index_label: r.index_label,
            name: r.name,
            ticker: r.ticker,
            sector: r.sector,
            local_currency: r.local_currency,
        })
        .collect();
    tracing::debug!(unassigned, kept = holdings.len(), "rebalanced weights");

    Ok(ReweightedTable {
        index_label: table.index_label,
        metadata: table.metadata,
        unassigned_mass: unassigned,
        holdings,
    })
}
