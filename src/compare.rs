//! Two-fund comparison: load both tables, then hand them to the chart stage.

use crate::chart::{Dashboard, SelectionScope};
use crate::core::{HoldingsClient, HoldingsError};
use crate::holdings::{FundSource, Holding, HoldingsBuilder, ReweightedTable, SheetLayout};

/// Rebalanced holdings of two funds, kept apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    left: ReweightedTable,
    right: ReweightedTable,
}

impl Comparison {
    #[must_use]
    pub const fn new(left: ReweightedTable, right: ReweightedTable) -> Self {
        Self { left, right }
    }

    /// Fetches both funds one after the other; the first failure aborts.
    ///
    /// # Errors
    ///
    /// Any fetch, parse or division error of either fund.
    pub async fn fetch(
        client: &HoldingsClient,
        left: FundSource,
        right: FundSource,
        layout: &SheetLayout,
    ) -> Result<Self, HoldingsError> {
        let left = HoldingsBuilder::new(client, left)
            .layout(layout.clone())
            .fetch()
            .await?;
        let right = HoldingsBuilder::new(client, right)
            .layout(layout.clone())
            .fetch()
            .await?;
        Ok(Self::new(left, right))
    }

    #[must_use]
    pub const fn left(&self) -> &ReweightedTable {
        &self.left
    }

    #[must_use]
    pub const fn right(&self) -> &ReweightedTable {
        &self.right
    }

    /// Both tables' rows, left first. For reporting only; charts use each table alone.
    pub fn combined(&self) -> impl Iterator<Item = &Holding> {
        self.left.holdings().iter().chain(self.right.holdings())
    }

    /// Builds the four-panel dashboard.
    #[must_use]
    pub fn dashboard(&self, scope: SelectionScope) -> Dashboard {
        Dashboard::new(&self.left, &self.right, scope)
    }
}
