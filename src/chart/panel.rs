use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

use super::palette::{MUTED, SectorPalette};
use super::selection::{SectorFilter, SectorSelection};
use crate::holdings::ReweightedTable;

/// One bar of a sector-aggregate panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorBar {
    pub sector: String,
    /// Summed weight of the sector's companies.
    pub sum_of_weights: f64,
    /// Number of companies in the sector.
    pub no_of_names: usize,
}

/// One bar of a company-detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyBar {
    pub name: String,
    pub ticker: String,
    pub sector: String,
    pub weight_percent: f64,
}

/// Sector breakdown of one index; clicks publish to its selection.
#[derive(Debug)]
pub struct SectorPanel {
    title: String,
    bars: Vec<SectorBar>,
    selection: Arc<SectorSelection>,
}

impl SectorPanel {
    /// Aggregates `table` by sector, bars in sorted sector order.
    #[must_use]
    pub fn new(table: &ReweightedTable, selection: Arc<SectorSelection>) -> Self {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for h in table.holdings() {
            let g = groups.entry(h.sector.as_str()).or_default();
            g.0 += h.weight_percent;
            g.1 += 1;
        }
        let bars = groups
            .into_iter()
            .map(|(sector, (sum_of_weights, no_of_names))| SectorBar {
                sector: sector.to_string(),
                sum_of_weights,
                no_of_names,
            })
            .collect();

        Self {
            title: format!("Sector Breakdown for {}", table.index_label()),
            bars,
            selection,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn bars(&self) -> &[SectorBar] {
        &self.bars
    }

    /// The bar for `sector`, if the index has one.
    #[must_use]
    pub fn bar(&self, sector: &str) -> Option<&SectorBar> {
        self.bars.iter().find(|b| b.sector == sector)
    }

    /// Plain click: select only `sector`.
    pub fn click(&self, sector: &str) {
        self.selection.select(sector);
    }

    /// Shift-click: add or remove `sector`.
    pub fn shift_click(&self, sector: &str) {
        self.selection.toggle(sector);
    }

    /// Click on empty space.
    pub fn clear(&self) {
        self.selection.clear();
    }

    /// Fill of the bar for `sector`: its palette color when it passes the
    /// current selection, muted otherwise.
    #[must_use]
    pub fn fill(&self, sector: &str, palette: &SectorPalette) -> &'static str {
        if self.selection.current().matches(sector) {
            palette.color(sector)
        } else {
            MUTED
        }
    }

    pub(crate) fn selection(&self) -> &Arc<SectorSelection> {
        &self.selection
    }
}

/// Company weights of one index, restricted to the subscribed sector filter.
#[derive(Debug)]
pub struct CompanyPanel {
    title: String,
    bars: Vec<CompanyBar>,
    filter: watch::Receiver<SectorFilter>,
}

impl CompanyPanel {
    #[must_use]
    pub fn new(table: &ReweightedTable, filter: watch::Receiver<SectorFilter>) -> Self {
        let bars = table
            .holdings()
            .iter()
            .map(|h| CompanyBar {
                name: h.name.clone(),
                ticker: h.ticker.clone(),
                sector: h.sector.clone(),
                weight_percent: h.weight_percent,
            })
            .collect();
        Self {
            title: format!("Companies in {}", table.index_label()),
            bars,
            filter,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Every company, ignoring the filter.
    #[must_use]
    pub fn all_bars(&self) -> &[CompanyBar] {
        &self.bars
    }

    /// Companies passing the latest published filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&CompanyBar> {
        let filter = self.filter.borrow();
        self.bars.iter().filter(|b| filter.matches(&b.sector)).collect()
    }

    /// `true` once per new publication; marks the filter as seen.
    pub fn take_change(&mut self) -> bool {
        let changed = self.filter.has_changed().unwrap_or(false);
        if changed {
            let _ = self.filter.borrow_and_update();
        }
        changed
    }

    /// Waits for the next publication. Returns `false` if the selection is gone.
    pub async fn changed(&mut self) -> bool {
        self.filter.changed().await.is_ok()
    }
}
