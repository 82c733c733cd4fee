use std::sync::Arc;

use serde_json::Value;

use super::palette::SectorPalette;
use super::panel::{CompanyPanel, SectorPanel};
use super::selection::SectorSelection;
use super::vega;
use crate::core::HoldingsError;
use crate::holdings::{FundMetadata, Holding, ReweightedTable};

/// How far a sector click reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionScope {
    /// Each aggregate panel filters only its own detail panel.
    #[default]
    PerIndex,
    /// One selection drives both detail panels.
    Shared,
}

/// Aggregate panel stacked above its detail panel, for one index.
#[derive(Debug)]
pub struct PanelPair {
    index_label: String,
    metadata: FundMetadata,
    data: Vec<Holding>,
    sectors: SectorPanel,
    companies: CompanyPanel,
}

impl PanelPair {
    fn new(table: &ReweightedTable, selection: Arc<SectorSelection>) -> Self {
        let companies = CompanyPanel::new(table, selection.subscribe());
        Self {
            index_label: table.index_label().to_string(),
            metadata: table.metadata().clone(),
            data: table.holdings().to_vec(),
            sectors: SectorPanel::new(table, selection),
            companies,
        }
    }

    #[must_use]
    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    #[must_use]
    pub const fn metadata(&self) -> &FundMetadata {
        &self.metadata
    }

    /// Rows backing both panels.
    #[must_use]
    pub fn data(&self) -> &[Holding] {
        &self.data
    }

    #[must_use]
    pub const fn sectors(&self) -> &SectorPanel {
        &self.sectors
    }

    #[must_use]
    pub const fn companies(&self) -> &CompanyPanel {
        &self.companies
    }

    pub fn companies_mut(&mut self) -> &mut CompanyPanel {
        &mut self.companies
    }
}

/// Four coordinated panels: sector and company views for two indices, side by side.
#[derive(Debug)]
pub struct Dashboard {
    pairs: Vec<PanelPair>,
    palette: SectorPalette,
    scope: SelectionScope,
}

impl Dashboard {
    /// Builds the panels for `left` and `right`, wiring selections per `scope`.
    #[must_use]
    pub fn new(left: &ReweightedTable, right: &ReweightedTable, scope: SelectionScope) -> Self {
        let palette = SectorPalette::from_sectors(left.sectors().into_iter().chain(right.sectors()));

        let pairs = match scope {
            SelectionScope::PerIndex => vec![
                PanelPair::new(left, Arc::new(SectorSelection::new())),
                PanelPair::new(right, Arc::new(SectorSelection::new())),
            ],
            SelectionScope::Shared => {
                let shared = Arc::new(SectorSelection::new());
                vec![
                    PanelPair::new(left, Arc::clone(&shared)),
                    PanelPair::new(right, shared),
                ]
            }
        };

        Self {
            pairs,
            palette,
            scope,
        }
    }

    /// Left pair first.
    #[must_use]
    pub fn pairs(&self) -> &[PanelPair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [PanelPair] {
        &mut self.pairs
    }

    #[must_use]
    pub const fn palette(&self) -> &SectorPalette {
        &self.palette
    }

    #[must_use]
    pub const fn scope(&self) -> SelectionScope {
        self.scope
    }

    /// `true` when both pairs publish to one selection.
    #[must_use]
    pub fn selections_linked(&self) -> bool {
        match self.pairs.as_slice() {
            [a, b] => Arc::ptr_eq(a.sectors.selection(), b.sectors.selection()),
            _ => false,
        }
    }

    /// The dashboard as a Vega-Lite v5 specification.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Json` if the inline data cannot be serialized.
    pub fn to_vega_lite(&self) -> Result<Value, HoldingsError> {
        Ok(vega::spec(self)?)
    }

    /// A standalone HTML page embedding the Vega-Lite specification.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Json` if the specification cannot be serialized.
    pub fn render_html(&self) -> Result<String, HoldingsError> {
        let title = self
            .pairs
            .iter()
            .map(PanelPair::index_label)
            .collect::<Vec<_>>()
            .join(" vs ");
        Ok(vega::html(&self.to_vega_lite()?, &title)?)
    }
}
