//! Linked sector/company bar charts for two indices.
//!
//! A [`SectorPanel`] publishes clicks to a [`SectorSelection`]; the paired
//! [`CompanyPanel`] subscribes to it and re-queries its rows against the latest
//! [`SectorFilter`]. [`Dashboard`] wires four panels together and renders them
//! as a Vega-Lite specification or a standalone HTML page.

mod dashboard;
mod palette;
mod panel;
mod selection;
mod vega;

pub use dashboard::{Dashboard, PanelPair, SelectionScope};
pub use palette::{MUTED, SectorPalette};
pub use panel::{CompanyBar, CompanyPanel, SectorBar, SectorPanel};
pub use selection::{SectorFilter, SectorSelection};
