//! Sector selection published by an aggregate panel and consumed by detail panels.

use std::collections::BTreeSet;
use tokio::sync::watch;

/// The set of selected sectors. An empty filter lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorFilter {
    sectors: BTreeSet<String>,
}

impl SectorFilter {
    /// A filter that passes every sector.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter passing only the given sectors.
    pub fn only<S: Into<String>>(sectors: impl IntoIterator<Item = S>) -> Self {
        Self {
            sectors: sectors.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` if `sector` passes.
    #[must_use]
    pub fn matches(&self, sector: &str) -> bool {
        self.sectors.is_empty() || self.sectors.contains(sector)
    }

    /// `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Selected sectors in sorted order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(String::as_str)
    }
}

/// Publisher side of a sector selection.
///
/// Every [`subscribe`](Self::subscribe)d receiver observes the latest filter;
/// publishing never fails, even with no subscribers.
#[derive(Debug)]
pub struct SectorSelection {
    tx: watch::Sender<SectorFilter>,
}

impl Default for SectorSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorSelection {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SectorFilter::all());
        Self { tx }
    }

    /// Replaces the selection with a single sector (plain click).
    pub fn select(&self, sector: &str) {
        self.tx.send_replace(SectorFilter::only([sector]));
    }

    /// Adds or removes one sector (shift-click).
    pub fn toggle(&self, sector: &str) {
        self.tx.send_modify(|f| {
            if !f.sectors.remove(sector) {
                f.sectors.insert(sector.to_string());
            }
        });
    }

    /// Clears the selection.
    pub fn clear(&self) {
        self.tx.send_replace(SectorFilter::all());
    }

    /// Snapshot of the current filter.
    #[must_use]
    pub fn current(&self) -> SectorFilter {
        self.tx.borrow().clone()
    }

    /// New receiver; it starts out having seen the current filter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SectorFilter> {
        self.tx.subscribe()
    }
}
