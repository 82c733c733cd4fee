use std::collections::BTreeMap;

/// Fill of bars outside the current selection.
pub const MUTED: &str = "lightgray";

/// Vega's `tableau10` scheme.
const TABLEAU10: [&str; 10] = [
    "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2", "#ff9da6",
    "#9d755d", "#bab0ac",
];

/// Stable sector → color assignment shared by every panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorPalette {
    colors: BTreeMap<String, &'static str>,
}

impl SectorPalette {
    /// Assigns colors in sorted sector order; the scheme wraps after ten sectors.
    pub fn from_sectors<'a>(sectors: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: Vec<&str> = sectors.into_iter().collect();
        names.sort_unstable();
        names.dedup();
        let colors = names
            .into_iter()
            .zip(TABLEAU10.iter().cycle())
            .map(|(s, c)| (s.to_string(), *c))
            .collect();
        Self { colors }
    }

    /// Color of `sector`; unknown sectors are muted.
    #[must_use]
    pub fn color(&self, sector: &str) -> &'static str {
        self.colors.get(sector).copied().unwrap_or(MUTED)
    }

    /// Sectors in scale order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Colors in scale order.
    pub fn range(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors.values().copied()
    }
}
