//! Descriptor of a vendor holdings sheet.

/// Which columns must be non-empty for a data row to be kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredColumns {
    /// Every column that survives the empty-column pass must be filled.
    All,
    /// Only the listed header labels must be filled.
    Only(Vec<String>),
}

/// Fixed shape of a holdings spreadsheet.
///
/// Schema drift at the vendor is a change to this value, not to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Rows above the header row, counted from the top of the sheet.
    pub boilerplate_rows: usize,
    /// Header labels that must be present.
    pub expected_headers: Vec<String>,
    /// Header of the security name column.
    pub name_column: String,
    /// Header of the ticker column.
    pub ticker_column: String,
    /// Header of the sector column.
    pub sector_column: String,
    /// Header of the local currency column.
    pub currency_column: String,
    /// Header of the weight column as the vendor writes it.
    pub weight_column: String,
    /// Token the vendor writes for a zero weight.
    pub zero_weight_token: String,
    /// Identifier-only columns discarded after cleaning.
    pub dropped_columns: Vec<String>,
    /// Row completeness policy.
    pub required_columns: RequiredColumns,
    /// Ignore columns that are neither mapped nor dropped instead of failing.
    pub allow_unknown_columns: bool,
    /// Sector name of cash and liquidity holdings.
    pub unassigned_sector: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::ssga()
    }
}

impl SheetLayout {
    /// The State Street (SSGA) daily holdings layout.
    ///
    /// Rows 0-2 carry fund name, ticker and "As of" date, row 3 is blank, and the
    /// header sits on row 4. Footer disclaimers only fill the first column.
    #[must_use]
    pub fn ssga() -> Self {
        let owned = |v: &[&str]| v.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
        Self {
            boilerplate_rows: 4,
            expected_headers: owned(&[
                "Name",
                "Ticker",
                "Identifier",
                "SEDOL",
                "Weight",
                "Sector",
                "Shares Held",
                "Local Currency",
            ]),
            name_column: "Name".into(),
            ticker_column: "Ticker".into(),
            sector_column: "Sector".into(),
            currency_column: "Local Currency".into(),
            weight_column: "Weight".into(),
            zero_weight_token: "-".into(),
            dropped_columns: owned(&["Identifier", "SEDOL", "Shares Held"]),
            required_columns: RequiredColumns::Only(owned(&[
                "Name",
                "Ticker",
                "Weight",
                "Sector",
                "Local Currency",
            ])),
            allow_unknown_columns: false,
            unassigned_sector: "Unassigned".into(),
        }
    }

    /// Overrides the number of rows above the header.
    #[must_use]
    pub const fn boilerplate_rows(mut self, n: usize) -> Self {
        self.boilerplate_rows = n;
        self
    }

    /// Overrides the row completeness policy.
    #[must_use]
    pub fn required_columns(mut self, policy: RequiredColumns) -> Self {
        self.required_columns = policy;
        self
    }

    /// Tolerates columns the layout does not name; they are logged and skipped.
    #[must_use]
    pub const fn allow_unknown_columns(mut self, allow: bool) -> Self {
        self.allow_unknown_columns = allow;
        self
    }

    /// Overrides the zero-weight sentinel.
    #[must_use]
    pub fn zero_weight_token(mut self, token: impl Into<String>) -> Self {
        self.zero_weight_token = token.into();
        self
    }
}
