use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum HoldingsError {
    /// An error occurred during an HTTP request (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server answered with something that is not a spreadsheet.
    #[error("Unexpected content type `{content_type}` at {url}")]
    ContentType {
        /// The offending `Content-Type` header value.
        content_type: String,
        /// The URL that returned it.
        url: String,
    },

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The holdings sheet did not have the expected layout.
    #[error("Holdings sheet layout unexpected: {0}")]
    Parse(#[from] ParseError),

    /// Every holding sits in the unassigned sector, so there is nothing to rebalance onto.
    #[error("cannot reweight {label}: unassigned holdings carry {unassigned}% of the fund")]
    Division {
        /// The index label of the offending table.
        label: String,
        /// The summed weight of the unassigned rows.
        unassigned: f64,
    },

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    InvalidParams(String),

    /// Writing an output artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing an output artifact failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shape problems found while reading a holdings sheet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The workbook bytes could not be opened.
    #[error("workbook could not be read: {0}")]
    Workbook(String),

    /// The workbook contains no worksheet.
    #[error("workbook has no worksheet")]
    NoWorksheet,

    /// Not enough rows to reach the header row.
    #[error("expected at least {expected} rows before the header, found {found}")]
    TooFewRows {
        /// Rows required (boilerplate plus header).
        expected: usize,
        /// Rows present.
        found: usize,
    },

    /// A column with data has no header label.
    #[error("column {column} has data but no header label")]
    BlankHeader {
        /// Zero-based column position after empty columns are removed.
        column: usize,
    },

    /// The same header label appears twice.
    #[error("duplicate header `{0}`")]
    DuplicateHeader(String),

    /// An expected header label is absent.
    #[error("missing expected column `{0}`")]
    MissingColumn(String),

    /// A non-empty column carries a header the layout does not know.
    #[error("unexpected column `{0}`")]
    UnexpectedColumn(String),

    /// A weight cell holds a token that is neither numeric nor the zero sentinel.
    #[error("row {row}: weight `{value}` is not numeric")]
    InvalidWeight {
        /// Zero-based sheet row of the offending cell.
        row: usize,
        /// The raw cell text.
        value: String,
    },
}

/// Coarse failure category of a [`HoldingsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Retrieving a source spreadsheet failed.
    Fetch,
    /// The spreadsheet had an unexpected shape.
    Parse,
    /// Reweighting was undefined.
    Division,
    /// Writing the chart artifact failed.
    Output,
    /// The run was misconfigured.
    Config,
}

impl HoldingsError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Status { .. } | Self::ContentType { .. } | Self::Url(_) => {
                ErrorKind::Fetch
            }
            Self::Parse(_) => ErrorKind::Parse,
            Self::Division { .. } => ErrorKind::Division,
            Self::Io(_) | Self::Json(_) => ErrorKind::Output,
            Self::InvalidParams(_) => ErrorKind::Config,
        }
    }
}
