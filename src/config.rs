//! Run configuration read from `HC_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::chart::SelectionScope;
use crate::core::HoldingsError;
use crate::holdings::FundSource;

const DEFAULT_OUTPUT: &str = "holdings_comparison.html";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the binary needs to run one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub left: FundSource,
    pub right: FundSource,
    /// Path of the HTML artifact.
    pub output: PathBuf,
    /// Optional path for the bare Vega-Lite JSON.
    pub spec_output: Option<PathBuf>,
    pub timeout: Duration,
    pub scope: SelectionScope,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            left: FundSource::spy(),
            right: FundSource::efiv(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            spec_output: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            scope: SelectionScope::PerIndex,
        }
    }
}

impl RunConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::InvalidParams` for an unparseable URL or timeout.
    pub fn from_env() -> Result<Self, HoldingsError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Reads configuration through `lookup`; unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::InvalidParams` for an unparseable URL or timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HoldingsError> {
        let mut cfg = Self::default();
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        override_fund(&mut cfg.left, get("HC_FUND_A_URL"), get("HC_FUND_A_LABEL"))?;
        override_fund(&mut cfg.right, get("HC_FUND_B_URL"), get("HC_FUND_B_LABEL"))?;

        if let Some(out) = get("HC_OUTPUT") {
            cfg.output = PathBuf::from(out);
        }
        cfg.spec_output = get("HC_SPEC_OUTPUT").map(PathBuf::from);

        if let Some(secs) = get("HC_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| HoldingsError::InvalidParams(format!("HC_TIMEOUT_SECS=`{secs}`")))?;
            if secs == 0 {
                return Err(HoldingsError::InvalidParams("HC_TIMEOUT_SECS must be positive".into()));
            }
            cfg.timeout = Duration::from_secs(secs);
        }
        if get("HC_SHARED_SELECTION").as_deref() == Some("1") {
            cfg.scope = SelectionScope::Shared;
        }

        Ok(cfg)
    }
}

fn override_fund(
    fund: &mut FundSource,
    url: Option<String>,
    label: Option<String>,
) -> Result<(), HoldingsError> {
    if let Some(url) = url {
        fund.url = url::Url::parse(&url)
            .map_err(|e| HoldingsError::InvalidParams(format!("fund url `{url}`: {e}")))?;
        // Best guess at a ticker for logs and fixture names: last path segment stem.
        if let Some(stem) = fund
            .url
            .path_segments()
            .and_then(|mut s| s.next_back())
            .and_then(|f| f.split('.').next())
            .filter(|s| !s.is_empty())
        {
            fund.ticker = stem.rsplit('-').next().unwrap_or(stem).to_ascii_uppercase();
        }
    }
    if let Some(label) = label {
        fund.index_label = label;
    }
    Ok(())
}
