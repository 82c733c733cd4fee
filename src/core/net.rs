use crate::core::{HoldingsError, client::constants::SPREADSHEET_CONTENT_TYPES};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
#[cfg(feature = "test-mode")]
use std::env;

/// Checks that a response advertises a spreadsheet-like content type.
pub(crate) fn check_content_type(resp: &reqwest::Response) -> Result<(), HoldingsError> {
    check_mime(resp.headers().get(CONTENT_TYPE), resp.url().as_str())
}

/// A missing header counts as malformed, like any non-spreadsheet type.
fn check_mime(value: Option<&HeaderValue>, url: &str) -> Result<(), HoldingsError> {
    let reject = |content_type: String| HoldingsError::ContentType {
        content_type,
        url: url.to_string(),
    };
    let Some(value) = value else {
        return Err(reject(String::new()));
    };
    let raw = value
        .to_str()
        .map_err(|_| reject(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;
    let mime = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if SPREADSHEET_CONTENT_TYPES.contains(&mime.as_str()) {
        Ok(())
    } else {
        Err(reject(raw.to_string()))
    }
}

/// Read the response body as bytes.
/// In `test-mode`, if `HC_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _ticker: &str,
    _ext: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("HC_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _ticker, _ext, &bytes)
        {
            tracing::warn!(ticker = _ticker, error = %e, "HC_RECORD: failed to write fixture");
        }
    }

    Ok(bytes)
}
