use url::Url;

use crate::core::{HoldingsClient, HoldingsError, net};
use crate::sheet::RawSheet;

/// Downloads one holdings workbook and reads its first sheet.
///
/// Single attempt, no retries.
pub(super) async fn fetch_sheet(
    client: &HoldingsClient,
    url: &Url,
    ticker: &str,
) -> Result<RawSheet, HoldingsError> {
    let resp = client.http().get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(HoldingsError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    net::check_content_type(&resp)?;

    let bytes = net::get_bytes(resp, "holdings", ticker, "xlsx").await?;
    tracing::debug!(ticker, bytes = bytes.len(), "downloaded holdings workbook");

    Ok(RawSheet::from_xlsx_bytes(&bytes)?)
}
