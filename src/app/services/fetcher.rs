//! HTTP source fetcher.
//!
//! Retrieves a source document under a bounded timeout and classifies
//! failures into the crate error taxonomy: transport failure, non-success
//! HTTP status, and body-read failure. A single attempt per source; a failed
//! fetch is fatal to the whole run so that no partial registry is produced.

use crate::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Fetch the full body of `url`, honoring `timeout` for the whole request.
///
/// On success the body is returned with exactly one trailing line terminator
/// stripped, so callers can split on `\n` without a phantom empty final line.
pub async fn fetch(client: &reqwest::Client, url: &str, timeout: Duration) -> Result<String> {
    debug!("Fetching {} (timeout {:?})", url, timeout);

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| Error::transport(url, e))?;

    let status = response.status();
    if !status.is_success() {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        return Err(Error::http_status(url, status_text));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::body_read(url, e))?;

    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(strip_trailing_newline(body))
}

/// Remove exactly one trailing line terminator (`\n` or `\r\n`).
pub(crate) fn strip_trailing_newline(mut body: String) -> String {
    if body.ends_with('\n') {
        body.pop();
        if body.ends_with('\r') {
            body.pop();
        }
    }
    body
}
