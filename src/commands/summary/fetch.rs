use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::SummaryError;

const USER_AGENT: &str = concat!(
    "wikitak/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/ikan31/wikitak)"
);

/// Fetches the raw HTML of an article page.
pub(super) fn fetch_page(url: &str, timeout: Duration) -> Result<String, SummaryError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    info!(url = %url, "fetching article");
    let response = client.get(url).send()?;

    let status = response.status();
    debug!(status = status.as_u16(), "received response");
    if status == StatusCode::NOT_FOUND {
        return Err(SummaryError::PageNotFound);
    }
    if !status.is_success() {
        return Err(SummaryError::UnexpectedStatus(status.as_u16()));
    }

    let body = response.text()?;
    debug!(bytes = body.len(), "read response body");
    Ok(body)
}
