pub(crate) mod championship;
pub(crate) mod raw;
pub(crate) mod standings;
pub(crate) mod summary;
pub(crate) mod table;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, StandingsError};

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching resource");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| StandingsError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StandingsError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| StandingsError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

    serde_json::from_str(&body).map_err(|e| StandingsError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
