pub(crate) mod awards;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Result, RewardsError};

/// Attach the hosted-database auth headers to a request.
pub(crate) fn authorize(request: RequestBuilder, config: &ClientConfig) -> RequestBuilder {
    request
        .header("apikey", &config.api_key)
        .bearer_auth(&config.api_key)
}

/// Send a request and decode a JSON array of rows from the response.
pub(crate) async fn fetch_rows<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<Vec<T>> {
    debug!(url, "sending store request");

    let response = request.send().await.map_err(|e| RewardsError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RewardsError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| RewardsError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}
