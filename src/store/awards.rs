use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Result, RewardsError};
use crate::model::{AwardRequest, AwardedReward, NewAward};
use crate::store::{self, authorize};

#[instrument(skip(client, config, request), fields(wallet = %request.wallet_address, reward_id = %request.reward_id))]
pub(crate) async fn insert_award(
    client: &reqwest::Client,
    config: &ClientConfig,
    request: &AwardRequest,
) -> Result<AwardedReward> {
    let url = config.table_url();
    let row = NewAward::pending(request, Utc::now());

    let builder = authorize(client.post(&url), config)
        .header("Prefer", "return=representation")
        .json(&row);
    let mut rows: Vec<AwardedReward> = store::fetch_rows(builder, &url).await?;

    if rows.len() > 1 {
        warn!(count = rows.len(), "insert returned more than one row");
    }
    if rows.is_empty() {
        return Err(RewardsError::EmptyResponse { url });
    }
    let award = rows.swap_remove(0);
    debug!(id = %award.id, "reward awarded");
    Ok(award)
}

#[instrument(skip(client, config))]
pub(crate) async fn list_awards(
    client: &reqwest::Client,
    config: &ClientConfig,
    wallet_address: &str,
) -> Result<Vec<AwardedReward>> {
    let table_url = config.table_url();
    let filter = format!("eq.{wallet_address}");
    let url = reqwest::Url::parse_with_params(
        &table_url,
        &[
            ("select", "*"),
            ("wallet_address", filter.as_str()),
            ("order", "awarded_at.desc"),
        ],
    )
    .map_err(|e| RewardsError::invalid(format!("bad store url {table_url}: {e}")))?;
    let builder = authorize(client.get(url.clone()), config);
    let awards: Vec<AwardedReward> = store::fetch_rows(builder, url.as_str()).await?;
    debug!(count = awards.len(), "fetched awards");
    Ok(awards)
}
