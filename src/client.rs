use tracing::instrument;

use crate::catalog::RewardCatalog;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::*;
use crate::store;

/// Hands awarded rewards to the hosted rewards table and reads them back.
///
/// `RewardsClient` wraps a [`reqwest::Client`]. The table owns the award
/// lifecycle: this client only ever creates `pending` awards.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hoodie_rewards::Result<()> {
/// use hoodie_rewards::{AwardRequest, ClientConfig, RewardCatalog, RewardsClient};
///
/// let catalog = RewardCatalog::standard();
/// let client = RewardsClient::new(ClientConfig::from_env()?);
/// let request = AwardRequest::new("0xabc", "retailstar_raffle_ticket");
/// let award = client.award_checked(&catalog, &request).await?;
/// println!("awarded {} ({})", award.reward_id, award.status);
/// # Ok(())
/// # }
/// ```
pub struct RewardsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RewardsClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Record a `pending` award for the request as given.
    #[instrument(skip(self, request), fields(reward_id = %request.reward_id))]
    pub async fn award_reward(&self, request: &AwardRequest) -> Result<AwardedReward> {
        store::awards::insert_award(&self.http, &self.config, request).await
    }

    /// Validate the request against `catalog`, then record a `pending` award.
    #[instrument(skip(self, catalog, request), fields(reward_id = %request.reward_id))]
    pub async fn award_checked(
        &self,
        catalog: &RewardCatalog,
        request: &AwardRequest,
    ) -> Result<AwardedReward> {
        request.validate(catalog)?;
        store::awards::insert_award(&self.http, &self.config, request).await
    }

    /// Fetch every award recorded for a wallet, newest first.
    #[instrument(skip(self))]
    pub async fn user_rewards(&self, wallet_address: &str) -> Result<Vec<AwardedReward>> {
        store::awards::list_awards(&self.http, &self.config, wallet_address).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::RewardsError;
    use crate::store::awards::tests::serve_once;

    #[tokio::test]
    async fn test_award_checked_rejects_unknown_reward() {
        let client = RewardsClient::new(ClientConfig::new("http://127.0.0.1:9", "anon"));
        let catalog = RewardCatalog::standard();
        let result = client
            .award_checked(&catalog, &AwardRequest::new("0xabc", "not_in_catalog"))
            .await;
        assert!(matches!(result, Err(RewardsError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_award_checked_round_trip() {
        let row = json!([{
            "id": "a1b2",
            "wallet_address": "0xabc",
            "reward_id": "retailstar_raffle_ticket",
            "awarded_at": "2025-06-01T09:30:00Z",
            "status": "pending"
        }]);
        let (base_url, server) = serve_once(201, row.to_string()).await;
        let client = RewardsClient::with_client(
            reqwest::Client::new(),
            ClientConfig::new(base_url, "anon").with_table("bounty_rewards"),
        );

        let award = client
            .award_checked(
                &RewardCatalog::standard(),
                &AwardRequest::new("0xabc", "retailstar_raffle_ticket"),
            )
            .await
            .unwrap();
        assert_eq!(award.reward_id, "retailstar_raffle_ticket");
        assert_eq!(award.status, AwardStatus::Pending);

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /rest/v1/bounty_rewards"));
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let client = RewardsClient::new(ClientConfig::new("http://127.0.0.1:1", "anon"));
        let result = client.user_rewards("0xabc").await;
        assert!(matches!(result, Err(RewardsError::Http { .. })));
    }
}
