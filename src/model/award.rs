use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

use crate::catalog::RewardCatalog;
use crate::error::{Result, RewardsError};

/// Free-form data attached to an award.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A reward granted to a wallet.
///
/// This is the row shape of the rewards table, so keys stay snake_case
/// unlike the camelCase request and catalog types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardedReward {
    /// Primary key. Integer keys are stored as their decimal string.
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    pub wallet_address: String,
    pub reward_id: String,
    pub awarded_at: DateTime<Utc>,
    pub status: AwardStatus,
    #[serde(default)]
    pub metadata: Metadata,
}

fn row_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RowId {
        Text(String),
        Int(i64),
        Unsigned(u64),
    }

    Ok(match RowId::deserialize(deserializer)? {
        RowId::Text(id) => id,
        RowId::Int(id) => id.to_string(),
        RowId::Unsigned(id) => id.to_string(),
    })
}

/// Lifecycle state of an award. Only `Pending` is ever written by this crate.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AwardStatus {
    #[default]
    Pending,
    Active,
    Redeemed,
    Expired,
}

/// Request body accepted by the "award reward" endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
    pub wallet_address: String,
    pub reward_id: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl AwardRequest {
    pub fn new(wallet_address: impl Into<String>, reward_id: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            reward_id: reward_id.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Check the request against `catalog` before it is sent anywhere.
    pub fn validate(&self, catalog: &RewardCatalog) -> Result<()> {
        if self.wallet_address.trim().is_empty() {
            return Err(RewardsError::invalid("wallet address must not be empty"));
        }
        catalog.get(&self.reward_id).map(|_| ())
    }
}

/// Row written when a reward is awarded.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewAward<'a> {
    pub wallet_address: &'a str,
    pub reward_id: &'a str,
    pub awarded_at: DateTime<Utc>,
    pub status: AwardStatus,
    pub metadata: &'a Metadata,
}

impl<'a> NewAward<'a> {
    pub(crate) fn pending(request: &'a AwardRequest, awarded_at: DateTime<Utc>) -> Self {
        Self {
            wallet_address: &request.wallet_address,
            reward_id: &request.reward_id,
            awarded_at,
            status: AwardStatus::Pending,
            metadata: &request.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_against_catalog() {
        let catalog = RewardCatalog::standard();
        let id = catalog.iter().next().unwrap().id.clone();

        assert!(AwardRequest::new("0xabc", &id).validate(&catalog).is_ok());
        assert!(matches!(
            AwardRequest::new("0xabc", "no_such_reward").validate(&catalog),
            Err(RewardsError::NotFound { reward_id }) if reward_id == "no_such_reward"
        ));
        assert!(matches!(
            AwardRequest::new(" ", &id).validate(&catalog),
            Err(RewardsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_award_is_pending() {
        let request = AwardRequest::new("0xabc", "ticket").with_metadata("bounty", json!("b-7"));
        let row = serde_json::to_value(NewAward::pending(&request, Utc::now())).unwrap();
        assert_eq!(row["status"], "pending");
        assert_eq!(row["wallet_address"], "0xabc");
        assert_eq!(row["metadata"]["bounty"], "b-7");
    }

    #[test]
    fn test_awarded_row_decodes() {
        let row = json!({
            "id": "42",
            "wallet_address": "0xabc",
            "reward_id": "ticket",
            "awarded_at": "2025-03-01T12:00:00Z",
            "status": "redeemed"
        });
        let award: AwardedReward = serde_json::from_value(row).unwrap();
        assert_eq!(award.status, AwardStatus::Redeemed);
        assert!(award.metadata.is_empty());
    }

    #[test]
    fn test_awarded_row_with_integer_id() {
        let row = json!({
            "id": 42,
            "wallet_address": "0xabc",
            "reward_id": "ticket",
            "awarded_at": "2025-03-01T12:00:00Z",
            "status": "pending"
        });
        let award: AwardedReward = serde_json::from_value(row).unwrap();
        assert_eq!(award.id, "42");

        let bad = json!({
            "id": 4.5,
            "wallet_address": "0xabc",
            "reward_id": "ticket",
            "awarded_at": "2025-03-01T12:00:00Z",
            "status": "pending"
        });
        assert!(serde_json::from_value::<AwardedReward>(bad).is_err());
    }
}
