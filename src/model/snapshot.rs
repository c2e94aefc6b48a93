use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use super::Placement;
use crate::error::{Result, RewardsError};

/// What a user has achieved so far, as seen by the eligibility rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformanceSnapshot {
    pub wallet_address: String,
    pub squad: String,
    pub submission_count: u32,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub special_criteria: BTreeSet<String>,
}

impl UserPerformanceSnapshot {
    pub fn new(wallet_address: impl Into<String>, squad: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            squad: squad.into(),
            ..Default::default()
        }
    }

    pub fn with_submissions(mut self, count: u32) -> Self {
        self.submission_count = count;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_criteria(mut self, tag: impl Into<String>) -> Self {
        self.special_criteria.insert(tag.into());
        self
    }
}

/// Request body accepted by the "available rewards" endpoint.
///
/// Fields are kept raw; converting into a [`UserPerformanceSnapshot`]
/// validates them and reports [`RewardsError::InvalidInput`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityQuery {
    pub wallet_address: String,
    pub user_squad: String,
    pub submission_count: i64,
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub special_criteria: Vec<String>,
}

impl TryFrom<EligibilityQuery> for UserPerformanceSnapshot {
    type Error = RewardsError;

    fn try_from(query: EligibilityQuery) -> Result<Self> {
        let squad = query.user_squad.trim();
        if squad.is_empty() {
            return Err(RewardsError::invalid("user squad must not be empty"));
        }
        let submission_count = u32::try_from(query.submission_count).map_err(|_| {
            RewardsError::invalid(format!(
                "submission count out of range: {}",
                query.submission_count
            ))
        })?;
        let placement = query
            .placement
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                Placement::from_str(p)
                    .map_err(|_| RewardsError::invalid(format!("unknown placement: {p}")))
            })
            .transpose()?;

        Ok(Self {
            wallet_address: query.wallet_address,
            squad: squad.to_string(),
            submission_count,
            placement,
            special_criteria: query.special_criteria.into_iter().collect(),
        })
    }
}

/// Coarse bucket summarising how well a user performed on a bounty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PerformanceTier {
    Basic,
    Excellent,
    Creative,
}
