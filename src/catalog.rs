//! The reward catalog: an immutable table of reward definitions.
//!
//! A catalog is built once at startup, either from JSON configuration or
//! from [`RewardCatalog::standard`], and then borrowed by the evaluators.

use itertools::Itertools;

use crate::error::{Result, RewardsError};
use crate::model::{Placement, Rarity, RewardDefinition, RewardRequirements, RewardType};

pub const SQUAD_CREATORS: &str = "creators";
pub const SQUAD_DECODERS: &str = "decoders";
pub const SQUAD_SPEAKERS: &str = "speakers";
pub const SQUAD_RAIDERS: &str = "raiders";
pub const SQUAD_RANGERS: &str = "rangers";

/// Every squad known to the academy.
pub const ALL_SQUADS: &[&str] = &[
    SQUAD_CREATORS,
    SQUAD_DECODERS,
    SQUAD_SPEAKERS,
    SQUAD_RAIDERS,
    SQUAD_RANGERS,
];

/// An ordered, id-unique list of reward definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    rewards: Vec<RewardDefinition>,
}

impl RewardCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(rewards: Vec<RewardDefinition>) -> Result<Self> {
        let duplicates = rewards
            .iter()
            .duplicates_by(|r| r.id.as_str())
            .map(|r| r.id.as_str())
            .collect_vec();
        if !duplicates.is_empty() {
            return Err(RewardsError::invalid(format!(
                "duplicate reward ids: {}",
                duplicates.join(", ")
            )));
        }
        Ok(Self { rewards })
    }

    /// Parse a catalog from a JSON array of reward definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let rewards: Vec<RewardDefinition> = serde_json::from_str(json)?;
        Self::new(rewards)
    }

    /// Look up a single reward by id.
    pub fn get(&self, id: &str) -> Result<&RewardDefinition> {
        self.rewards
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RewardsError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rewards.iter().any(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RewardDefinition> {
        self.rewards.iter()
    }

    pub fn as_slice(&self) -> &[RewardDefinition] {
        &self.rewards
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// The reward table the academy ships with.
    pub fn standard() -> Self {
        let rewards = vec![
            reward(
                "retailstar_raffle_ticket",
                RewardType::Ticket,
                "Retailstar Raffle Ticket",
                "One entry into the weekly Retailstar raffle.",
                ALL_SQUADS,
                Rarity::Common,
                RewardRequirements::default(),
            ),
            reward(
                "hoodie_pfp_glow",
                RewardType::CosmeticUpgrade,
                "Glowing Hoodie Trim",
                "Animated trim for your profile hoodie.",
                &[SQUAD_CREATORS, SQUAD_SPEAKERS],
                Rarity::Uncommon,
                RewardRequirements {
                    min_submissions: Some(3),
                    ..Default::default()
                },
            ),
            reward(
                "mall_storefront_build",
                RewardType::PageBuild,
                "Retailstar Storefront",
                "A custom storefront page built by the mall crew.",
                &[SQUAD_CREATORS, SQUAD_DECODERS],
                Rarity::Epic,
                RewardRequirements {
                    min_submissions: Some(3),
                    min_placement: Some(Placement::First),
                    ..Default::default()
                },
            ),
            reward(
                "vault_lore_fragment",
                RewardType::LoreAccess,
                "Vault Lore Fragment",
                "Unlocks a sealed chapter of academy lore.",
                &[SQUAD_DECODERS, SQUAD_RANGERS],
                Rarity::Rare,
                RewardRequirements {
                    special_criteria: Some("puzzle_solver".to_string()),
                    ..Default::default()
                },
            ),
            reward(
                "meme_asset_pack",
                RewardType::AssetPack,
                "Meme Asset Pack",
                "Templates and stickers for raid content.",
                &[SQUAD_RAIDERS, SQUAD_CREATORS],
                Rarity::Uncommon,
                RewardRequirements {
                    min_submissions: Some(5),
                    ..Default::default()
                },
            ),
            reward(
                "spotlight_feature",
                RewardType::Spotlight,
                "Community Spotlight",
                "Your work featured on the academy home page.",
                &[SQUAD_SPEAKERS, SQUAD_CREATORS, SQUAD_RAIDERS],
                Rarity::Rare,
                RewardRequirements {
                    min_placement: Some(Placement::Third),
                    ..Default::default()
                },
            ),
            reward(
                "ranger_role_upgrade",
                RewardType::RoleUpgrade,
                "Senior Ranger Role",
                "Promoted Discord role with moderation perks.",
                &[SQUAD_RANGERS],
                Rarity::Legendary,
                RewardRequirements {
                    min_submissions: Some(10),
                    min_placement: Some(Placement::Second),
                    special_criteria: Some("community_builder".to_string()),
                },
            ),
        ];
        Self { rewards }
    }
}

impl<'a> IntoIterator for &'a RewardCatalog {
    type Item = &'a RewardDefinition;
    type IntoIter = std::slice::Iter<'a, RewardDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.rewards.iter()
    }
}

fn reward(
    id: &str,
    kind: RewardType,
    name: &str,
    description: &str,
    squads: &[&str],
    rarity: Rarity,
    requirements: RewardRequirements,
) -> RewardDefinition {
    RewardDefinition {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        description: description.to_string(),
        squad_alignment: squads.iter().map(|s| s.to_string()).collect(),
        rarity,
        requirements,
    }
}
