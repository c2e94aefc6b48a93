use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A single reward a user can be granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RewardType,
    pub name: String,
    pub description: String,
    /// Squads this reward is offered to. Empty means nobody.
    pub squad_alignment: BTreeSet<String>,
    pub rarity: Rarity,
    #[serde(default)]
    pub requirements: RewardRequirements,
}

impl RewardDefinition {
    /// Whether `squad` is one of the squads this reward is aligned with.
    pub fn is_available_to(&self, squad: &str) -> bool {
        self.squad_alignment.contains(squad)
    }
}

/// Optional predicates a user must satisfy on top of squad alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRequirements {
    /// Inclusive lower bound on the user's submission count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_submissions: Option<u32>,
    /// Worst placement that still qualifies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_placement: Option<Placement>,
    /// Tag that must be present in the user's special criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_criteria: Option<String>,
}

impl RewardRequirements {
    pub fn is_empty(&self) -> bool {
        self.min_submissions.is_none()
            && self.min_placement.is_none()
            && self.special_criteria.is_none()
    }
}

/// The kind of thing a reward grants.
#[derive(
    Debug,
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RewardType {
    Ticket,
    CosmeticUpgrade,
    PageBuild,
    LoreAccess,
    AssetPack,
    Spotlight,
    RoleUpgrade,
}

/// Display rarity of a reward, ordered from most to least common.
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
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A finishing position in a bounty or competition.
///
/// Ordering follows rank, so `First < Second < Third` and a smaller value
/// is a better result.
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
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Placement {
    First = 1,
    Second = 2,
    Third = 3,
}

impl Placement {
    /// Numeric rank, 1 being the best.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// True if `self` is the same as or better than `required`.
    pub fn satisfies(self, required: Placement) -> bool {
        self.rank() <= required.rank()
    }
}
