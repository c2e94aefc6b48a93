//! Fixed reward bundles per performance tier.

use std::collections::BTreeMap;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::catalog::RewardCatalog;
use crate::error::{Result, RewardsError};
use crate::model::{PerformanceTier, RewardDefinition};

/// Reward bundle for each [`PerformanceTier`]. Every tier has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    bundles: BTreeMap<PerformanceTier, Vec<RewardDefinition>>,
}

impl TierTable {
    /// Build a table, requiring a bundle for every tier.
    pub fn new(bundles: BTreeMap<PerformanceTier, Vec<RewardDefinition>>) -> Result<Self> {
        if let Some(missing) = PerformanceTier::iter().find(|t| !bundles.contains_key(t)) {
            return Err(RewardsError::invalid(format!(
                "tier table has no bundle for {missing}"
            )));
        }
        Ok(Self { bundles })
    }

    /// Build a table from reward ids, resolving each against `catalog`.
    pub fn from_catalog(
        catalog: &RewardCatalog,
        bundles: &[(PerformanceTier, &[&str])],
    ) -> Result<Self> {
        let bundles = bundles
            .iter()
            .map(|(tier, ids)| -> Result<(PerformanceTier, Vec<RewardDefinition>)> {
                let rewards = ids
                    .iter()
                    .map(|id| catalog.get(id).cloned())
                    .collect::<Result<Vec<_>>>()?;
                Ok((*tier, rewards))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Self::new(bundles)
    }

    /// Bundles used by the academy's bounty reviews, drawn from
    /// [`RewardCatalog::standard`].
    pub fn standard() -> Self {
        let catalog = RewardCatalog::standard();
        let pick = |ids: &[&str]| {
            catalog
                .iter()
                .filter(|r| ids.contains(&r.id.as_str()))
                .cloned()
                .collect::<Vec<_>>()
        };

        let bundles = BTreeMap::from([
            (
                PerformanceTier::Basic,
                pick(&["retailstar_raffle_ticket"]),
            ),
            (
                PerformanceTier::Excellent,
                pick(&["retailstar_raffle_ticket", "hoodie_pfp_glow", "spotlight_feature"]),
            ),
            (
                PerformanceTier::Creative,
                pick(&["hoodie_pfp_glow", "meme_asset_pack", "mall_storefront_build"]),
            ),
        ]);
        Self { bundles }
    }

    /// The full bundle for `tier`, ignoring squad.
    pub fn bundle(&self, tier: PerformanceTier) -> &[RewardDefinition] {
        self.bundles.get(&tier).map(Vec::as_slice).unwrap_or_default()
    }

    /// Rewards in the `tier` bundle that are offered to `squad`, in table order.
    pub fn bonuses(&self, tier: PerformanceTier, squad: &str) -> Vec<&RewardDefinition> {
        self.bundle(tier)
            .iter()
            .filter(|r| r.is_available_to(squad))
            .collect()
    }
}

/// Rewards for a tier given by name. Unknown tier names are rejected.
pub fn tiered_bonuses<'a>(
    tier: &str,
    squad: &str,
    table: &'a TierTable,
) -> Result<Vec<&'a RewardDefinition>> {
    let tier = PerformanceTier::from_str(tier)
        .map_err(|_| RewardsError::invalid(format!("unknown performance tier: {tier}")))?;
    Ok(table.bonuses(tier, squad))
}
