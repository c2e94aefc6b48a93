//! Reward eligibility rules.
//!
//! All functions here are pure: they only read the definitions and the
//! snapshot they are given.

use serde::Serialize;

use crate::model::{Placement, RewardDefinition, UserPerformanceSnapshot};

/// A single eligibility check that a snapshot failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Unmet {
    Squad { squad: String },
    Submissions { required: u32, actual: u32 },
    Placement {
        required: Placement,
        actual: Option<Placement>,
    },
    SpecialCriteria { tag: String },
}

/// Every check `snapshot` fails for `definition`, in evaluation order.
/// Empty when the reward is available.
pub fn unmet_requirements(
    definition: &RewardDefinition,
    snapshot: &UserPerformanceSnapshot,
) -> Vec<Unmet> {
    let mut unmet = Vec::new();
    let requirements = &definition.requirements;

    if !definition.is_available_to(&snapshot.squad) {
        unmet.push(Unmet::Squad {
            squad: snapshot.squad.clone(),
        });
    }

    if let Some(required) = requirements.min_submissions {
        if snapshot.submission_count < required {
            unmet.push(Unmet::Submissions {
                required,
                actual: snapshot.submission_count,
            });
        }
    }

    if let Some(required) = requirements.min_placement {
        let placed = snapshot
            .placement
            .is_some_and(|actual| actual.satisfies(required));
        if !placed {
            unmet.push(Unmet::Placement {
                required,
                actual: snapshot.placement,
            });
        }
    }

    if let Some(tag) = &requirements.special_criteria {
        if !snapshot.special_criteria.contains(tag) {
            unmet.push(Unmet::SpecialCriteria { tag: tag.clone() });
        }
    }

    unmet
}

/// Whether `snapshot` qualifies for `definition`.
pub fn is_eligible(definition: &RewardDefinition, snapshot: &UserPerformanceSnapshot) -> bool {
    let requirements = &definition.requirements;

    definition.is_available_to(&snapshot.squad)
        && requirements
            .min_submissions
            .is_none_or(|min| snapshot.submission_count >= min)
        && requirements.min_placement.is_none_or(|required| {
            snapshot
                .placement
                .is_some_and(|actual| actual.satisfies(required))
        })
        && requirements
            .special_criteria
            .as_ref()
            .is_none_or(|tag| snapshot.special_criteria.contains(tag))
}

/// Rewards from `catalog` that `snapshot` currently qualifies for, in
/// catalog order.
pub fn available_rewards<'a, I>(
    catalog: I,
    snapshot: &UserPerformanceSnapshot,
) -> Vec<&'a RewardDefinition>
where
    I: IntoIterator<Item = &'a RewardDefinition>,
{
    catalog
        .into_iter()
        .filter(|definition| is_eligible(definition, snapshot))
        .collect()
}
