//! Reward logic for the Hoodie Academy platform.
//!
//! The pure parts ([`level`], [`eligibility`], [`tiers`]) decide what a user
//! has earned. [`RewardsClient`] hands awards to the hosted rewards table.

pub use catalog::RewardCatalog;
pub use client::RewardsClient;
pub use config::ClientConfig;
pub use eligibility::{available_rewards, is_eligible, unmet_requirements, Unmet};
pub use error::{Result, RewardsError};
pub use level::{compute_level, xp_for_level, XP_PER_LEVEL};
pub use model::*;
pub use tiers::{tiered_bonuses, TierTable};

pub mod catalog;
mod client;
pub mod config;
pub mod eligibility;
mod error;
pub mod level;
mod model;
mod store;
pub mod tiers;
