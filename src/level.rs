//! XP and level calculation.
//!
//! Every level costs the same flat amount of XP, so the level is a plain
//! integer division of the lifetime total.

use crate::error::{Result, RewardsError};
use crate::model::LevelProgress;

/// XP needed to go from one level to the next.
pub const XP_PER_LEVEL: u64 = 1000;

/// Compute level and in-level progress for a lifetime XP total.
pub fn compute_level(total_xp: i64) -> Result<LevelProgress> {
    let total_xp = u64::try_from(total_xp)
        .map_err(|_| RewardsError::invalid(format!("total XP must be >= 0, got {total_xp}")))?;

    let xp_in_current_level = total_xp % XP_PER_LEVEL;

    Ok(LevelProgress {
        total_xp,
        level: total_xp / XP_PER_LEVEL + 1,
        xp_in_current_level,
        xp_to_next_level: XP_PER_LEVEL - xp_in_current_level,
        progress_to_next_level: xp_in_current_level as f64 / XP_PER_LEVEL as f64,
    })
}

/// Lifetime XP at which `level` is reached.
pub fn xp_for_level(level: u64) -> Result<u64> {
    if level == 0 {
        return Err(RewardsError::invalid("levels start at 1"));
    }
    (level - 1)
        .checked_mul(XP_PER_LEVEL)
        .ok_or_else(|| RewardsError::invalid(format!("level {level} is out of range")))
}
