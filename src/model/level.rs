use serde::Serialize;

/// Where a user stands on the XP ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub total_xp: u64,
    /// Always at least 1.
    pub level: u64,
    pub xp_in_current_level: u64,
    pub xp_to_next_level: u64,
    /// Fraction of the current level completed, in `[0, 1)`.
    pub progress_to_next_level: f64,
}

impl LevelProgress {
    /// Number of levels gained going from `before` to `after`.
    pub fn levels_gained(before: &LevelProgress, after: &LevelProgress) -> u64 {
        after.level.saturating_sub(before.level)
    }
}
