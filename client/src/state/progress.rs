//! Gamified progress: experience points, levels, and practice streak.
//!
//! The dashboard renders a locally initialized snapshot; nothing here is
//! persisted.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// XP required to advance one level.
pub const XP_PER_LEVEL: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub xp: u32,
    pub streak_days: u32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self { xp: 1250, streak_days: 4 }
    }
}

impl ProgressState {
    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.xp / XP_PER_LEVEL + 1
    }

    /// XP earned since reaching the current level.
    pub fn xp_into_level(&self) -> u32 {
        self.xp % XP_PER_LEVEL
    }

    /// XP still needed for the next level.
    pub fn xp_to_next_level(&self) -> u32 {
        XP_PER_LEVEL - self.xp_into_level()
    }

    /// Progress through the current level, 0..=99.
    pub fn level_progress_percent(&self) -> u32 {
        self.xp_into_level() * 100 / XP_PER_LEVEL
    }
}
