//! Learner profile and gamification counters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub name: String,
    pub level: u32,
    pub current_xp: u32,
    pub next_level_xp: u32,
    pub streak_days: u32,
    pub gems: u32,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsPatch {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub current_xp: Option<u32>,
    pub next_level_xp: Option<u32>,
    pub streak_days: Option<u32>,
    pub gems: Option<u32>,
}

impl UserStats {
    /// Shallow merge of the provided fields
    pub fn apply(&mut self, patch: UserStatsPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(xp) = patch.current_xp {
            self.current_xp = xp;
        }
        if let Some(next) = patch.next_level_xp {
            self.next_level_xp = next;
        }
        if let Some(streak) = patch.streak_days {
            self.streak_days = streak;
        }
        if let Some(gems) = patch.gems {
            self.gems = gems;
        }
    }

    /// XP bar fill, 0..=100
    pub fn level_progress_percent(&self) -> u32 {
        if self.next_level_xp == 0 {
            return 0;
        }
        let percent = u64::from(self.current_xp) * 100 / u64::from(self.next_level_xp);
        percent.min(100) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_patch_leaves_other_fields() {
        let mut user = seed::user();
        user.apply(UserStatsPatch {
            current_xp: Some(5000),
            ..Default::default()
        });

        assert_eq!(user.current_xp, 5000);
        assert_eq!(user.name, "Silviu");
        assert_eq!(user.level, 7);
        assert_eq!(user.next_level_xp, 5000);
        assert_eq!(user.streak_days, 12);
        assert_eq!(user.gems, 320);
    }

    #[test]
    fn test_level_progress() {
        let mut user = seed::user();
        assert_eq!(user.level_progress_percent(), 86);

        user.current_xp = 9000;
        assert_eq!(user.level_progress_percent(), 100);

        user.next_level_xp = 0;
        assert_eq!(user.level_progress_percent(), 0);
    }
}
