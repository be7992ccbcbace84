//! In-memory model store
//!
//! Holds every entity for the process lifetime:
//! - User stats
//! - Daily missions
//! - Learning goal
//! - Activity feed
//! - Skill trees
//!
//! Nothing is persisted. Cross-references (mission -> node, link -> node)
//! are never enforced; lookups of unknown ids return `None`.

pub mod activity;
pub mod goal;
pub mod mission;
pub mod seed;
pub mod skill_tree;
pub mod user;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog, NewActivity};
pub use goal::{Goal, GoalPatch, GoalStatus};
pub use mission::{
    Mission, MissionBoard, MissionPatch, MissionStatus, MissionType, StartTarget, SubTask,
};
pub use skill_tree::{
    Category, NodeStatus, NodeType, SkillLink, SkillNode, SkillTreeData, SkillTrees,
    TreeSummary, DEFAULT_TREE_ID,
};
pub use user::{UserStats, UserStatsPatch};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// All learner state
#[derive(Debug, Clone)]
pub struct Store {
    pub user: UserStats,
    pub missions: MissionBoard,
    pub goal: Goal,
    pub activity: ActivityLog,
    pub skill_trees: SkillTrees,
}

pub type SharedStore = Arc<RwLock<Store>>;

/// Aggregate served by `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub user: UserStats,
    pub missions: Vec<Mission>,
    pub goal: Goal,
    pub activity: Vec<ActivityEntry>,
}

impl Store {
    /// Fresh store populated with the built-in seed data
    pub fn seeded() -> Self {
        Self {
            user: seed::user(),
            missions: MissionBoard::new(seed::missions()),
            goal: seed::goal(),
            activity: ActivityLog::new(seed::activity()),
            skill_trees: seed::skill_trees(),
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn update_user(&mut self, patch: UserStatsPatch) -> &UserStats {
        self.user.apply(patch);
        &self.user
    }

    pub fn update_goal(&mut self, patch: GoalPatch) -> &Goal {
        self.goal.apply(patch);
        &self.goal
    }

    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            user: self.user.clone(),
            missions: self.missions.all().to_vec(),
            goal: self.goal.clone(),
            activity: self.activity.all().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dashboard() {
        let store = Store::seeded();
        let snapshot = store.dashboard();

        assert_eq!(snapshot.user.name, "Silviu");
        assert_eq!(snapshot.missions.len(), 3);
        assert_eq!(snapshot.goal.status, GoalStatus::Ahead);
        assert_eq!(snapshot.activity.len(), 3);
    }

    #[test]
    fn test_stores_are_independent() {
        let mut a = Store::seeded();
        let b = Store::seeded();

        a.update_user(UserStatsPatch {
            gems: Some(0),
            ..Default::default()
        });
        assert_eq!(a.user.gems, 0);
        assert_eq!(b.user.gems, 320);
    }

    #[test]
    fn test_dashboard_json_shape() {
        let json = serde_json::to_value(Store::seeded().dashboard()).unwrap();
        assert_eq!(json["user"]["currentXp"], 4320);
        assert_eq!(json["missions"][0]["subTasks"][1]["id"], "st2");
        assert_eq!(json["goal"]["targetDate"], "14 de junio 2026");
        assert_eq!(json["activity"][2]["type"], "ADD");
    }
}
