use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Ahead,
    Behind,
    OnTrack,
}

/// Long-term learning goal shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub title: String,
    /// Display text, not parsed
    pub target_date: String,
    /// Not clamped
    pub progress_percent: i32,
    pub completed_nodes: u32,
    pub total_nodes: u32,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub target_date: Option<String>,
    pub progress_percent: Option<i32>,
    pub completed_nodes: Option<u32>,
    pub total_nodes: Option<u32>,
    pub status: Option<GoalStatus>,
}

impl Goal {
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.target_date {
            self.target_date = date;
        }
        if let Some(percent) = patch.progress_percent {
            self.progress_percent = percent;
        }
        if let Some(done) = patch.completed_nodes {
            self.completed_nodes = done;
        }
        if let Some(total) = patch.total_nodes {
            self.total_nodes = total;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn remaining_nodes(&self) -> u32 {
        self.total_nodes.saturating_sub(self.completed_nodes)
    }
}
