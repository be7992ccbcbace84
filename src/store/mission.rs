//! Daily missions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionType {
    Learn,
    Review,
    Boss,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    Pending,
    Completed,
}

/// Page a mission's start button opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartTarget {
    Review,
    Dojo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub duration_min: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MissionType,
    pub duration_min: u32,
    pub xp_reward: u32,
    pub status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_tasks: Option<Vec<SubTask>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MissionType>,
    pub duration_min: Option<u32>,
    pub xp_reward: Option<u32>,
    pub status: Option<MissionStatus>,
    pub sub_tasks: Option<Vec<SubTask>>,
    pub topic: Option<String>,
    pub node_id: Option<String>,
}

impl Mission {
    pub fn apply(&mut self, patch: MissionPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(duration) = patch.duration_min {
            self.duration_min = duration;
        }
        if let Some(xp) = patch.xp_reward {
            self.xp_reward = xp;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if patch.sub_tasks.is_some() {
            self.sub_tasks = patch.sub_tasks;
        }
        if patch.topic.is_some() {
            self.topic = patch.topic;
        }
        if patch.node_id.is_some() {
            self.node_id = patch.node_id;
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MissionStatus::Completed
    }

    /// Review missions open the review page; everything else goes to the dojo
    pub fn start_target(&self) -> StartTarget {
        match self.kind {
            MissionType::Review => StartTarget::Review,
            MissionType::Learn | MissionType::Boss | MissionType::Project => StartTarget::Dojo,
        }
    }
}

/// Ordered mission list with lookup by id
#[derive(Debug, Clone, Default)]
pub struct MissionBoard {
    missions: Vec<Mission>,
}

impl MissionBoard {
    pub fn new(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    pub fn get(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// Merge `patch` into the mission with `id`. Unknown ids return `None`
    /// and leave the board untouched.
    pub fn update(&mut self, id: &str, patch: MissionPatch) -> Option<&Mission> {
        let mission = self.missions.iter_mut().find(|m| m.id == id)?;
        mission.apply(patch);
        Some(mission)
    }

    /// Planned minutes across every mission
    pub fn total_duration_min(&self) -> u32 {
        self.missions.iter().map(|m| m.duration_min).sum()
    }

    /// Whether today's plan does not fit in `available_min`
    pub fn exceeds_budget(&self, available_min: u32) -> bool {
        self.total_duration_min() > available_min
    }
}
