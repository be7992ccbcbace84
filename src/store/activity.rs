//! Activity feed, newest first

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label given to entries appended at runtime
pub const JUST_NOW: &str = "Justo ahora";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Complete,
    Achievement,
    Add,
    Review,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Relative, human-readable label
    pub timestamp: String,
}

/// Caller-supplied part of a new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    pub fn all(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front with a fresh id
    pub fn append(&mut self, entry: NewActivity) -> &ActivityEntry {
        let entry = ActivityEntry {
            id: format!("a{}", Uuid::new_v4().simple()),
            message: entry.message,
            kind: entry.kind,
            timestamp: JUST_NOW.to_string(),
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }
}
