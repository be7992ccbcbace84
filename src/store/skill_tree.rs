//! Skill-tree graphs keyed by tree id

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tree served when a lookup names an unknown id
pub const DEFAULT_TREE_ID: &str = "fullstack";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Lesson,
    Project,
    Quiz,
    Boss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    Locked,
    Available,
    InProgress,
    Completed,
    /// Completed but due for review
    Decaying,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Locked => "LOCKED",
            NodeStatus::Available => "AVAILABLE",
            NodeStatus::InProgress => "IN_PROGRESS",
            NodeStatus::Completed => "COMPLETED",
            NodeStatus::Decaying => "DECAYING",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Programming,
    Languages,
    Cs,
    SoftSkills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: String,
    /// Canvas position of the node box's top-left corner
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub status: NodeStatus,
    pub category: Category,
    pub level: u32,
    /// Display text such as "45m" or "1.5h"
    pub estimated_time: String,
    pub xp_reward: u32,
}

/// Directed prerequisite edge. Endpoints are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLink {
    pub source: String,
    pub target: String,
}

impl SkillLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Stable identifier used for seeded jitter
    pub fn id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillTreeData {
    pub nodes: Vec<SkillNode>,
    pub links: Vec<SkillLink>,
}

impl SkillTreeData {
    pub fn node(&self, node_id: &str) -> Option<&SkillNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn count_with_status(&self, status: NodeStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSummary {
    pub id: String,
    pub name: String,
}

/// All trees plus the ordered selector list
#[derive(Debug, Clone, Default)]
pub struct SkillTrees {
    trees: HashMap<String, SkillTreeData>,
    available: Vec<TreeSummary>,
}

impl SkillTrees {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tree; the summary list keeps insertion order
    pub fn insert(&mut self, id: &str, name: &str, data: SkillTreeData) {
        if self.trees.insert(id.to_string(), data).is_none() {
            self.available.push(TreeSummary {
                id: id.to_string(),
                name: name.to_string(),
            });
        }
    }

    pub fn available_trees(&self) -> &[TreeSummary] {
        &self.available
    }

    /// Exact lookup, no fallback
    pub fn find_tree(&self, tree_id: &str) -> Option<&SkillTreeData> {
        self.trees.get(tree_id)
    }

    /// Lookup falling back to the default tree for unknown ids
    pub fn get_tree(&self, tree_id: &str) -> Option<&SkillTreeData> {
        self.find_tree(tree_id)
            .or_else(|| self.trees.get(DEFAULT_TREE_ID))
    }

    pub fn get_node(&self, tree_id: &str, node_id: &str) -> Option<&SkillNode> {
        self.get_tree(tree_id)?.node(node_id)
    }

    /// Set a node's status. Unknown trees and nodes return `None` and
    /// nothing changes; writes never fall back to the default tree.
    pub fn update_node_status(
        &mut self,
        tree_id: &str,
        node_id: &str,
        status: NodeStatus,
    ) -> Option<&SkillNode> {
        let node = self
            .trees
            .get_mut(tree_id)?
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)?;
        node.status = status;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_seed_shapes() {
        let trees = seed::skill_trees();
        let sizes: Vec<_> = trees
            .available_trees()
            .iter()
            .map(|t| {
                let tree = trees.find_tree(&t.id).unwrap();
                (t.id.as_str(), tree.nodes.len(), tree.links.len())
            })
            .collect();

        assert_eq!(
            sizes,
            vec![("fullstack", 11, 9), ("python-ds", 6, 6), ("mobile", 4, 3)]
        );
    }

    #[test]
    fn test_unknown_tree_falls_back_on_read() {
        let trees = seed::skill_trees();
        let fallback = trees.get_tree("does-not-exist").unwrap();
        assert_eq!(fallback, trees.find_tree(DEFAULT_TREE_ID).unwrap());
        assert!(trees.find_tree("does-not-exist").is_none());
        assert_eq!(
            trees.get_node("nope", "html-basics").unwrap().title,
            "HTML Básico"
        );
    }

    #[test]
    fn test_update_node_status() {
        let mut trees = seed::skill_trees();
        let node = trees
            .update_node_status("fullstack", "html-basics", NodeStatus::Locked)
            .unwrap();
        assert_eq!(node.status, NodeStatus::Locked);
        assert_eq!(
            trees.get_node("fullstack", "html-basics").unwrap().status,
            NodeStatus::Locked
        );
    }

    #[test]
    fn test_update_unknown_ids_change_nothing() {
        let mut trees = seed::skill_trees();
        let before = trees.find_tree("fullstack").cloned().unwrap();

        assert!(trees
            .update_node_status("fullstack", "ghost", NodeStatus::Completed)
            .is_none());
        assert!(trees
            .update_node_status("ghost-tree", "html-basics", NodeStatus::Locked)
            .is_none());
        assert_eq!(trees.find_tree("fullstack").unwrap(), &before);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&NodeStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        assert_eq!(NodeStatus::Decaying.to_string(), "DECAYING");
        assert!(serde_json::from_str::<NodeStatus>("\"FROZEN\"").is_err());
    }
}
