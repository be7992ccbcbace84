//! Per-node presentation derived from node data and the active theme

use serde::Serialize;

use super::theme::{NodeShape, ThemeConfig, ThemeId};
use crate::store::{Category, NodeStatus, NodeType, SkillNode};

/// Scale of the minimap relative to the canvas
pub const MINIMAP_SCALE: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeIcon {
    Skull,
    Zap,
    Layout,
    Terminal,
    Code,
    Database,
    Book,
}

impl NodeIcon {
    /// Glyph size in px; boss icons are drawn larger
    pub fn size(self) -> u32 {
        match self {
            NodeIcon::Zap => 24,
            _ => 20,
        }
    }
}

/// Corner badge on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Check,
    /// Needs review before it fades
    Decay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeVisual {
    pub shape: NodeShape,
    pub diameter: f64,
    pub accent: &'static str,
    pub icon: NodeIcon,
    pub badge: Option<Badge>,
    /// Greyed out and translucent
    pub dimmed: bool,
    /// Animated rings around the current node
    pub highlighted: bool,
}

pub fn node_icon(node: &SkillNode, theme: ThemeId) -> NodeIcon {
    if theme == ThemeId::Pirate && node.status == NodeStatus::Locked {
        return NodeIcon::Skull;
    }

    match node.kind {
        NodeType::Boss => return NodeIcon::Zap,
        NodeType::Project => return NodeIcon::Layout,
        NodeType::Quiz => return NodeIcon::Terminal,
        NodeType::Lesson => {}
    }

    match node.category {
        Category::Programming => NodeIcon::Code,
        Category::Cs => NodeIcon::Database,
        Category::Languages | Category::SoftSkills => NodeIcon::Book,
    }
}

pub fn node_visual(node: &SkillNode, theme: &ThemeConfig) -> NodeVisual {
    let (diameter, badge, dimmed) = match node.status {
        NodeStatus::InProgress => (80.0, None, false),
        NodeStatus::Completed => (64.0, Some(Badge::Check), false),
        NodeStatus::Decaying => (64.0, Some(Badge::Decay), false),
        NodeStatus::Available => (56.0, None, false),
        NodeStatus::Locked => (48.0, None, true),
    };

    NodeVisual {
        shape: theme.node_shape,
        diameter,
        accent: theme.accent_color,
        icon: node_icon(node, theme.id),
        badge,
        dimmed,
        highlighted: node.status == NodeStatus::InProgress,
    }
}

/// Side panel for the selected node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetail {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// "NVL.<level>"
    pub level_label: String,
    pub estimated_time: String,
    /// Only for completed and in-progress nodes
    pub progress_label: Option<&'static str>,
    pub action_label: &'static str,
}

impl NodeDetail {
    pub fn for_node(node: &SkillNode) -> Self {
        let progress_label = match node.status {
            NodeStatus::Completed => Some("100%"),
            NodeStatus::InProgress => Some("35%"),
            _ => None,
        };
        let action_label = if node.status == NodeStatus::Completed {
            "REPASAR NODO"
        } else {
            "ENTRAR AL DOJO"
        };

        Self {
            title: node.title.clone(),
            description: node.description.clone(),
            category: node.category,
            level_label: format!("NVL.{}", node.level),
            estimated_time: node.estimated_time.clone(),
            progress_label,
            action_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimapDot {
    pub x: f64,
    pub y: f64,
    pub completed: bool,
}

/// Radar dots, already scaled down
pub fn minimap(nodes: &[SkillNode]) -> Vec<MinimapDot> {
    nodes
        .iter()
        .map(|n| MinimapDot {
            x: n.x * MINIMAP_SCALE,
            y: n.y * MINIMAP_SCALE,
            completed: n.status == NodeStatus::Completed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn fullstack(id: &str) -> SkillNode {
        seed::skill_trees()
            .get_node("fullstack", id)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_icons() {
        let react = fullstack("react-intro");
        assert_eq!(node_icon(&react, ThemeId::Pirate), NodeIcon::Skull);
        assert_eq!(node_icon(&react, ThemeId::Cosmic), NodeIcon::Code);

        assert_eq!(node_icon(&fullstack("express-api"), ThemeId::Cosmic), NodeIcon::Zap);
        assert_eq!(node_icon(&fullstack("git-init"), ThemeId::Cosmic), NodeIcon::Layout);
        assert_eq!(node_icon(&fullstack("english-tech"), ThemeId::Cosmic), NodeIcon::Terminal);

        let mut lesson = fullstack("html-basics");
        lesson.category = Category::Cs;
        assert_eq!(node_icon(&lesson, ThemeId::Ink), NodeIcon::Database);
        lesson.category = Category::SoftSkills;
        assert_eq!(node_icon(&lesson, ThemeId::Ink), NodeIcon::Book);
        assert_eq!(NodeIcon::Zap.size(), 24);
    }

    #[test]
    fn test_visual_by_status() {
        let theme = ThemeId::Holo.config();

        let current = node_visual(&fullstack("dom-manipulation"), theme);
        assert_eq!(current.diameter, 80.0);
        assert!(current.highlighted);
        assert_eq!(current.shape, NodeShape::Hexagon);

        let done = node_visual(&fullstack("html-basics"), theme);
        assert_eq!(done.badge, Some(Badge::Check));

        let fading = node_visual(&fullstack("js-syntax"), theme);
        assert_eq!(fading.badge, Some(Badge::Decay));
        assert!(!fading.dimmed);

        let locked = node_visual(&fullstack("vue-intro"), theme);
        assert_eq!(locked.diameter, 48.0);
        assert!(locked.dimmed);
    }

    #[test]
    fn test_detail_labels() {
        let done = NodeDetail::for_node(&fullstack("css-basics"));
        assert_eq!(done.progress_label, Some("100%"));
        assert_eq!(done.action_label, "REPASAR NODO");

        let current = NodeDetail::for_node(&fullstack("dom-manipulation"));
        assert_eq!(current.progress_label, Some("35%"));
        assert_eq!(current.action_label, "ENTRAR AL DOJO");
        assert_eq!(current.level_label, "NVL.2");

        assert_eq!(NodeDetail::for_node(&fullstack("fetch-api")).progress_label, None);
    }

    #[test]
    fn test_minimap_scale() {
        let dots = minimap(&[fullstack("html-basics")]);
        assert_eq!(dots[0].x, 400.0 * MINIMAP_SCALE);
        assert!(dots[0].completed);
    }
}
