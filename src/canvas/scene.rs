//! Scene assembly and the canvas page state

use serde::Serialize;
use std::collections::HashMap;

use super::camera::{Camera, CameraController, PointerTarget};
use super::geometry::{path_data, JitterMode};
use super::theme::{LinkStroke, ThemeConfig, ThemeId};
use super::visuals::{minimap, node_visual, MinimapDot, NodeDetail, NodeVisual};
use crate::store::{NodeStatus, SkillNode, SkillTreeData, TreeSummary, DEFAULT_TREE_ID};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPath {
    pub source: String,
    pub target: String,
    pub d: String,
    pub base: LinkStroke,
    /// Present when the target node is in progress
    pub flow: Option<LinkStroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub visual: NodeVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub transform: String,
    pub links: Vec<LinkPath>,
    pub nodes: Vec<PositionedNode>,
}

/// Lay out one frame. Links whose endpoints are missing are dropped.
pub fn render(
    tree: &SkillTreeData,
    theme: &ThemeConfig,
    camera: &Camera,
    jitter: JitterMode,
) -> Scene {
    let by_id: HashMap<&str, &SkillNode> =
        tree.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let links = tree
        .links
        .iter()
        .filter_map(|link| {
            let source = by_id.get(link.source.as_str())?;
            let target = by_id.get(link.target.as_str())?;
            let mut rng = jitter.rng_for(&link.id());

            Some(LinkPath {
                source: link.source.clone(),
                target: link.target.clone(),
                d: path_data(theme.connection_style, source, target, &mut rng),
                base: theme.base_stroke(),
                flow: (target.status == NodeStatus::InProgress).then(|| theme.flow_stroke()),
            })
        })
        .collect();

    let nodes = tree
        .nodes
        .iter()
        .map(|n| PositionedNode {
            id: n.id.clone(),
            x: n.x,
            y: n.y,
            title: n.title.clone(),
            visual: node_visual(n, theme),
        })
        .collect();

    Scene {
        transform: camera.transform(),
        links,
        nodes,
    }
}

/// State of the skill-tree page
#[derive(Debug, Clone)]
pub struct SkillTreeCanvas {
    available: Vec<TreeSummary>,
    tree_id: String,
    tree: SkillTreeData,
    theme: ThemeId,
    theme_menu_open: bool,
    camera: CameraController,
    selected: Option<String>,
    search_query: String,
    viewport: (f64, f64),
    jitter: JitterMode,
}

impl SkillTreeCanvas {
    pub fn new(available: Vec<TreeSummary>, tree: SkillTreeData, viewport: (f64, f64)) -> Self {
        Self {
            available,
            tree_id: DEFAULT_TREE_ID.to_string(),
            tree,
            theme: ThemeId::default(),
            theme_menu_open: false,
            camera: CameraController::default(),
            selected: None,
            search_query: String::new(),
            viewport,
            jitter: JitterMode::default(),
        }
    }

    pub fn with_jitter(mut self, jitter: JitterMode) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn tree_id(&self) -> &str {
        &self.tree_id
    }

    pub fn tree(&self) -> &SkillTreeData {
        &self.tree
    }

    pub fn available_trees(&self) -> &[TreeSummary] {
        &self.available
    }

    /// Swap in a freshly fetched tree; selection is cleared
    pub fn load_tree(&mut self, tree_id: &str, tree: SkillTreeData) {
        self.tree_id = tree_id.to_string();
        self.tree = tree;
        self.selected = None;
    }

    /// Mirror a status change the server confirmed
    pub fn apply_node_update(&mut self, updated: &SkillNode) {
        if let Some(node) = self.tree.nodes.iter_mut().find(|n| n.id == updated.id) {
            node.status = updated.status;
        }
    }

    pub fn theme(&self) -> &'static ThemeConfig {
        self.theme.config()
    }

    pub fn theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    pub fn toggle_theme_menu(&mut self) {
        self.theme_menu_open = !self.theme_menu_open;
    }

    /// Picking a theme closes the menu
    pub fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        self.theme_menu_open = false;
    }

    pub fn camera(&self) -> Camera {
        self.camera.camera()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    pub fn pointer_down(&mut self, target: PointerTarget, x: f64, y: f64) {
        self.camera.pointer_down(&target, x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.camera.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.camera.pointer_up();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.camera.wheel(delta_y);
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    /// Select without moving the camera. Unknown ids are ignored.
    pub fn click_node(&mut self, node_id: &str) {
        if self.tree.node(node_id).is_some() {
            self.selected = Some(node_id.to_string());
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_node(&self) -> Option<&SkillNode> {
        self.tree.node(self.selected.as_deref()?)
    }

    pub fn detail(&self) -> Option<NodeDetail> {
        self.selected_node().map(NodeDetail::for_node)
    }

    /// Centre the viewport on a node and select it. Returns false, changing
    /// nothing, when the id is unknown.
    pub fn center_on_node(&mut self, node_id: &str) -> bool {
        let Some(node) = self.tree.node(node_id) else {
            return false;
        };
        let (w, h) = self.viewport;
        self.camera.center_on(node.x, node.y, w, h);
        self.selected = Some(node.id.clone());
        true
    }

    /// "Centrar" button: first node of the tree
    pub fn center(&mut self) -> bool {
        match self.tree.nodes.first().map(|n| n.id.clone()) {
            Some(id) => self.center_on_node(&id),
            None => false,
        }
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Ids of nodes whose title contains the query, ignoring case
    pub fn search_matches(&self) -> Vec<&str> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.tree
            .nodes
            .iter()
            .filter(|n| n.title.to_lowercase().contains(&query))
            .map(|n| n.id.as_str())
            .collect()
    }

    pub fn scene(&self) -> Scene {
        render(&self.tree, self.theme(), &self.camera(), self.jitter)
    }

    pub fn minimap(&self) -> Vec<MinimapDot> {
        minimap(&self.tree.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, SkillLink};

    fn canvas() -> SkillTreeCanvas {
        let trees = seed::skill_trees();
        SkillTreeCanvas::new(
            trees.available_trees().to_vec(),
            trees.find_tree("fullstack").cloned().unwrap(),
            (1200.0, 800.0),
        )
    }

    #[test]
    fn test_dangling_links_are_skipped() {
        let mut tree = seed::skill_trees().find_tree("mobile").cloned().unwrap();
        tree.links.push(SkillLink::new("dart-basics", "ghost"));
        tree.links.push(SkillLink::new("nobody", "state-mgmt"));

        let scene = render(
            &tree,
            ThemeId::Blueprint.config(),
            &Camera::default(),
            JitterMode::Seeded,
        );
        assert_eq!(scene.links.len(), 3);
        assert_eq!(scene.nodes.len(), 4);
    }

    #[test]
    fn test_flowing_links_target_in_progress() {
        let scene = canvas().scene();
        let flowing: Vec<_> = scene
            .links
            .iter()
            .filter(|l| l.flow.is_some())
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(flowing, vec!["dom-manipulation"]);
        assert_eq!(scene.transform, "translate(-200px, -100px) scale(1)");
    }

    #[test]
    fn test_center_on_node_selects() {
        let mut canvas = canvas();
        canvas.wheel(500.0);
        let zoom = canvas.camera().zoom;

        assert!(canvas.center_on_node("fetch-api"));
        let cam = canvas.camera();
        assert_eq!(cam.x, 600.0 - 1200.0 * zoom);
        assert_eq!(cam.y, 400.0 - 300.0 * zoom);
        assert_eq!(cam.zoom, zoom);
        assert_eq!(canvas.selected_node().unwrap().id, "fetch-api");
    }

    #[test]
    fn test_center_on_unknown_node_is_noop() {
        let mut canvas = canvas();
        canvas.click_node("css-basics");
        let before = canvas.camera();

        assert!(!canvas.center_on_node("ghost"));
        assert_eq!(canvas.camera(), before);
        assert_eq!(canvas.selected_node().unwrap().id, "css-basics");
    }

    #[test]
    fn test_center_button_uses_first_node() {
        let mut canvas = canvas();
        assert!(canvas.center());
        assert_eq!(canvas.camera().x, 600.0 - 400.0);
        assert_eq!(canvas.detail().unwrap().title, "HTML Básico");
    }

    #[test]
    fn test_theme_menu_and_tree_switch() {
        let mut canvas = canvas();
        canvas.toggle_theme_menu();
        assert!(canvas.theme_menu_open());
        canvas.set_theme(ThemeId::Pirate);
        assert!(!canvas.theme_menu_open());
        assert_eq!(canvas.theme().label, "Capitán de Navío");

        canvas.click_node("html-basics");
        let python = seed::skill_trees().find_tree("python-ds").cloned().unwrap();
        canvas.load_tree("python-ds", python);
        assert_eq!(canvas.tree_id(), "python-ds");
        assert!(canvas.selected_node().is_none());
    }

    #[test]
    fn test_search_and_updates() {
        let mut canvas = canvas();
        canvas.set_search("intro");
        assert_eq!(canvas.search_matches(), vec!["react-intro", "vue-intro"]);

        let mut node = canvas.tree().node("react-intro").cloned().unwrap();
        node.status = NodeStatus::Available;
        canvas.apply_node_update(&node);
        assert_eq!(
            canvas.tree().node("react-intro").unwrap().status,
            NodeStatus::Available
        );
    }
}
