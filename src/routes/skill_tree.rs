//! Skill-tree routes
//!
//! Reads fall back to the default tree for unknown ids unless strict mode
//! is on. Writes never fall back.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::server::AppState;
use crate::store::{NodeStatus, SkillNode, SkillTreeData, TreeSummary};

/// PATCH body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<NodeStatus>,
}

/// GET /api/skill-tree/available
pub async fn get_available_trees(State(state): State<AppState>) -> Json<Vec<TreeSummary>> {
    let store = state.store.read().await;
    Json(store.skill_trees.available_trees().to_vec())
}

/// GET /api/skill-tree/:treeId
pub async fn get_skill_tree(
    State(state): State<AppState>,
    Path(tree_id): Path<String>,
) -> Result<Json<SkillTreeData>> {
    let store = state.store.read().await;
    let trees = &store.skill_trees;

    let tree = if state.strict_tree_ids {
        trees.find_tree(&tree_id)
    } else {
        if trees.find_tree(&tree_id).is_none() {
            debug!(tree_id = %tree_id, "Unknown tree, serving default");
        }
        trees.get_tree(&tree_id)
    };

    tree.cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Tree not found".to_string()))
}

/// PATCH /api/skill-tree/:treeId/nodes/:nodeId
pub async fn update_node_status(
    State(state): State<AppState>,
    Path((tree_id, node_id)): Path<(String, String)>,
    body: std::result::Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<SkillNode>> {
    let status = body
        .ok()
        .and_then(|Json(update)| update.status)
        .ok_or_else(|| ApiError::Validation("Status is required".to_string()))?;

    let mut store = state.store.write().await;
    let node = store
        .skill_trees
        .update_node_status(&tree_id, &node_id, status)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Node not found".to_string()))?;

    info!(tree_id = %tree_id, node_id = %node_id, status = %status, "Node status updated");
    Ok(Json(node))
}
