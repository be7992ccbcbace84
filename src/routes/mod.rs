//! HTTP routes

pub mod dashboard;
pub mod health;
pub mod skill_tree;
pub mod suggestion;

pub use dashboard::get_dashboard;
pub use health::{health, welcome, HealthResponse, WelcomeResponse};
pub use skill_tree::{get_available_trees, get_skill_tree, update_node_status, StatusUpdate};
pub use suggestion::get_suggestion;
