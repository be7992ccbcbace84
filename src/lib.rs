//! StudyForge - learning-progress dashboard backend
//!
//! Serves an in-memory learner model over a small JSON API and carries the
//! client-side view state that consumes it.
//!
//! ## Parts
//!
//! - **Store**: seeded user, missions, goal, activity and skill trees
//! - **Routes**: dashboard, skill-tree, health and suggestion endpoints
//! - **Suggest**: AI study suggestion with a built-in fallback
//! - **Client**: typed HTTP client for the API
//! - **Canvas**: skill-tree camera, link geometry, themes and scene
//! - **Views**: review session, planner and community pages

pub mod canvas;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;
pub mod suggest;
pub mod views;

pub use config::Args;
pub use error::{ApiError, Result};
pub use server::{build_router, run, serve, AppState};
pub use store::Store;
