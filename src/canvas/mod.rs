//! Skill-tree canvas view state
//!
//! Provides:
//! - Camera pan/zoom controller
//! - Link path geometry for each connection style
//! - Theme registry
//! - Node visuals, detail panel and minimap
//! - Scene assembly for a renderer

pub mod camera;
pub mod geometry;
pub mod scene;
pub mod theme;
pub mod visuals;

pub use camera::{Camera, CameraController, PointerTarget};
pub use geometry::JitterMode;
pub use scene::{render, Scene, SkillTreeCanvas};
pub use theme::{ConnectionStyle, NodeShape, ThemeConfig, ThemeId};
pub use visuals::{NodeDetail, NodeIcon, NodeVisual};
