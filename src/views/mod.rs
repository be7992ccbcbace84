//! Page state for the secondary views
//!
//! - `review`: flashcard session flow
//! - `planner`: week calendar, pace simulator and backlog
//! - `schedule`: calendar arithmetic used by the planner
//! - `community`: leaderboard, guilds and challenges
//! - `library`: study resources with tab, search and toolbar filters

pub mod community;
pub mod library;
pub mod planner;
pub mod review;
pub mod schedule;

pub use community::{CommunityTab, CommunityView};
pub use library::{filter_resources, LibraryFilter, LibraryTab, LibraryView};
pub use planner::{PlannerView, PlannerViewMode};
pub use review::{Rating, ReviewFilter, ReviewMode, ReviewSession};
pub use schedule::{CalendarTask, PlannerSettings};
