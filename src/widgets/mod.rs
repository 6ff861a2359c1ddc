//! Widget controllers
//!
//! Each widget owns one key in the state store and follows the same
//! shape: load state (falling back to a default), handle an event by
//! mutating and persisting the whole slice, then render a fresh view
//! fragment. Rendering is pure; calling it twice on the same state
//! yields the same fragment.

use crate::view::ViewFragment;

pub mod case_sim;
pub mod community;
pub mod dashboards;
pub mod drill;
pub mod experiment;
pub mod interview;
pub mod metrics;
pub mod path_tracker;
pub mod quiz;
pub mod resume;
pub mod sql_lab;
pub mod workspace;

pub use case_sim::{CaseSim, CaseSimEvent};
pub use community::{Community, CommunityEvent};
pub use dashboards::{Dashboards, DashboardsEvent};
pub use drill::{Drill, DrillEvent};
pub use experiment::{Experiment, ExperimentEvent};
pub use interview::{Interview, InterviewEvent};
pub use metrics::{Metrics, MetricsEvent};
pub use path_tracker::{PathTracker, PathTrackerEvent};
pub use quiz::{Quiz, QuizEvent};
pub use resume::{Resume, ResumeEvent};
pub use sql_lab::{SqlLab, SqlLabEvent};
pub use workspace::{Workspace, WorkspaceEvent};

/// Common surface over every widget controller.
pub trait Widget {
    /// Stable identifier, also the widget's store key prefix.
    fn widget_id(&self) -> &'static str;

    /// Render the current state. Pure and repeatable.
    fn render(&self) -> ViewFragment;
}
