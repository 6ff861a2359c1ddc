//! Learning path tracker
//!
//! Tracks milestone completion per learning path. Completion sets are
//! keyed by path id so switching paths never loses progress.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::scoring::percent;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

const KEY: &str = "path_tracker";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathTrackerState {
    /// Completed milestone indices per path id.
    pub completed: HashMap<String, BTreeSet<usize>>,
    /// Currently displayed path, by catalog index.
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub enum PathTrackerEvent {
    SelectPath(usize),
    ToggleMilestone(usize),
}

pub struct PathTracker {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: PathTrackerState,
}

impl PathTracker {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, PathTrackerState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: PathTrackerEvent) -> Result<ViewFragment, AppError> {
        match event {
            PathTrackerEvent::SelectPath(index) => {
                if index < self.catalog.paths.len() {
                    self.state.selected = index;
                }
            }
            PathTrackerEvent::ToggleMilestone(index) => {
                if let Some(path) = self.catalog.paths.get(self.state.selected) {
                    if index < path.milestones.len() {
                        let set = self
                            .state
                            .completed
                            .entry(path.id.to_string())
                            .or_default();
                        if !set.remove(&index) {
                            set.insert(index);
                        }
                    }
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }

    fn selected_progress(&self) -> (usize, usize) {
        let Some(path) = self.catalog.paths.get(self.state.selected) else {
            return (0, 0);
        };
        let done = self
            .state
            .completed
            .get(path.id)
            .map(BTreeSet::len)
            .unwrap_or(0);
        (done, path.milestones.len())
    }
}

impl Widget for PathTracker {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(path) = self.catalog.paths.get(self.state.selected) else {
            return ViewFragment::new(KEY, "Learning paths").status("No paths available");
        };
        let done = self.state.completed.get(path.id).cloned().unwrap_or_default();
        let (count, total) = self.selected_progress();

        let mut fragment = ViewFragment::new(KEY, path.title);
        for (index, milestone) in path.milestones.iter().enumerate() {
            let mark = if done.contains(&index) { "[x]" } else { "[ ]" };
            fragment = fragment.line(format!("{mark} {milestone}"));
        }
        fragment.status(format!(
            "{count}/{total} milestones ({}%)",
            percent(count, total)
        ))
    }
}
