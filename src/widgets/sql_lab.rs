//! SQL lab
//!
//! Rubric-graded SQL challenges with a consecutive-pass streak. A
//! rejected (empty) submission never touches the streak.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::scoring::{evaluate_rubric, Evaluation, Streak};
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "sql_lab";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqlLabState {
    pub selected: usize,
    pub streak: Streak,
    pub last_verdict: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SqlLabEvent {
    SelectChallenge(usize),
    Submit(String),
}

pub struct SqlLab {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: SqlLabState,
}

impl SqlLab {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, SqlLabState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: SqlLabEvent) -> Result<ViewFragment, AppError> {
        match event {
            SqlLabEvent::SelectChallenge(index) => {
                if index < self.catalog.sql.len() {
                    self.state.selected = index;
                    self.state.last_verdict = None;
                }
            }
            SqlLabEvent::Submit(submission) => {
                if let Some(challenge) = self.catalog.sql.get(self.state.selected) {
                    match evaluate_rubric(&challenge.rubric, &submission) {
                        Evaluation::Rejected(message) => {
                            self.state.last_verdict = Some(message);
                        }
                        Evaluation::Scored(result) => {
                            self.state.streak.record(result.passed);
                            self.state.last_verdict = Some(result.message);
                        }
                    }
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for SqlLab {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(challenge) = self.catalog.sql.get(self.state.selected) else {
            return ViewFragment::new(KEY, "SQL lab").status("No challenges available");
        };

        let mut fragment = ViewFragment::new(KEY, challenge.title)
            .line(challenge.prompt)
            .line(format!("Streak: {}", self.state.streak.0));
        if let Some(verdict) = &self.state.last_verdict {
            fragment = fragment.status(verdict.clone());
        }
        fragment
    }
}
