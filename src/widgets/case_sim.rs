//! Case interview simulator
//!
//! Free-text case answers graded by concept-coverage keyword count.
//! This policy is deliberately separate from the SQL lab rubric; the
//! two widgets never share thresholds or state.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::scoring::{evaluate_keywords, Evaluation};
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "case_sim";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseSimState {
    pub selected: usize,
    pub attempts: u32,
    pub last_verdict: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CaseSimEvent {
    SelectCase(usize),
    Submit(String),
}

pub struct CaseSim {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: CaseSimState,
}

impl CaseSim {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, CaseSimState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: CaseSimEvent) -> Result<ViewFragment, AppError> {
        match event {
            CaseSimEvent::SelectCase(index) => {
                if index < self.catalog.cases.len() {
                    self.state.selected = index;
                    self.state.last_verdict = None;
                }
            }
            CaseSimEvent::Submit(answer) => {
                if let Some(case) = self.catalog.cases.get(self.state.selected) {
                    match evaluate_keywords(&case.keywords, &answer) {
                        Evaluation::Rejected(message) => {
                            self.state.last_verdict = Some(message);
                        }
                        Evaluation::Scored(verdict) => {
                            self.state.attempts += 1;
                            self.state.last_verdict = Some(verdict.message);
                        }
                    }
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for CaseSim {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(case) = self.catalog.cases.get(self.state.selected) else {
            return ViewFragment::new(KEY, "Case simulator").status("No cases available");
        };

        let mut fragment = ViewFragment::new(KEY, case.title)
            .line(case.prompt)
            .line(format!("Attempts: {}", self.state.attempts));
        if let Some(verdict) = &self.state.last_verdict {
            fragment = fragment.status(verdict.clone());
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> (tempfile::TempDir, CaseSim) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        let catalog = Arc::new(Catalog::builtin().expect("catalog"));
        (dir, CaseSim::load(store, catalog))
    }

    #[test]
    fn test_covered_answer_passes() {
        let (_dir, mut sim) = sim();
        let view = sim
            .handle(CaseSimEvent::Submit(
                "I would cut churn by cohort and segment to find where it spiked.".to_string(),
            ))
            .expect("submit");
        assert!(view.status.as_deref().unwrap_or("").starts_with("Strong answer"));
        assert!(view.lines.contains(&"Attempts: 1".to_string()));
    }

    #[test]
    fn test_thin_answer_asks_for_revision() {
        let (_dir, mut sim) = sim();
        let view = sim
            .handle(CaseSimEvent::Submit("Ship more features.".to_string()))
            .expect("submit");
        assert!(view.status.as_deref().unwrap_or("").starts_with("Revise"));
    }

    #[test]
    fn test_empty_answer_does_not_count_as_attempt() {
        let (_dir, mut sim) = sim();
        let view = sim.handle(CaseSimEvent::Submit("\n".to_string())).expect("submit");
        assert!(view.lines.contains(&"Attempts: 0".to_string()));
        assert_eq!(view.status.as_deref(), Some("Write something first."));
    }

    #[test]
    fn test_select_clears_verdict() {
        let (_dir, mut sim) = sim();
        sim.handle(CaseSimEvent::Submit("churn cohort".to_string())).expect("submit");
        let view = sim.handle(CaseSimEvent::SelectCase(1)).expect("select");
        assert_eq!(view.status, None);
    }
}
