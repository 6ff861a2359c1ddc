//! Experiment plan builder
//!
//! A small form with required fields. Saving with a missing field
//! surfaces an inline message and keeps the input for correction;
//! a valid save stamps the plan with the save time.

use crate::error::AppError;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use chrono::Utc;
use serde::{Deserialize, Serialize};

const KEY: &str = "experiment";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentState {
    pub hypothesis: String,
    pub primary_metric: String,
    pub segment: String,
    pub duration: String,
    pub saved_at: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ExperimentEvent {
    SetHypothesis(String),
    SetPrimaryMetric(String),
    SetSegment(String),
    SetDuration(String),
    Save,
}

pub struct Experiment {
    store: StateStore,
    state: ExperimentState,
}

impl Experiment {
    pub fn load(store: StateStore) -> Self {
        let state = store.get(KEY, ExperimentState::default());
        Self { store, state }
    }

    pub fn handle(&mut self, event: ExperimentEvent) -> Result<ViewFragment, AppError> {
        match event {
            ExperimentEvent::SetHypothesis(value) => self.state.hypothesis = value,
            ExperimentEvent::SetPrimaryMetric(value) => self.state.primary_metric = value,
            ExperimentEvent::SetSegment(value) => self.state.segment = value,
            ExperimentEvent::SetDuration(value) => self.state.duration = value,
            ExperimentEvent::Save => {
                if self.state.hypothesis.trim().is_empty() {
                    self.state.message = Some("Hypothesis is required.".to_string());
                } else if self.state.primary_metric.trim().is_empty() {
                    self.state.message = Some("Pick a primary metric.".to_string());
                } else {
                    self.state.saved_at =
                        Some(Utc::now().format("%Y-%m-%d %H:%M UTC").to_string());
                    self.state.message = Some("Plan saved.".to_string());
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Experiment {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let mut fragment = ViewFragment::new(KEY, "Experiment plan")
            .line(format!("Hypothesis: {}", self.state.hypothesis))
            .line(format!("Primary metric: {}", self.state.primary_metric))
            .line(format!("Segment: {}", self.state.segment))
            .line(format!("Duration: {}", self.state.duration));
        if let Some(saved_at) = &self.state.saved_at {
            fragment = fragment.line(format!("Saved: {saved_at}"));
        }
        if let Some(message) = &self.state.message {
            fragment = fragment.status(message.clone());
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> (tempfile::TempDir, Experiment) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        (dir, Experiment::load(store))
    }

    #[test]
    fn test_save_requires_hypothesis() {
        let (_dir, mut builder) = builder();
        let view = builder.handle(ExperimentEvent::Save).expect("save");
        assert_eq!(view.status.as_deref(), Some("Hypothesis is required."));
        assert!(builder.state.saved_at.is_none());
    }

    #[test]
    fn test_invalid_save_preserves_input() {
        let (_dir, mut builder) = builder();
        builder
            .handle(ExperimentEvent::SetHypothesis(
                "Shorter onboarding lifts activation".to_string(),
            ))
            .expect("set");
        let view = builder.handle(ExperimentEvent::Save).expect("save");
        assert_eq!(view.status.as_deref(), Some("Pick a primary metric."));
        assert_eq!(
            builder.state.hypothesis,
            "Shorter onboarding lifts activation"
        );
    }

    #[test]
    fn test_valid_save_stamps_time() {
        let (_dir, mut builder) = builder();
        builder
            .handle(ExperimentEvent::SetHypothesis("Fewer steps lift activation".to_string()))
            .expect("set");
        builder
            .handle(ExperimentEvent::SetPrimaryMetric("Activation rate".to_string()))
            .expect("set");
        let view = builder.handle(ExperimentEvent::Save).expect("save");
        assert_eq!(view.status.as_deref(), Some("Plan saved."));
        assert!(builder.state.saved_at.is_some());
    }
}
