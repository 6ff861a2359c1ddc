//! Metric registry
//!
//! Named metric definitions with an edit history. Re-adding a metric
//! whose name matches an existing entry case-insensitively updates it
//! in place; a changed formula flags the history line. The name match
//! is exact (ignoring case), never fuzzy.

use crate::error::AppError;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use chrono::Utc;
use serde::{Deserialize, Serialize};

const KEY: &str = "metrics";

/// History lines shown per render, most recent first.
const HISTORY_DISPLAY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub name: String,
    pub formula: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsState {
    pub entries: Vec<MetricEntry>,
    pub history: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum MetricsEvent {
    Add {
        name: String,
        formula: String,
        owner: String,
    },
}

pub struct Metrics {
    store: StateStore,
    state: MetricsState,
}

impl Metrics {
    pub fn load(store: StateStore) -> Self {
        let state = store.get(KEY, MetricsState::default());
        Self { store, state }
    }

    pub fn handle(&mut self, event: MetricsEvent) -> Result<ViewFragment, AppError> {
        match event {
            MetricsEvent::Add {
                name,
                formula,
                owner,
            } => self.upsert(name, formula, owner),
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }

    fn upsert(&mut self, name: String, formula: String, owner: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let stamp = Utc::now().format("%Y-%m-%d %H:%M").to_string();

        let existing = self
            .state
            .entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(&name));

        match existing {
            Some(index) => {
                let entry = &mut self.state.entries[index];
                let formula_changed = entry.formula != formula;
                entry.formula = formula;
                entry.owner = owner;
                let flag = if formula_changed {
                    " (formula changed)"
                } else {
                    ""
                };
                self.state
                    .history
                    .push(format!("{stamp} updated {}{flag}", entry.name));
            }
            None => {
                self.state.history.push(format!("{stamp} added {name}"));
                self.state.entries.push(MetricEntry {
                    name,
                    formula,
                    owner,
                });
            }
        }
    }
}

impl Widget for Metrics {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let mut fragment = ViewFragment::new(KEY, "Metric registry");
        for entry in &self.state.entries {
            fragment = fragment.line(format!(
                "{} = {} (owner: {})",
                entry.name, entry.formula, entry.owner
            ));
        }
        for line in self.state.history.iter().rev().take(HISTORY_DISPLAY) {
            fragment = fragment.line(format!("history: {line}"));
        }
        fragment.status(format!("{} metrics", self.state.entries.len()))
    }
}
