//! Project workspace
//!
//! Pairs a project template with free-form notes and a randomly drawn
//! project prompt. Blank notes are dropped silently.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::picker::pick_random_index;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "workspace";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceState {
    pub selected_template: usize,
    pub notes: Vec<String>,
    pub prompt: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum WorkspaceEvent {
    SelectTemplate(usize),
    AddNote(String),
    DrawPrompt,
}

pub struct Workspace {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: WorkspaceState,
}

impl Workspace {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, WorkspaceState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: WorkspaceEvent) -> Result<ViewFragment, AppError> {
        match event {
            WorkspaceEvent::SelectTemplate(index) => {
                if index < self.catalog.templates.len() {
                    self.state.selected_template = index;
                }
            }
            WorkspaceEvent::AddNote(note) => {
                let trimmed = note.trim();
                if !trimmed.is_empty() {
                    self.state.notes.push(trimmed.to_string());
                }
            }
            WorkspaceEvent::DrawPrompt => {
                self.state.prompt = pick_random_index(self.catalog.prompts.len());
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Workspace {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(template) = self.catalog.templates.get(self.state.selected_template) else {
            return ViewFragment::new(KEY, "Workspace").status("No templates available");
        };

        let mut fragment = ViewFragment::new(KEY, template.name).line(template.summary);
        if let Some(index) = self.state.prompt {
            if let Some(prompt) = self.catalog.prompts.get(index) {
                fragment = fragment.line(format!("Prompt: {prompt}"));
            }
        }
        for note in &self.state.notes {
            fragment = fragment.line(format!("- {note}"));
        }
        fragment.status(format!("{} notes", self.state.notes.len()))
    }
}
