//! Interview question picker
//!
//! Draws a random interview question; the last draw persists so the
//! same question greets the user on reload.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::picker::pick_random_index;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "interview";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewState {
    pub selected: usize,
    pub drawn: u32,
}

#[derive(Debug, Clone)]
pub enum InterviewEvent {
    Draw,
}

pub struct Interview {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: InterviewState,
}

impl Interview {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, InterviewState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: InterviewEvent) -> Result<ViewFragment, AppError> {
        match event {
            InterviewEvent::Draw => {
                if let Some(index) = pick_random_index(self.catalog.interview.len()) {
                    self.state.selected = index;
                    self.state.drawn += 1;
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Interview {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(question) = self.catalog.interview.get(self.state.selected) else {
            return ViewFragment::new(KEY, "Interview practice").status("No questions available");
        };

        ViewFragment::new(KEY, "Interview practice")
            .line(question.question)
            .line(format!("Focus: {}", question.focus))
            .status(format!("{} drawn", self.state.drawn))
    }
}
