//! Practice question drill
//!
//! Draws a uniform random question (with replacement) and reveals its
//! answer on demand. Random draw is the point here; the quiz widget is
//! the sequential one.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::picker::pick_random_index;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "drill";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillState {
    pub current: usize,
    pub revealed: bool,
    pub attempted: u32,
}

#[derive(Debug, Clone)]
pub enum DrillEvent {
    Draw,
    Reveal,
}

pub struct Drill {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: DrillState,
}

impl Drill {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, DrillState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: DrillEvent) -> Result<ViewFragment, AppError> {
        match event {
            DrillEvent::Draw => {
                if let Some(index) = pick_random_index(self.catalog.practice.len()) {
                    self.state.current = index;
                    self.state.revealed = false;
                    self.state.attempted += 1;
                }
            }
            DrillEvent::Reveal => {
                self.state.revealed = true;
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Drill {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(question) = self.catalog.practice.get(self.state.current) else {
            return ViewFragment::new(KEY, "Practice drill").status("No questions available");
        };

        let mut fragment = ViewFragment::new(KEY, "Practice drill").line(question.question);
        if self.state.revealed {
            fragment = fragment.line(question.answer);
        }
        fragment.status(format!("{} drawn", self.state.attempted))
    }
}
