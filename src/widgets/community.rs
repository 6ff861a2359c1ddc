//! Community board
//!
//! Local-only post list. Posting with an empty title leaves the board
//! untouched apart from an inline message; posts render newest first.

use crate::error::AppError;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const KEY: &str = "community";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub posted_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunityState {
    pub posts: Vec<Post>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CommunityEvent {
    Post { title: String, body: String },
}

pub struct Community {
    store: StateStore,
    state: CommunityState,
}

impl Community {
    pub fn load(store: StateStore) -> Self {
        let state = store.get(KEY, CommunityState::default());
        Self { store, state }
    }

    pub fn handle(&mut self, event: CommunityEvent) -> Result<ViewFragment, AppError> {
        match event {
            CommunityEvent::Post { title, body } => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    self.state.message = Some("A title is required.".to_string());
                } else {
                    self.state.posts.push(Post {
                        id: Uuid::new_v4().to_string(),
                        title,
                        body: body.trim().to_string(),
                        posted_at: Utc::now().format("%Y-%m-%d %H:%M").to_string(),
                    });
                    self.state.message = None;
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Community {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let mut fragment = ViewFragment::new(KEY, "Community board");
        for post in self.state.posts.iter().rev() {
            fragment = fragment.line(format!("[{}] {}", post.posted_at, post.title));
        }
        match &self.state.message {
            Some(message) => fragment.status(message.clone()),
            None => fragment.status(format!("{} posts", self.state.posts.len())),
        }
    }
}
