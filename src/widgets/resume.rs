//! Resume and portfolio generators
//!
//! One profile feeds two derived views: a resume summary and a
//! portfolio listing. Both are plain renders of the same state.

use crate::error::AppError;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};

const KEY: &str = "resume";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum ResumeEvent {
    SetName(String),
    SetRole(String),
    AddSkill(String),
    AddProject(String),
}

pub struct Resume {
    store: StateStore,
    state: Profile,
}

impl Resume {
    pub fn load(store: StateStore) -> Self {
        let state = store.get(KEY, Profile::default());
        Self { store, state }
    }

    pub fn handle(&mut self, event: ResumeEvent) -> Result<ViewFragment, AppError> {
        match event {
            ResumeEvent::SetName(name) => self.state.name = name.trim().to_string(),
            ResumeEvent::SetRole(role) => self.state.role = role.trim().to_string(),
            ResumeEvent::AddSkill(skill) => {
                let trimmed = skill.trim();
                if !trimmed.is_empty() {
                    self.state.skills.push(trimmed.to_string());
                }
            }
            ResumeEvent::AddProject(project) => {
                let trimmed = project.trim();
                if !trimmed.is_empty() {
                    self.state.projects.push(trimmed.to_string());
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }

    /// Portfolio view over the same profile.
    pub fn render_portfolio(&self) -> ViewFragment {
        let mut fragment = ViewFragment::new(KEY, format!("{} | Portfolio", self.state.name));
        for project in &self.state.projects {
            fragment = fragment.line(project.clone());
        }
        fragment.status(format!("{} projects", self.state.projects.len()))
    }
}

impl Widget for Resume {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let mut fragment = ViewFragment::new(KEY, self.state.name.clone())
            .line(self.state.role.clone())
            .line(format!("Skills: {}", self.state.skills.join(", ")));
        for project in &self.state.projects {
            fragment = fragment.line(format!("Project: {project}"));
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> (tempfile::TempDir, Resume) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        (dir, Resume::load(store))
    }

    #[test]
    fn test_both_views_derive_from_one_profile() {
        let (_dir, mut resume) = resume();
        resume
            .handle(ResumeEvent::SetName("Dana Whitfield".to_string()))
            .expect("set");
        resume
            .handle(ResumeEvent::AddProject("Retention deep dive".to_string()))
            .expect("add");

        let cv = resume.render();
        let portfolio = resume.render_portfolio();
        assert_eq!(cv.title, "Dana Whitfield");
        assert_eq!(portfolio.title, "Dana Whitfield | Portfolio");
        assert!(portfolio.lines.contains(&"Retention deep dive".to_string()));
    }

    #[test]
    fn test_blank_skill_is_dropped() {
        let (_dir, mut resume) = resume();
        resume.handle(ResumeEvent::AddSkill("  ".to_string())).expect("add");
        assert!(resume.state.skills.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let (_dir, mut resume) = resume();
        resume.handle(ResumeEvent::SetRole("Growth analyst".to_string())).expect("set");
        assert_eq!(resume.render(), resume.render());
    }
}
