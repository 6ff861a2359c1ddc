//! Quiz
//!
//! Cycles the question bank sequentially (round-robin), never at
//! random. Answers are graded immediately against the item's correct
//! option index.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::picker::RoundRobin;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "quiz";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizState {
    pub cursor: RoundRobin,
    pub answered: u32,
    pub correct: u32,
    pub last_result: Option<String>,
}

#[derive(Debug, Clone)]
pub enum QuizEvent {
    Answer(usize),
    Next,
}

pub struct Quiz {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: QuizState,
}

impl Quiz {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, QuizState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: QuizEvent) -> Result<ViewFragment, AppError> {
        let bank = self.catalog.quiz.len();
        match event {
            QuizEvent::Answer(option) => {
                if let Some(item) = self.catalog.quiz.get(self.state.cursor.current(bank)) {
                    if option < item.options.len() {
                        self.state.answered += 1;
                        if option == item.correct {
                            self.state.correct += 1;
                            self.state.last_result = Some("Correct!".to_string());
                        } else {
                            self.state.last_result = Some(format!(
                                "Not quite. Answer: {}",
                                item.options[item.correct]
                            ));
                        }
                    }
                }
            }
            QuizEvent::Next => {
                self.state.cursor.advance(bank);
                self.state.last_result = None;
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Quiz {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let bank = self.catalog.quiz.len();
        let Some(item) = self.catalog.quiz.get(self.state.cursor.current(bank)) else {
            return ViewFragment::new(KEY, "Quiz").status("No questions available");
        };

        let mut fragment = ViewFragment::new(KEY, item.question);
        for (index, option) in item.options.iter().enumerate() {
            fragment = fragment.line(format!("{}. {option}", index + 1));
        }
        fragment = fragment.line(format!(
            "Score: {}/{}",
            self.state.correct, self.state.answered
        ));
        if let Some(result) = &self.state.last_result {
            fragment = fragment.status(result.clone());
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> (tempfile::TempDir, Quiz) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        let catalog = Arc::new(Catalog::builtin().expect("catalog"));
        (dir, Quiz::load(store, catalog))
    }

    #[test]
    fn test_cycle_wraps_at_bank_size() {
        let (_dir, mut quiz) = quiz();
        let bank = quiz.catalog.quiz.len();
        let start = quiz.render().title.clone();

        for _ in 0..bank {
            quiz.handle(QuizEvent::Next).expect("next");
        }
        assert_eq!(quiz.render().title, start);
    }

    #[test]
    fn test_cycle_moves_before_wrapping() {
        let (_dir, mut quiz) = quiz();
        let start = quiz.render().title.clone();
        quiz.handle(QuizEvent::Next).expect("next");
        assert_ne!(quiz.render().title, start);
    }

    #[test]
    fn test_correct_answer_scores() {
        let (_dir, mut quiz) = quiz();
        let correct = quiz.catalog.quiz[0].correct;
        let view = quiz.handle(QuizEvent::Answer(correct)).expect("answer");
        assert_eq!(view.status.as_deref(), Some("Correct!"));
        assert!(view.lines.contains(&"Score: 1/1".to_string()));
    }

    #[test]
    fn test_wrong_answer_reveals_correct_option() {
        let (_dir, mut quiz) = quiz();
        let item = &quiz.catalog.quiz[0];
        let wrong = (item.correct + 1) % item.options.len();
        let expected = item.options[item.correct];

        let view = quiz.handle(QuizEvent::Answer(wrong)).expect("answer");
        assert_eq!(
            view.status.as_deref(),
            Some(format!("Not quite. Answer: {expected}").as_str())
        );
        assert!(view.lines.contains(&"Score: 0/1".to_string()));
    }

    #[test]
    fn test_next_clears_result() {
        let (_dir, mut quiz) = quiz();
        quiz.handle(QuizEvent::Answer(0)).expect("answer");
        let view = quiz.handle(QuizEvent::Next).expect("next");
        assert_eq!(view.status, None);
    }
}
