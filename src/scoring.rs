//! Heuristic scoring evaluators
//!
//! Two grading policies live here and stay separate on purpose:
//!
//! - **Rubric scoring** (SQL lab): a list of structural checks (regex or
//!   keyword) scored as a percentage, passing at [`PASS_SCORE`].
//! - **Keyword coverage** (case interviews): an absolute matched-keyword
//!   count threshold plus a flat length bonus, not a percentage.
//!
//! Both reject an empty submission before scoring. The only state that
//! survives across evaluations is the [`Streak`] counter.

use crate::error::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Percentage threshold for rubric-scored submissions.
pub const PASS_SCORE: u32 = 75;

/// Minimum matched keywords for a keyword-coverage pass.
pub const KEYWORD_PASS_COUNT: usize = 2;

/// Trimmed length at which a keyword-coverage answer earns one bonus point.
pub const LENGTH_BONUS_THRESHOLD: usize = 120;

/// One boolean predicate in a rubric.
#[derive(Debug, Clone)]
pub enum Check {
    /// Regex structural check, applied to the raw submission.
    Pattern(Regex),
    /// Case-insensitive keyword membership check.
    Keyword(String),
}

impl Check {
    pub fn pattern(pattern: &str) -> Result<Self, AppError> {
        let re = Regex::new(pattern)
            .map_err(|e| AppError::Config(format!("Bad rubric pattern {pattern:?}: {e}")))?;
        Ok(Self::Pattern(re))
    }

    pub fn keyword(word: &str) -> Self {
        Self::Keyword(word.to_lowercase())
    }

    pub fn matches(&self, submission: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(submission),
            Self::Keyword(word) => submission.to_lowercase().contains(word),
        }
    }
}

/// Ordered list of independent checks.
#[derive(Debug, Clone, Default)]
pub struct Rubric {
    pub checks: Vec<Check>,
}

impl Rubric {
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }
}

/// Outcome of grading a non-empty submission against a rubric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub hits: usize,
    pub total: usize,
    pub score: u32,
    pub passed: bool,
    pub message: String,
}

/// Outcome of keyword-coverage grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordVerdict {
    pub matched: usize,
    pub total: usize,
    pub points: usize,
    pub passed: bool,
    pub message: String,
}

/// Result of an evaluation attempt: rejected before scoring, or scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation<V> {
    /// Empty submission; nothing was scored.
    Rejected(String),
    Scored(V),
}

/// Grade `submission` against `rubric` as a percentage.
pub fn evaluate_rubric(rubric: &Rubric, submission: &str) -> Evaluation<ScoreResult> {
    let trimmed = submission.trim();
    if trimmed.is_empty() {
        return Evaluation::Rejected("Write something first.".to_string());
    }

    let total = rubric.checks.len();
    let hits = rubric.checks.iter().filter(|c| c.matches(trimmed)).count();
    let score = percent(hits, total);
    let passed = score >= PASS_SCORE;
    let message = if passed {
        format!("Pass — {hits}/{total} checks matched ({score}%)")
    } else {
        format!("Revise — {hits}/{total} checks matched ({score}%)")
    };

    Evaluation::Scored(ScoreResult {
        hits,
        total,
        score,
        passed,
        message,
    })
}

/// Grade `submission` by concept-coverage keyword count.
pub fn evaluate_keywords(keywords: &[&str], submission: &str) -> Evaluation<KeywordVerdict> {
    let trimmed = submission.trim();
    if trimmed.is_empty() {
        return Evaluation::Rejected("Write something first.".to_string());
    }

    let lowered = trimmed.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|k| lowered.contains(&k.to_lowercase()))
        .count();
    let bonus = usize::from(trimmed.len() >= LENGTH_BONUS_THRESHOLD);
    let points = matched + bonus;
    let passed = matched >= KEYWORD_PASS_COUNT;
    let message = if passed {
        format!(
            "Strong answer — {matched}/{} concepts covered ({points} points)",
            keywords.len()
        )
    } else {
        format!(
            "Revise — only {matched}/{} concepts covered, aim for at least {KEYWORD_PASS_COUNT}",
            keywords.len()
        )
    };

    Evaluation::Scored(KeywordVerdict {
        matched,
        total: keywords.len(),
        points,
        passed,
        message,
    })
}

/// `round(100 * hits / total)`; rubrics are never empty in the catalogs.
pub fn percent(hits: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * hits as f64 / total as f64).round() as u32
}

/// Consecutive-pass counter, reset on any failing evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak(pub u32);

impl Streak {
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.0 += 1;
        } else {
            self.0 = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_rubric() -> Rubric {
        Rubric::new(vec![
            Check::pattern(r"(?i)\bselect\b").expect("pattern"),
            Check::pattern(r"(?i)\bfrom\b").expect("pattern"),
            Check::pattern(r"(?i)\bgroup\s+by\b").expect("pattern"),
            Check::pattern(r"(?i)\bcount\s*\(").expect("pattern"),
        ])
    }

    #[test]
    fn test_three_of_four_checks_is_75_and_passes() {
        let result = evaluate_rubric(&sql_rubric(), "SELECT user_id FROM events GROUP BY user_id");
        match result {
            Evaluation::Scored(r) => {
                assert_eq!(r.hits, 3);
                assert_eq!(r.score, 75);
                assert!(r.passed);
            }
            Evaluation::Rejected(_) => panic!("should have been scored"),
        }
    }

    #[test]
    fn test_empty_submission_is_rejected_not_zero() {
        assert!(matches!(
            evaluate_rubric(&sql_rubric(), "   \n\t"),
            Evaluation::Rejected(_)
        ));
        assert!(matches!(
            evaluate_keywords(&["retention"], ""),
            Evaluation::Rejected(_)
        ));
    }

    #[test]
    fn test_keyword_coverage_uses_absolute_count() {
        let keywords = ["retention", "cohort", "activation", "churn"];
        let short = "Retention by cohort is the lever here.";
        match evaluate_keywords(&keywords, short) {
            Evaluation::Scored(v) => {
                assert_eq!(v.matched, 2);
                assert_eq!(v.points, 2);
                assert!(v.passed);
            }
            Evaluation::Rejected(_) => panic!("should have been scored"),
        }
    }

    #[test]
    fn test_length_bonus_adds_one_point() {
        let keywords = ["retention", "cohort"];
        let long = "Retention is the metric to watch. I would segment users into weekly \
                    cohorts, compare their day-30 curves, and look at where the drop \
                    happens before proposing any fix to the onboarding flow.";
        assert!(long.len() >= LENGTH_BONUS_THRESHOLD);
        match evaluate_keywords(&keywords, long) {
            Evaluation::Scored(v) => {
                assert_eq!(v.matched, 2);
                assert_eq!(v.points, 3);
            }
            Evaluation::Rejected(_) => panic!("should have been scored"),
        }
    }

    #[test]
    fn test_hits_never_exceed_total() {
        let rubric = Rubric::new(vec![Check::keyword("select"), Check::keyword("select")]);
        if let Evaluation::Scored(r) = evaluate_rubric(&rubric, "select select select") {
            assert!(r.hits <= r.total);
        }
    }

    #[test]
    fn test_streak_increments_and_resets() {
        let mut streak = Streak::default();
        streak.record(true);
        streak.record(true);
        assert_eq!(streak.0, 2);
        streak.record(false);
        assert_eq!(streak.0, 0);
        streak.record(true);
        assert_eq!(streak.0, 1);
    }
}
