//! Static domain catalogs
//!
//! Read-only reference tables for the learning features: paths, SQL
//! challenges, case studies, quizzes, dashboards, project templates,
//! practice and interview questions, and prompt lists. Built once at
//! startup and never mutated.

use crate::error::AppError;
use crate::scoring::{Check, Rubric};

#[derive(Debug, Clone)]
pub struct LearningPath {
    pub id: &'static str,
    pub title: &'static str,
    pub milestones: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct SqlChallenge {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub rubric: Rubric,
}

#[derive(Debug, Clone)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub keywords: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct QuizItem {
    pub question: &'static str,
    pub options: Vec<&'static str>,
    pub correct: usize,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub id: &'static str,
    pub name: &'static str,
    pub tiles: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ProjectTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone)]
pub struct PracticeQuestion {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct InterviewQuestion {
    pub question: &'static str,
    pub focus: &'static str,
}

/// All built-in reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub paths: Vec<LearningPath>,
    pub sql: Vec<SqlChallenge>,
    pub cases: Vec<CaseStudy>,
    pub quiz: Vec<QuizItem>,
    pub dashboards: Vec<Dashboard>,
    pub templates: Vec<ProjectTemplate>,
    pub practice: Vec<PracticeQuestion>,
    pub interview: Vec<InterviewQuestion>,
    pub prompts: Vec<&'static str>,
    pub spark_messages: Vec<&'static str>,
}

impl Catalog {
    /// Build the built-in catalogs. Fails only on a bad rubric pattern.
    pub fn builtin() -> Result<Self, AppError> {
        Ok(Self {
            paths: vec![
                LearningPath {
                    id: "growth-foundations",
                    title: "Growth Analyst Foundations",
                    milestones: vec![
                        "Map the AARRR funnel for a product you use",
                        "Define activation for three different products",
                        "Build a weekly cohort retention table",
                        "Pick a north-star metric and defend it",
                        "Write a one-page growth model",
                    ],
                },
                LearningPath {
                    id: "experimentation",
                    title: "Experimentation & Testing",
                    milestones: vec![
                        "State a falsifiable hypothesis",
                        "Choose a primary metric and guardrails",
                        "Size a test with a minimum detectable effect",
                        "Read out a flat result honestly",
                    ],
                },
                LearningPath {
                    id: "product-analytics",
                    title: "Product Analytics in SQL",
                    milestones: vec![
                        "Query daily active users from an events table",
                        "Join events to users for segment cuts",
                        "Compute week-over-week retention",
                        "Build a funnel with window functions",
                        "Ship a self-serve dashboard spec",
                        "Present findings to a non-analyst",
                    ],
                },
            ],
            sql: vec![
                SqlChallenge {
                    id: "daily-actives",
                    title: "Daily active users",
                    prompt: "Count distinct active users per day from the events table.",
                    rubric: Rubric::new(vec![
                        Check::pattern(r"(?i)\bselect\b")?,
                        Check::pattern(r"(?i)\bcount\s*\(\s*distinct\b")?,
                        Check::pattern(r"(?i)\bfrom\s+events\b")?,
                        Check::pattern(r"(?i)\bgroup\s+by\b")?,
                    ]),
                },
                SqlChallenge {
                    id: "signup-funnel",
                    title: "Signup funnel drop-off",
                    prompt: "Count users reaching each signup step, ordered by step.",
                    rubric: Rubric::new(vec![
                        Check::pattern(r"(?i)\bselect\b")?,
                        Check::pattern(r"(?i)\bwhere\b")?,
                        Check::pattern(r"(?i)\bgroup\s+by\b")?,
                        Check::pattern(r"(?i)\border\s+by\b")?,
                    ]),
                },
                SqlChallenge {
                    id: "weekly-retention",
                    title: "Weekly retention",
                    prompt: "Join signups to return visits and compute week-1 retention.",
                    rubric: Rubric::new(vec![
                        Check::pattern(r"(?i)\bselect\b")?,
                        Check::pattern(r"(?i)\bjoin\b")?,
                        Check::pattern(r"(?i)\bon\b")?,
                        Check::pattern(r"(?i)\bgroup\s+by\b")?,
                    ]),
                },
            ],
            cases: vec![
                CaseStudy {
                    id: "streaming-churn",
                    title: "Streaming service churn spike",
                    prompt: "Monthly churn jumped from 4% to 7% in one quarter. \
                             How do you investigate and what do you recommend?",
                    keywords: vec!["churn", "cohort", "segment", "retention", "pricing"],
                },
                CaseStudy {
                    id: "marketplace-activation",
                    title: "Marketplace activation",
                    prompt: "New sellers list one item and never return. \
                             Diagnose the activation problem.",
                    keywords: vec!["activation", "onboarding", "funnel", "friction", "cohort"],
                },
                CaseStudy {
                    id: "freemium-conversion",
                    title: "Freemium conversion",
                    prompt: "Free-to-paid conversion is 1.8% against a 4% benchmark. \
                             Where do you look first?",
                    keywords: vec!["conversion", "funnel", "paywall", "segment", "experiment"],
                },
            ],
            quiz: vec![
                QuizItem {
                    question: "Which metric best captures early product value delivery?",
                    options: vec!["Signups", "Activation rate", "Page views", "NPS"],
                    correct: 1,
                },
                QuizItem {
                    question: "A/B test p-value is 0.2. What do you conclude?",
                    options: vec![
                        "The variant wins",
                        "The control wins",
                        "No significant difference was detected",
                        "The test was misconfigured",
                    ],
                    correct: 2,
                },
                QuizItem {
                    question: "Week-over-week retention is read from which table shape?",
                    options: vec!["Funnel", "Cohort grid", "Histogram", "Scatter plot"],
                    correct: 1,
                },
                QuizItem {
                    question: "A north-star metric should primarily reflect…",
                    options: vec![
                        "Revenue this quarter",
                        "Value delivered to users",
                        "Team velocity",
                        "Ad spend efficiency",
                    ],
                    correct: 1,
                },
            ],
            dashboards: vec![
                Dashboard {
                    id: "growth-overview",
                    name: "Growth overview",
                    tiles: vec![
                        "New signups (7d)",
                        "Activation rate",
                        "Weekly active users",
                        "Week-1 retention",
                    ],
                },
                Dashboard {
                    id: "revenue",
                    name: "Revenue",
                    tiles: vec!["MRR", "ARPU", "Free-to-paid conversion", "Churned MRR"],
                },
                Dashboard {
                    id: "experiments",
                    name: "Experiments",
                    tiles: vec!["Running tests", "Significant wins (90d)", "Guardrail breaches"],
                },
            ],
            templates: vec![
                ProjectTemplate {
                    id: "retention-deep-dive",
                    name: "Retention deep dive",
                    summary: "Cohort analysis of a real or public dataset with a written readout.",
                },
                ProjectTemplate {
                    id: "experiment-design",
                    name: "Experiment design doc",
                    summary: "Full test plan: hypothesis, metrics, sizing, and decision rule.",
                },
                ProjectTemplate {
                    id: "metrics-audit",
                    name: "Metrics audit",
                    summary: "Inventory a product's metrics and flag vanity or redundant ones.",
                },
            ],
            practice: vec![
                PracticeQuestion {
                    question: "What is the difference between activation and acquisition?",
                    answer: "Acquisition is getting users in the door; activation is their \
                             first experience of real value.",
                },
                PracticeQuestion {
                    question: "Why do cohort retention curves flatten?",
                    answer: "The remaining users are the ones who found durable value; \
                             the curve's asymptote is the product's core retention.",
                },
                PracticeQuestion {
                    question: "When is a percentage lift misleading?",
                    answer: "On a tiny base — a 50% lift on 10 conversions is noise, \
                             so always report absolute numbers alongside.",
                },
                PracticeQuestion {
                    question: "What makes a good guardrail metric?",
                    answer: "Something the experiment should not harm — latency, \
                             unsubscribes, support tickets — checked alongside the primary.",
                },
            ],
            interview: vec![
                InterviewQuestion {
                    question: "Our DAU is flat but revenue is growing. What's happening?",
                    focus: "metric decomposition",
                },
                InterviewQuestion {
                    question: "Design an experiment to test a new onboarding flow.",
                    focus: "experiment design",
                },
                InterviewQuestion {
                    question: "How would you measure the health of a referral program?",
                    focus: "metric definition",
                },
                InterviewQuestion {
                    question: "Walk me through debugging a sudden drop in signups.",
                    focus: "incident analysis",
                },
                InterviewQuestion {
                    question: "Which single metric would you pick for a podcast app?",
                    focus: "north-star thinking",
                },
            ],
            prompts: vec![
                "Analyze churn for a subscription box service",
                "Build a growth model for a B2B SaaS free trial",
                "Audit the funnel of an open e-commerce dataset",
                "Design a north-star dashboard for a fitness app",
            ],
            spark_messages: vec![
                "Zoom out: trends beat single data points.",
                "Gold is a hedge — so is a good baseline metric.",
                "Watch the range, not just the latest tick.",
                "Volatility is information, not noise.",
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_are_nonempty() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert!(!catalog.paths.is_empty());
        assert!(!catalog.sql.is_empty());
        assert!(!catalog.cases.is_empty());
        assert!(!catalog.quiz.is_empty());
        assert!(!catalog.dashboards.is_empty());
        assert!(!catalog.templates.is_empty());
        assert!(!catalog.practice.is_empty());
        assert!(!catalog.interview.is_empty());
        assert!(!catalog.prompts.is_empty());
        assert!(!catalog.spark_messages.is_empty());
    }

    #[test]
    fn test_every_path_has_milestones() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        for path in &catalog.paths {
            assert!(!path.milestones.is_empty(), "path {} has no milestones", path.id);
        }
    }

    #[test]
    fn test_quiz_correct_indices_in_range() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        for item in &catalog.quiz {
            assert!(item.correct < item.options.len());
        }
    }
}
