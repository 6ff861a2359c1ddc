//! View fragment descriptions
//!
//! Controllers render their state into a `ViewFragment` rather than touching
//! any UI binding directly. A fragment fully replaces whatever was displayed
//! for that widget before; there is no incremental patching.

use serde::Serialize;

/// Rendered description of one widget's current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFragment {
    /// Stable widget identifier, matching the widget's store namespace.
    pub widget: &'static str,
    /// Heading shown for the fragment.
    pub title: String,
    /// Body lines, top to bottom.
    pub lines: Vec<String>,
    /// Optional status/feedback line (validation messages, verdicts).
    pub status: Option<String>,
}

impl ViewFragment {
    pub fn new(widget: &'static str, title: impl Into<String>) -> Self {
        Self {
            widget,
            title: title.into(),
            lines: Vec::new(),
            status: None,
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_lines_in_order() {
        let fragment = ViewFragment::new("demo", "Demo")
            .line("first")
            .line("second")
            .status("ready");

        assert_eq!(fragment.lines, vec!["first", "second"]);
        assert_eq!(fragment.status.as_deref(), Some("ready"));
    }
}
