use serde::{Deserialize, Serialize};

use crate::size::pull_request_size;

/// Anything that knows how many lines a pull request adds and deletes.
pub trait LineCounts {
    fn additions(&self) -> u64;
    fn deletions(&self) -> u64;
}

/// Code metrics for a PR (lines added, deleted, files changed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    pub additions: u64,
    pub deletions: u64,
    #[serde(default)]
    pub changed_files: u64,
}

impl LineCounts for CodeMetrics {
    fn additions(&self) -> u64 {
        self.additions
    }

    fn deletions(&self) -> u64 {
        self.deletions
    }
}

/// An issue or pull request together with the metrics computed for it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IssueWithMetrics {
    pub title: String,
    pub html_url: String,
    pub author: String,

    /// `None` when no size was recorded, which is not the same as a size of zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_size: Option<f64>,
}

impl IssueWithMetrics {
    pub fn new(
        title: impl Into<String>,
        html_url: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            html_url: html_url.into(),
            author: author.into(),
            pull_request_size: None,
        }
    }

    /// Record the size of the pull request behind this issue.
    pub fn with_pull_request_size(mut self, pull_request: &impl LineCounts) -> Self {
        self.pull_request_size = Some(pull_request_size(pull_request));
        self
    }
}

/// Parse a JSON array of PR code metrics, as printed by `gh pr view --json additions,deletions,changedFiles`
pub fn parse_code_metrics(json: &str) -> Result<Vec<CodeMetrics>, String> {
    serde_json::from_str(json).map_err(|err| format!("Failed to parse JSON: {err}"))
}

/// Parse a JSON array of issues with metrics
pub fn parse_issues(json: &str) -> Result<Vec<IssueWithMetrics>, String> {
    serde_json::from_str(json).map_err(|err| format!("Failed to parse JSON: {err}"))
}
