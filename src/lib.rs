//! Pull request size metric, and summary statistics over many pull requests.
//!
//! ```
//! use pr_size::{CodeMetrics, IssueWithMetrics, size_stats};
//!
//! let issues = [(400, 100), (300, 200), (1000, 100)].map(|(additions, deletions)| {
//!     let pr = CodeMetrics { additions, deletions, changed_files: 1 };
//!     IssueWithMetrics::new("title", "url", "alice").with_pull_request_size(&pr)
//! });
//!
//! let stats = size_stats(&issues).unwrap();
//! assert_eq!(stats.average, 350.0);
//! assert_eq!(stats.median, 250.0);
//! ```

mod data;
mod output;
mod size;

pub use data::{CodeMetrics, IssueWithMetrics, LineCounts, parse_code_metrics, parse_issues};
pub use output::{format_size_stats, print_average_size, print_size_stats};
pub use size::{SizeStats, mean, median, percentile, pull_request_size, size_stats};
