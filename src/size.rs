//! Pull request size, and summary statistics over many pull requests.
//!
//! The size of a pull request is half the number of changed lines,
//! i.e. `(additions + deletions) * 0.5`.

use serde::{Deserialize, Serialize};

use crate::data::{IssueWithMetrics, LineCounts};

/// Summary statistics of pull request sizes.
///
/// Each value is rounded to the nearest integer, with ties going to the even neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SizeStats {
    #[serde(rename = "avg")]
    pub average: f64,

    #[serde(rename = "med")]
    pub median: f64,

    #[serde(rename = "90p")]
    pub p90: f64,
}

/// Approximate size of a pull request: `(additions + deletions) * 0.5`
pub fn pull_request_size(pull_request: &impl LineCounts) -> f64 {
    (pull_request.additions() as f64 + pull_request.deletions() as f64) * 0.5
}

/// Average, median and 90th percentile of the recorded pull request sizes.
///
/// Issues without a recorded size are skipped.
/// Returns `None` if no issue has a size.
pub fn size_stats(issues: &[IssueWithMetrics]) -> Option<SizeStats> {
    let sizes: Vec<f64> = issues
        .iter()
        .filter_map(|issue| issue.pull_request_size)
        .collect();

    Some(SizeStats {
        average: mean(&sizes)?.round_ties_even(),
        median: median(&sizes)?.round_ties_even(),
        p90: percentile(&sizes, 90.0)?.round_ties_even(),
    })
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median, or `None` for an empty slice.
///
/// For an even number of values this is the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted(values);
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// The `pct`th percentile (0-100), or `None` for an empty slice.
///
/// Uses linear interpolation between the closest ranks,
/// where the rank of the percentile is `pct / 100 * (n - 1)`.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    let sorted = sorted(values);
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let fraction = rank - lower as f64;

    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
