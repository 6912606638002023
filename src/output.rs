use colored::Colorize as _;

use crate::size::SizeStats;

const TITLE: &str = "Pull request size:";

/// Plain-text summary of the size statistics.
///
/// Returns `None` when there are no statistics, so the caller can skip the whole block.
pub fn format_size_stats(stats: Option<&SizeStats>) -> Option<String> {
    let stats = stats?;
    Some(format!(
        "{TITLE}\n  {:17}{}\n  {:17}{}\n  {:17}{}",
        "Average:", stats.average, "Median:", stats.median, "90th percentile:", stats.p90,
    ))
}

/// Print the size statistics, or nothing if there are none
pub fn print_size_stats(stats: Option<&SizeStats>) {
    let Some(stats) = stats else {
        return;
    };

    println!("\n{}", TITLE.cyan().bold().underline());
    println!("  {:17}{}", "Average:", stats.average.to_string().green().bold());
    println!("  {:17}{}", "Median:", stats.median.to_string().yellow().bold());
    println!("  {:17}{}", "90th percentile:", stats.p90.to_string().red().bold());
}

/// Print the average pull request size as a single diagnostic line
pub fn print_average_size(stats: &SizeStats) {
    println!(
        "{} {}",
        "Average pull request size:".dimmed(),
        stats.average.to_string().bold()
    );
}
