//! @ai:module:intent Markdown results table generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter, MarkdownReporterTrait
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::{ResultsReport, StatsSummary};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, report: &ResultsReport, runs: Option<u32>, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates the aggregate results table
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Ratio of a target's average to the fastest average
    /// @ai:effects pure
    fn format_relative(stats: &StatsSummary, fastest: f64) -> String {
        if fastest > 0.0 {
            format!("{:.2}x", stats.average / fastest)
        } else {
            "-".to_string()
        }
    }

    /// @ai:intent Render the full document
    /// @ai:effects pure
    pub fn render(report: &ResultsReport, runs: Option<u32>, timestamp: &str) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", timestamp).unwrap();
        if let Some(runs) = runs {
            writeln!(output, "**Runs per target:** {}", runs).unwrap();
        }
        writeln!(output).unwrap();

        if report.is_empty() {
            writeln!(output, "No targets were benchmarked.").unwrap();
            return output;
        }

        let fastest = report.fastest().map(|(_, s)| s.average).unwrap_or(0.0);

        writeln!(
            output,
            "| Target | Average (s) | Median (s) | Std Dev (s) | Min (s) | Max (s) | Relative |"
        )
        .unwrap();
        writeln!(
            output,
            "|--------|-------------|------------|-------------|---------|---------|----------|"
        )
        .unwrap();

        for (name, stats) in report.iter() {
            writeln!(
                output,
                "| {} | {:.6} | {:.6} | {:.6} | {:.6} | {:.6} | {} |",
                name,
                stats.average,
                stats.median,
                stats.std_dev,
                stats.min,
                stats.max,
                Self::format_relative(stats, fastest)
            )
            .unwrap();
        }

        if let Some((name, _)) = report.fastest() {
            writeln!(output).unwrap();
            writeln!(output, "Fastest: **{}**", name).unwrap();
        }

        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &ResultsReport, runs: Option<u32>, output_path: &Path) -> Result<()> {
        let timestamp = chrono::Utc::now().to_rfc3339();
        std::fs::write(output_path, Self::render(report, runs, &timestamp))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stats(average: f64) -> StatsSummary {
        StatsSummary {
            average,
            median: average,
            std_dev: 0.001,
            min: average,
            max: average,
        }
    }

    #[test]
    fn test_render_table_rows_and_relative_column() {
        let mut report = ResultsReport::new();
        report.insert("Python", stats(0.5));
        report.insert("Rust", stats(0.25));

        let md = MarkdownReporter::render(&report, Some(5), "2026-01-19T00:00:00Z");

        assert!(md.contains("**Runs per target:** 5"));
        assert!(md.contains("| Python | 0.500000 | 0.500000 | 0.001000 | 0.500000 | 0.500000 | 2.00x |"));
        assert!(md.contains("| Rust | 0.250000 |"));
        assert!(md.contains("| 1.00x |"));
        assert!(md.contains("Fastest: **Rust**"));
        assert!(md.find("| Python").unwrap() < md.find("| Rust").unwrap());
    }

    #[test]
    fn test_render_empty_report() {
        let md = MarkdownReporter::render(&ResultsReport::new(), None, "now");
        assert!(md.contains("No targets were benchmarked."));
        assert!(!md.contains("Runs per target"));
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.md");
        let mut report = ResultsReport::new();
        report.insert("Go", stats(0.1));

        MarkdownReporter::new().generate(&report, Some(3), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Benchmark Results"));
    }
}
