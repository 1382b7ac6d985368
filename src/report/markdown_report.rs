//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::metrics::AnalysisResults;
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, results: &AnalysisResults, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown reports from analysis results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Generate report header section
    /// @ai:effects pure
    fn generate_summary(results: &AnalysisResults) -> String {
        let mut output = String::new();

        writeln!(output, "# Translation Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", results.timestamp).unwrap();
        writeln!(output, "**Source:** {}", results.source).unwrap();
        writeln!(output, "**Reference model:** {}", results.reference_model).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate the efficiency-ranked model table
    /// @ai:effects pure
    fn generate_ranking_table(results: &AnalysisResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Model Ranking (by efficiency)").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Model | BLEU | Avg Latency | Success Rate | Efficiency | Status |"
        )
        .unwrap();
        writeln!(output, "|-------|------|-------------|--------------|------------|--------|")
            .unwrap();

        for summary in &results.ranking {
            writeln!(
                output,
                "| {} | {:.4} | {:.0}ms | {:.1}% | {:.4} | {} |",
                summary.name,
                summary.stats.avg_bleu,
                summary.stats.avg_latency_ms,
                summary.stats.success_rate_pct,
                summary.stats.efficiency,
                summary.status.as_str()
            )
            .unwrap();
        }

        writeln!(output).unwrap();
        output
    }

    /// @ai:intent Generate working/partial/failed category sections
    /// @ai:effects pure
    fn generate_category_section(results: &AnalysisResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Performance Categories").unwrap();
        writeln!(output).unwrap();

        writeln!(output, "### Fully Working ({})", results.working.len()).unwrap();
        writeln!(output).unwrap();
        for entry in &results.working {
            writeln!(
                output,
                "{}. {}: {:.0}ms",
                entry.rank, entry.name, entry.avg_latency_ms
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "### Partially Working ({})", results.partial.len()).unwrap();
        writeln!(output).unwrap();
        for entry in &results.partial {
            writeln!(output, "- {}: {} failures", entry.name, entry.failures).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "### Failed ({})", results.failed.len()).unwrap();
        writeln!(output).unwrap();
        for name in &results.failed {
            writeln!(output, "- {}: no successful translations", name).unwrap();
        }
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate overall assessment section
    /// @ai:effects pure
    fn generate_assessment(results: &AnalysisResults) -> String {
        let mut output = String::new();
        let overall = &results.overall;

        writeln!(output, "## Overall Assessment").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "- Operational rate: {:.1}% ({}/{})",
            overall.operational_rate_pct,
            results.working.len(),
            overall.model_count
        )
        .unwrap();

        if let Some(fastest) = &overall.fastest {
            writeln!(
                output,
                "- Fastest: {} ({:.0}ms)",
                fastest.name, fastest.avg_latency_ms
            )
            .unwrap();
        }

        if let Some(slowest) = &overall.slowest {
            writeln!(
                output,
                "- Slowest: {} ({:.0}ms)",
                slowest.name, slowest.avg_latency_ms
            )
            .unwrap();
        }

        if !results.working.is_empty() {
            writeln!(
                output,
                "- Average working latency: {:.0}ms",
                overall.avg_working_latency_ms
            )
            .unwrap();
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
    fn generate(&self, results: &AnalysisResults, output_path: &Path) -> Result<()> {
        let mut content = String::new();

        content.push_str(&Self::generate_summary(results));
        content.push_str(&Self::generate_ranking_table(results));
        content.push_str(&Self::generate_category_section(results));
        content.push_str(&Self::generate_assessment(results));

        std::fs::write(output_path, content)?;
        Ok(())
    }
}
