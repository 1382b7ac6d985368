//! @ai:module:intent Report generation for analysis results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, JsonReporter, MarkdownReporter

pub mod json_report;
pub mod markdown_report;

pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::metrics::AnalysisResults;
use anyhow::Result;
use std::path::Path;

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
        }
    }

    /// @ai:intent Generate all report formats into a directory
    /// @ai:effects fs:write
    pub fn generate_all(&self, results: &AnalysisResults, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        let json_path = output_dir.join("analysis.json");
        self.json.generate(results, &json_path)?;
        tracing::info!("JSON report saved to {}", json_path.display());

        let md_path = output_dir.join("analysis.md");
        self.markdown.generate(results, &md_path)?;
        tracing::info!("Markdown report saved to {}", md_path.display());

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
