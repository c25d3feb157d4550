//! @ai:module:intent JSON results file generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReporterTrait
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::ResultsReport;
use serde::Serialize;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write the results report as JSON
    fn generate(&self, report: &ResultsReport, output_path: &Path) -> Result<()>;

    /// @ai:intent Read a results report written by `generate`
    fn load(&self, path: &Path) -> Result<ResultsReport>;
}

/// @ai:intent Writes `{ name: { average, median, std_dev, min, max } }` documents
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Pretty-print with a four-space indent
    /// @ai:effects pure
    pub fn render(report: &ResultsReport) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        report.serialize(&mut serializer)?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &ResultsReport, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(output_path, Self::render(report)?)?;
        tracing::info!("Results written to {}", output_path.display());
        Ok(())
    }

    /// @ai:intent Load JSON report from file
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<ResultsReport> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
