//! @ai:module:intent Plain-text statistics blocks for terminal output
//! @ai:module:layer infrastructure
//! @ai:module:public_api TextReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::{ResultsReport, StatsSummary};
use std::io::Write;

/// @ai:intent Renders one statistics block per target
pub struct TextReporter;

impl TextReporter {
    /// @ai:intent Create a new text reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format the block for one target, trailing blank line included
    /// @ai:effects pure
    pub fn format_block(name: &str, stats: &StatsSummary) -> String {
        format!(
            "{name} Statistics:\n  \
             Average time: {:.6} seconds\n  \
             Median time:  {:.6} seconds\n  \
             Std Dev:      {:.6} seconds\n  \
             Min time:     {:.6} seconds\n  \
             Max time:     {:.6} seconds\n\n",
            stats.average, stats.median, stats.std_dev, stats.min, stats.max
        )
    }

    /// @ai:intent Write the block for one target
    /// @ai:effects io
    pub fn write_block<W: Write>(&self, out: &mut W, name: &str, stats: &StatsSummary) -> Result<()> {
        out.write_all(Self::format_block(name, stats).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// @ai:intent Write every block of a report in report order
    /// @ai:effects io
    pub fn write_report<W: Write>(&self, out: &mut W, report: &ResultsReport) -> Result<()> {
        for (name, stats) in report.iter() {
            self.write_block(out, name, stats)?;
        }
        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}
