//! @ai:module:intent Duration samples, statistics and results reports
//! @ai:module:layer domain
//! @ai:module:public_api DurationSample, StatsSummary, ResultsReport, summarize

pub mod stats;
pub mod types;

pub use stats::summarize;
pub use types::{DurationSample, ResultsReport, StatsSummary};
