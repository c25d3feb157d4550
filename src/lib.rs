//! @ai:module:intent langbench cross-language micro-benchmark library
//! @ai:module:layer application
//! @ai:module:public_api config, error, metrics, report, runner, suite, timer, toolchain, workspace

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod suite;
pub mod timer;
pub mod toolchain;
pub mod workspace;

pub use config::BenchmarkConfig;
pub use error::{BenchError, Result};
pub use metrics::{summarize, DurationSample, ResultsReport, StatsSummary};
pub use report::ReportGenerator;
pub use runner::BenchmarkRunner;
pub use suite::{BenchmarkTarget, SessionTarget, TargetLoader};
pub use timer::{CommandTimer, CommandTimerTrait, MockCommandTimer};
pub use toolchain::{ToolchainStatus, ToolchainValidator};
pub use workspace::ArtifactWorkspace;
