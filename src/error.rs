//! @ai:module:intent Define error types for benchmark sessions
//! @ai:module:layer domain
//! @ai:module:public_api BenchError, Result
//! @ai:module:stateless true

use thiserror::Error;

/// @ai:intent Unified error type for all benchmark operations
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Command `{command}` failed with {}", describe_status(.status))]
    CommandExecutionFailure { command: String, status: Option<i32> },

    #[error("Failed to spawn command `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("At least 2 durations are required for standard deviation, got {len}")]
    InsufficientSampleSize { len: usize },

    #[error("Run count must be at least 1, got {0}")]
    InvalidRunCount(u32),

    #[error("Setup for target '{target}' failed: {source}")]
    SetupFailure {
        target: String,
        #[source]
        source: Box<BenchError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// @ai:intent Render an exit status, which is absent when a signal ended the process
/// @ai:effects pure
fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "termination by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
