//! @ai:module:intent Benchmark target definitions
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkTarget, SourceFile, SessionTarget, ToolRequirement
//! @ai:module:stateless true

use crate::config::PlatformConfig;
use serde::{Deserialize, Serialize};

/// @ai:intent A source file written into the scratch workspace before setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// @ai:intent A tool a target needs, with the arguments that prove it is installed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToolRequirement {
    pub tool: String,
    #[serde(default = "default_check_args")]
    pub args: Vec<String>,
}

fn default_check_args() -> Vec<String> {
    vec!["--version".to_string()]
}

impl ToolRequirement {
    /// @ai:intent Requirement checked with `<tool> --version`
    /// @ai:effects pure
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            args: default_check_args(),
        }
    }

    /// @ai:intent Requirement checked with custom arguments
    /// @ai:effects pure
    pub fn with_args(tool: impl Into<String>, args: &[&str]) -> Self {
        Self {
            tool: tool.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// @ai:intent One benchmarked program: how to build it, run it and clean up after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkTarget {
    pub name: String,
    /// Tools checked before the session starts
    #[serde(default)]
    pub requires: Vec<ToolRequirement>,
    #[serde(default)]
    pub setup: Vec<String>,
    pub run: String,
    #[serde(default)]
    pub cleanup: Vec<String>,
    #[serde(default)]
    pub sources: Vec<SourceFile>,
}

/// @ai:intent A named command handed to the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTarget {
    pub name: String,
    pub command: String,
}

impl SessionTarget {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

impl BenchmarkTarget {
    /// @ai:intent Setup commands with platform placeholders expanded
    /// @ai:effects pure
    pub fn setup_commands(&self, platform: &PlatformConfig) -> Vec<String> {
        self.setup.iter().map(|c| platform.expand(c)).collect()
    }

    /// @ai:intent Cleanup commands with platform placeholders expanded
    /// @ai:effects pure
    pub fn cleanup_commands(&self, platform: &PlatformConfig) -> Vec<String> {
        self.cleanup.iter().map(|c| platform.expand(c)).collect()
    }

    /// @ai:intent Resolve the timed command for this platform
    /// @ai:effects pure
    pub fn session_target(&self, platform: &PlatformConfig) -> SessionTarget {
        SessionTarget::new(self.name.clone(), platform.expand(&self.run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_requirement_defaults_to_version_flag() {
        let target: BenchmarkTarget =
            toml::from_str("name = \"Node\"\nrun = \"node fib.js\"\nrequires = [{ tool = \"node\" }]\n")
                .unwrap();
        assert_eq!(target.requires, vec![ToolRequirement::new("node")]);
        assert_eq!(target.requires[0].args, vec!["--version".to_string()]);
    }

    #[test]
    fn test_session_target_expands_run_command() {
        let target = BenchmarkTarget {
            name: "Go".to_string(),
            requires: vec![ToolRequirement::with_args("go", &["version"])],
            setup: vec!["go build -o fib_go{exe_suffix} fib.go".to_string()],
            run: "{exe_prefix}fib_go{exe_suffix}".to_string(),
            cleanup: vec![],
            sources: vec![],
        };
        let platform = PlatformConfig {
            exe_suffix: ".exe".to_string(),
            exe_prefix: String::new(),
        };

        assert_eq!(
            target.session_target(&platform),
            SessionTarget::new("Go", "fib_go.exe")
        );
        assert_eq!(
            target.setup_commands(&platform),
            vec!["go build -o fib_go.exe fib.go".to_string()]
        );
    }
}
