//! @ai:module:intent Configuration structs for benchmark sessions
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkConfig, RunConfig, PlatformConfig, ShellConfig, PathConfig
//! @ai:module:stateless true

use crate::error::Result;
use crate::suite::{default_targets, BenchmarkTarget};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for a benchmark session
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default = "default_targets")]
    pub targets: Vec<BenchmarkTarget>,
}

/// @ai:intent Run configuration for benchmark execution
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_runs")]
    pub runs: u32,
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    #[serde(default)]
    pub keep_artifacts: bool,
}

/// @ai:intent Platform-specific executable naming, supplied explicitly by the caller
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_exe_suffix")]
    pub exe_suffix: String,
    #[serde(default = "default_exe_prefix")]
    pub exe_prefix: String,
}

/// @ai:intent Shell used to interpret benchmark commands
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_shell_program")]
    pub program: String,
    #[serde(default = "default_shell_args")]
    pub args: Vec<String>,
}

/// @ai:intent Optional directories for extra targets and rendered reports
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    pub targets_dir: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            platform: PlatformConfig::default(),
            shell: ShellConfig::default(),
            paths: PathConfig::default(),
            targets: default_targets(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            output_file: default_output_file(),
            keep_artifacts: false,
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            exe_suffix: default_exe_suffix(),
            exe_prefix: default_exe_prefix(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            args: default_shell_args(),
        }
    }
}

fn default_runs() -> u32 {
    5
}

fn default_output_file() -> PathBuf {
    PathBuf::from("benchmark_results.json")
}

fn default_exe_suffix() -> String {
    if cfg!(windows) { ".exe" } else { "" }.to_string()
}

fn default_exe_prefix() -> String {
    if cfg!(windows) { "" } else { "./" }.to_string()
}

fn default_shell_program() -> String {
    if cfg!(windows) { "cmd" } else { "sh" }.to_string()
}

fn default_shell_args() -> Vec<String> {
    vec![if cfg!(windows) { "/C" } else { "-c" }.to_string()]
}

impl PlatformConfig {
    /// @ai:intent Expand executable placeholders in a command template
    /// @ai:effects pure
    pub fn expand(&self, template: &str) -> String {
        template
            .replace("{exe_suffix}", &self.exe_suffix)
            .replace("{exe_prefix}", &self.exe_prefix)
    }
}

impl BenchmarkConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Keep only the targets whose names appear in the filter
    /// @ai:effects pure
    pub fn retain_targets(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }

        self.targets
            .retain(|t| names.iter().any(|n| n.eq_ignore_ascii_case(&t.name)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_has_three_targets_and_five_runs() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.run.runs, 5);
        assert_eq!(config.targets.len(), 3);
        assert_eq!(config.run.output_file, PathBuf::from("benchmark_results.json"));
    }

    #[test]
    fn test_expand_placeholders() {
        let platform = PlatformConfig {
            exe_suffix: ".exe".to_string(),
            exe_prefix: String::new(),
        };
        assert_eq!(platform.expand("{exe_prefix}fib_go{exe_suffix}"), "fib_go.exe");

        let platform = PlatformConfig {
            exe_suffix: String::new(),
            exe_prefix: "./".to_string(),
        };
        assert_eq!(platform.expand("{exe_prefix}fib_go{exe_suffix}"), "./fib_go");
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("benchmark.toml");

        let mut config = BenchmarkConfig::default();
        config.run.runs = 9;
        config.platform.exe_suffix = ".bin".to_string();
        config.save(&path).unwrap();

        let loaded = BenchmarkConfig::load(&path).unwrap();
        assert_eq!(loaded.run.runs, 9);
        assert_eq!(loaded.platform.exe_suffix, ".bin");
        assert_eq!(loaded.targets.len(), config.targets.len());
        assert_eq!(loaded.targets[0].name, "Python");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BenchmarkConfig = toml::from_str("[run]\nruns = 3\n").unwrap();
        assert_eq!(config.run.runs, 3);
        assert_eq!(config.shell, ShellConfig::default());
        assert_eq!(config.targets.len(), 3);
    }

    #[test]
    fn test_retain_targets_is_case_insensitive() {
        let mut config = BenchmarkConfig::default();
        config.retain_targets(&["rust".to_string(), "Go".to_string()]);
        let names: Vec<_> = config.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }
}
