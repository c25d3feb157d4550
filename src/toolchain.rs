//! @ai:module:intent Validate tools required by benchmark targets
//! @ai:module:layer infrastructure
//! @ai:module:public_api ToolchainValidator, ToolchainStatus, MissingTool

use crate::suite::{BenchmarkTarget, ToolRequirement};
use std::collections::BTreeSet;
use std::process::{Command, Stdio};

/// @ai:intent Status of toolchain validation
#[derive(Debug)]
pub struct ToolchainStatus {
    pub available: Vec<BenchmarkTarget>,
    pub missing_tools: Vec<MissingTool>,
}

/// @ai:intent Information about a missing tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    pub target: String,
    pub tool_name: String,
    pub install_hint: &'static str,
}

/// @ai:intent Validates that required tools are installed
pub struct ToolchainValidator;

impl ToolchainValidator {
    /// @ai:intent Get install hint for a tool
    /// @ai:effects pure
    fn get_install_hint(tool: &str) -> &'static str {
        match tool {
            "rustc" | "cargo" => "Install Rust: https://rustup.rs/",
            "python" | "python3" => "Install Python: https://www.python.org/downloads/",
            "go" => "Install Go: https://go.dev/dl/",
            _ => "Check tool documentation for installation instructions",
        }
    }

    /// @ai:intent Check if a tool answers its check arguments with a zero exit
    /// @ai:effects io
    fn is_tool_available(requirement: &ToolRequirement) -> bool {
        Command::new(&requirement.tool)
            .args(&requirement.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// @ai:intent Split targets into runnable ones and the tools the rest are missing
    /// @ai:effects io
    pub fn validate(targets: Vec<BenchmarkTarget>) -> ToolchainStatus {
        Self::validate_with(targets, Self::is_tool_available)
    }

    /// @ai:intent Validate using a custom check, each distinct requirement checked once
    /// @ai:effects io
    fn validate_with<F: Fn(&ToolRequirement) -> bool>(
        targets: Vec<BenchmarkTarget>,
        is_available: F,
    ) -> ToolchainStatus {
        let requirements: BTreeSet<&ToolRequirement> =
            targets.iter().flat_map(|t| t.requires.iter()).collect();
        let unavailable: BTreeSet<ToolRequirement> = requirements
            .into_iter()
            .filter(|req| !is_available(req))
            .cloned()
            .collect();

        let mut available = Vec::new();
        let mut missing_tools = Vec::new();

        for target in targets {
            let missing: Vec<_> = target
                .requires
                .iter()
                .filter(|req| unavailable.contains(*req))
                .map(|req| MissingTool {
                    target: target.name.clone(),
                    tool_name: req.tool.clone(),
                    install_hint: Self::get_install_hint(&req.tool),
                })
                .collect();

            if missing.is_empty() {
                available.push(target);
            } else {
                missing_tools.extend(missing);
            }
        }

        ToolchainStatus {
            available,
            missing_tools,
        }
    }

    /// @ai:intent Log warnings for missing tools
    /// @ai:effects io
    pub fn log_warnings(status: &ToolchainStatus) {
        for missing in &status.missing_tools {
            tracing::warn!(
                "Tool '{}' not found - target {} will be skipped. {}",
                missing.tool_name,
                missing.target,
                missing.install_hint
            );
        }
    }
}
