//! @ai:module:intent Scratch directory holding generated sources and build artifacts
//! @ai:module:layer infrastructure
//! @ai:module:public_api ArtifactWorkspace

use crate::config::{PlatformConfig, ShellConfig};
use crate::error::{BenchError, Result};
use crate::suite::BenchmarkTarget;
use crate::timer::CommandTimer;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// @ai:intent Cleanup commands that run once, at the latest when dropped
struct PendingCleanup {
    commands: Vec<String>,
    executor: CommandTimer,
}

impl PendingCleanup {
    /// @ai:intent Run cleanup commands; failures are logged, not returned
    /// @ai:effects io
    fn run(&mut self) {
        for command in std::mem::take(&mut self.commands) {
            if let Err(e) = self.executor.run(&command) {
                tracing::warn!("Cleanup command failed: {}", e);
            }
        }
    }
}

impl Drop for PendingCleanup {
    fn drop(&mut self) {
        self.run();
    }
}

/// @ai:intent Session-scoped directory; cleanup runs and the directory is removed on drop unless kept
pub struct ArtifactWorkspace {
    // Declared before `dir` so cleanup runs while the directory still exists.
    cleanup: PendingCleanup,
    dir: TempDir,
    executor: CommandTimer,
}

impl ArtifactWorkspace {
    /// @ai:intent Write every target's sources and run every setup command
    /// @ai:effects fs:write, io
    pub fn prepare(
        targets: &[BenchmarkTarget],
        platform: &PlatformConfig,
        shell: &ShellConfig,
    ) -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("langbench-").tempdir()?;
        let executor = CommandTimer::new(shell.clone()).with_working_dir(dir.path());

        tracing::info!("Workspace: {}", dir.path().display());

        let workspace = Self {
            cleanup: PendingCleanup {
                commands: targets
                    .iter()
                    .flat_map(|t| t.cleanup_commands(platform))
                    .collect(),
                executor: executor.clone(),
            },
            dir,
            executor,
        };

        for target in targets {
            workspace.write_sources(target)?;
        }

        for target in targets {
            workspace.run_setup(target, platform)?;
        }

        Ok(workspace)
    }

    /// @ai:intent Root of the scratch directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// @ai:intent Timer that runs commands inside this workspace
    /// @ai:effects pure
    pub fn timer(&self) -> CommandTimer {
        self.executor.clone()
    }

    /// @ai:intent Write the target's source files, creating parent directories
    /// @ai:effects fs:write
    fn write_sources(&self, target: &BenchmarkTarget) -> Result<()> {
        for source in &target.sources {
            let path = self.dir.path().join(&source.path);

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            tracing::debug!("Writing {} for {}", path.display(), target.name);
            std::fs::write(&path, &source.content)?;
        }

        Ok(())
    }

    /// @ai:intent Run the target's setup commands in order
    /// @ai:effects io
    fn run_setup(&self, target: &BenchmarkTarget, platform: &PlatformConfig) -> Result<()> {
        for command in target.setup_commands(platform) {
            tracing::info!("Setup {}: {}", target.name, command);

            self.executor
                .run(&command)
                .map_err(|e| BenchError::SetupFailure {
                    target: target.name.clone(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    /// @ai:intent Run cleanup commands and remove the directory
    /// @ai:effects io, fs:write
    pub fn finish(self) -> Result<()> {
        let Self { mut cleanup, dir, .. } = self;
        cleanup.run();
        let path = dir.path().to_path_buf();
        dir.close()?;
        tracing::debug!("Removed workspace {}", path.display());
        Ok(())
    }

    /// @ai:intent Run cleanup commands and keep the directory for inspection
    /// @ai:effects io
    pub fn keep(self) -> PathBuf {
        let Self { mut cleanup, dir, .. } = self;
        cleanup.run();
        let path = dir.keep();
        tracing::info!("Kept workspace {}", path.display());
        path
    }
}
