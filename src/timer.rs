//! @ai:module:intent Time a single execution of an external command
//! @ai:module:layer infrastructure
//! @ai:module:public_api CommandTimer, CommandTimerTrait, MockCommandTimer
//! @ai:module:stateless true

use crate::config::ShellConfig;
use crate::error::{BenchError, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::process::{Command, Output, Stdio};
use std::time::Instant;

/// @ai:intent Trait for executing and timing one command invocation
pub trait CommandTimerTrait: Send + Sync {
    /// @ai:intent Run the command to completion and return elapsed wall-clock seconds
    /// @ai:effects io
    fn measure(&self, command: &str) -> Result<f64>;
}

/// @ai:intent Runs commands through the host shell with captured output
#[derive(Debug, Clone)]
pub struct CommandTimer {
    shell: ShellConfig,
    working_dir: Option<PathBuf>,
}

impl CommandTimer {
    /// @ai:intent Create a timer that inherits the current working directory
    /// @ai:effects pure
    pub fn new(shell: ShellConfig) -> Self {
        Self {
            shell,
            working_dir: None,
        }
    }

    /// @ai:intent Run every command inside the given directory
    /// @ai:effects pure
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// @ai:intent Build the shell invocation for a command string
    /// @ai:effects pure
    fn build(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell.program);
        cmd.args(&self.shell.args)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        cmd
    }

    /// @ai:intent Run a command once, failing on non-zero exit
    /// @ai:effects io
    pub fn run(&self, command: &str) -> Result<Output> {
        let output = self
            .build(command)
            .output()
            .map_err(|source| BenchError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        check_status(command, &output)?;
        Ok(output)
    }
}

impl Default for CommandTimer {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

/// @ai:intent Map a non-zero exit into a command failure
/// @ai:effects pure
fn check_status(command: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }

    tracing::debug!(
        "Command `{}` stderr: {}",
        command,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    Err(BenchError::CommandExecutionFailure {
        command: command.to_string(),
        status: output.status.code(),
    })
}

impl CommandTimerTrait for CommandTimer {
    /// @ai:intent Time one invocation, clock spans spawn through exit
    /// @ai:effects io
    fn measure(&self, command: &str) -> Result<f64> {
        let start = Instant::now();
        self.run(command)?;
        let elapsed = start.elapsed().as_secs_f64();

        tracing::trace!("`{}` took {:.6}s", command, elapsed);
        Ok(elapsed)
    }
}

/// @ai:intent Mock timer for testing: returns scripted durations and counts calls
pub struct MockCommandTimer {
    durations: Vec<f64>,
    fail_on: Option<(String, i32)>,
    calls: AtomicUsize,
}

impl MockCommandTimer {
    /// @ai:intent Create a mock that cycles through the given durations
    /// @ai:pre durations is non-empty
    /// @ai:effects pure
    pub fn new(durations: Vec<f64>) -> Self {
        Self {
            durations,
            fail_on: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// @ai:intent Make every invocation of one command exit with the given status
    /// @ai:effects pure
    pub fn failing(mut self, command: impl Into<String>, status: i32) -> Self {
        self.fail_on = Some((command.into(), status));
        self
    }

    /// @ai:intent Number of measure calls so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CommandTimerTrait for MockCommandTimer {
    /// @ai:intent Return the next scripted duration
    /// @ai:effects pure
    fn measure(&self, command: &str) -> Result<f64> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some((failing, status)) = &self.fail_on {
            if failing == command {
                return Err(BenchError::CommandExecutionFailure {
                    command: command.to_string(),
                    status: Some(*status),
                });
            }
        }

        Ok(self.durations[call % self.durations.len()])
    }
}
