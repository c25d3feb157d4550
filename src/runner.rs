//! @ai:module:intent Repeat timed runs per target and build the results report
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkRunner

use crate::error::{BenchError, Result};
use crate::metrics::{summarize, DurationSample, ResultsReport, StatsSummary};
use crate::report::TextReporter;
use crate::suite::SessionTarget;
use crate::timer::CommandTimerTrait;
use std::io::Write;

/// @ai:intent Drives a command timer over targets, strictly sequentially
pub struct BenchmarkRunner<T: CommandTimerTrait> {
    timer: T,
    text: TextReporter,
}

impl<T: CommandTimerTrait> BenchmarkRunner<T> {
    /// @ai:intent Create a runner around a timer
    /// @ai:effects pure
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            text: TextReporter::new(),
        }
    }

    /// @ai:intent Borrow the underlying timer
    /// @ai:effects pure
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// @ai:intent Time a command `runs` times, aborting on the first failure
    /// @ai:pre runs >= 1
    /// @ai:effects io
    pub fn collect_sample(&self, command: &str, runs: u32) -> Result<DurationSample> {
        if runs == 0 {
            return Err(BenchError::InvalidRunCount(runs));
        }

        let mut sample = DurationSample::with_capacity(runs as usize);

        for run in 1..=runs {
            let elapsed = self.timer.measure(command)?;
            tracing::debug!("[{}/{}] `{}`: {:.6}s", run, runs, command, elapsed);
            sample.push(elapsed);
        }

        Ok(sample)
    }

    /// @ai:intent Summarize a collected sample
    /// @ai:effects pure
    pub fn summarize(&self, sample: &DurationSample) -> Result<StatsSummary> {
        summarize(sample)
    }

    /// @ai:intent Benchmark every target in order, writing each statistics block to `out`
    /// @ai:effects io
    pub fn run_session<W: Write>(
        &self,
        targets: &[SessionTarget],
        runs: u32,
        out: &mut W,
    ) -> Result<ResultsReport> {
        let mut report = ResultsReport::new();
        let total = targets.len();

        for (i, target) in targets.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Benchmarking {} ({} runs): {}",
                i + 1,
                total,
                target.name,
                runs,
                target.command
            );

            let sample = self.collect_sample(&target.command, runs)?;
            let stats = self.summarize(&sample)?;

            self.text.write_block(out, &target.name, &stats)?;
            report.insert(target.name.clone(), stats);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::MockCommandTimer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_sample_has_exact_length_and_order() {
        let runner = BenchmarkRunner::new(MockCommandTimer::new(vec![0.3, 0.1, 0.2]));
        let sample = runner.collect_sample("anything", 5).unwrap();

        assert_eq!(sample.as_slice(), &[0.3, 0.1, 0.2, 0.3, 0.1]);
        assert_eq!(runner.timer().calls(), 5);
    }

    #[test]
    fn test_collect_sample_rejects_zero_runs() {
        let runner = BenchmarkRunner::new(MockCommandTimer::new(vec![0.1]));
        assert!(matches!(
            runner.collect_sample("anything", 0),
            Err(BenchError::InvalidRunCount(0))
        ));
        assert_eq!(runner.timer().calls(), 0);
    }

    #[test]
    fn test_failing_command_aborts_after_first_attempt() {
        let timer = MockCommandTimer::new(vec![0.1]).failing("exit 1", 1);
        let runner = BenchmarkRunner::new(timer);

        let err = runner.collect_sample("exit 1", 3).unwrap_err();
        assert!(matches!(
            err,
            BenchError::CommandExecutionFailure { status: Some(1), .. }
        ));
        assert_eq!(runner.timer().calls(), 1);
    }

    #[test]
    fn test_run_session_builds_report_and_text() {
        let runner = BenchmarkRunner::new(MockCommandTimer::new(vec![0.01, 0.03, 0.02]));
        let targets = vec![
            SessionTarget::new("A", "echo a"),
            SessionTarget::new("B", "echo b"),
        ];

        let mut out = Vec::new();
        let report = runner.run_session(&targets, 5, &mut out).unwrap();

        let names: Vec<_> = report.names().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(runner.timer().calls(), 10);

        for (_, stats) in report.iter() {
            assert!(stats.min <= stats.median && stats.median <= stats.max);
            assert!(stats.min <= stats.average && stats.average <= stats.max);
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("A Statistics:\n"));
        assert!(text.contains("\nB Statistics:\n"));
    }

    #[test]
    fn test_run_session_repeated_name_overwrites() {
        let runner = BenchmarkRunner::new(MockCommandTimer::new(vec![1.0, 2.0, 3.0, 4.0]));
        let targets = vec![
            SessionTarget::new("A", "first"),
            SessionTarget::new("A", "second"),
        ];

        let report = runner.run_session(&targets, 2, &mut std::io::sink()).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("A").map(|s| s.average), Some(3.5));
    }

    #[test]
    fn test_run_session_single_run_is_insufficient() {
        let runner = BenchmarkRunner::new(MockCommandTimer::new(vec![0.1]));
        let targets = vec![SessionTarget::new("A", "echo a")];

        let err = runner.run_session(&targets, 1, &mut std::io::sink()).unwrap_err();
        assert!(matches!(err, BenchError::InsufficientSampleSize { len: 1 }));
    }

    #[test]
    fn test_run_session_stops_at_failing_target() {
        let timer = MockCommandTimer::new(vec![0.1]).failing("bad", 2);
        let runner = BenchmarkRunner::new(timer);
        let targets = vec![
            SessionTarget::new("A", "good"),
            SessionTarget::new("B", "bad"),
            SessionTarget::new("C", "good"),
        ];

        let mut out = Vec::new();
        assert!(runner.run_session(&targets, 3, &mut out).is_err());

        // A ran 3 times, B failed on its first attempt, C never started.
        assert_eq!(runner.timer().calls(), 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("A Statistics:"));
        assert!(!text.contains("C Statistics:"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_session_with_real_shell() {
        let runner = BenchmarkRunner::new(crate::timer::CommandTimer::default());
        let targets = vec![
            SessionTarget::new("A", "echo a"),
            SessionTarget::new("B", "echo b"),
        ];

        let report = runner.run_session(&targets, 5, &mut std::io::sink()).unwrap();
        let names: Vec<_> = report.names().collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_failing_command_is_surfaced() {
        let runner = BenchmarkRunner::new(crate::timer::CommandTimer::default());
        let err = runner.collect_sample("exit 1", 3).unwrap_err();
        assert!(matches!(
            err,
            BenchError::CommandExecutionFailure { status: Some(1), .. }
        ));
    }
}
