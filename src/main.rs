//! @ai:module:intent CLI for the langbench benchmark harness
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use langbench::{
    config::BenchmarkConfig,
    report::{JsonReporter, JsonReporterTrait, ReportGenerator, TextReporter},
    suite::{SessionTarget, TargetLoader, TargetLoaderTrait},
    ArtifactWorkspace, BenchError, BenchmarkRunner, ResultsReport, ToolchainValidator,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "langbench")]
#[command(about = "Time equivalent programs across languages and summarize the results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every target and time its repeated runs
    Run {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of timed runs per target
        #[arg(short, long)]
        runs: Option<u32>,

        /// Results JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write Markdown and chart reports into this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Only benchmark these targets (comma-separated)
        #[arg(long)]
        targets: Option<String>,

        /// Directory of extra target definitions (*.toml)
        #[arg(long)]
        targets_dir: Option<PathBuf>,

        /// Executable suffix substituted for {exe_suffix}
        #[arg(long)]
        exe_suffix: Option<String>,

        /// Executable prefix substituted for {exe_prefix}
        #[arg(long)]
        exe_prefix: Option<String>,

        /// Keep the scratch workspace after the session
        #[arg(long)]
        keep_artifacts: bool,
    },

    /// Print statistics and render reports from an existing results file
    Report {
        /// Path to results JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,
    },

    /// List configured targets
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "benchmark.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            runs,
            output,
            report_dir,
            targets,
            targets_dir,
            exe_suffix,
            exe_prefix,
            keep_artifacts,
        } => run_benchmarks(RunArgs {
            config,
            runs,
            output,
            report_dir,
            targets,
            targets_dir,
            exe_suffix,
            exe_prefix,
            keep_artifacts,
        }),
        Commands::Report { results, output } => generate_reports(results, output),
        Commands::List { config } => list_targets(config),
        Commands::Init { output } => init_config(output),
    }
}

struct RunArgs {
    config: Option<PathBuf>,
    runs: Option<u32>,
    output: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    targets: Option<String>,
    targets_dir: Option<PathBuf>,
    exe_suffix: Option<String>,
    exe_prefix: Option<String>,
    keep_artifacts: bool,
}

/// @ai:intent Apply command-line overrides on top of the loaded configuration
/// @ai:effects pure
fn apply_overrides(config: &mut BenchmarkConfig, args: &RunArgs) {
    if let Some(runs) = args.runs {
        config.run.runs = runs;
    }
    if let Some(output) = &args.output {
        config.run.output_file = output.clone();
    }
    if let Some(dir) = &args.report_dir {
        config.paths.report_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.targets_dir {
        config.paths.targets_dir = Some(dir.clone());
    }
    if let Some(suffix) = &args.exe_suffix {
        config.platform.exe_suffix = suffix.clone();
    }
    if let Some(prefix) = &args.exe_prefix {
        config.platform.exe_prefix = prefix.clone();
    }
    if args.keep_artifacts {
        config.run.keep_artifacts = true;
    }
}

/// @ai:intent Run a full benchmark session
/// @ai:effects io, fs:write
fn run_benchmarks(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    if let Some(dir) = config.paths.targets_dir.clone() {
        let extra = TargetLoader::new()
            .load_all(&dir)
            .with_context(|| format!("Failed to load targets from {}", dir.display()))?;
        tracing::info!("Loaded {} extra targets from {}", extra.len(), dir.display());
        config.targets.extend(extra);
    }

    config.retain_targets(&split_list(args.targets.as_deref()));

    let status = ToolchainValidator::validate(std::mem::take(&mut config.targets));
    ToolchainValidator::log_warnings(&status);

    if status.available.is_empty() {
        anyhow::bail!("No benchmark targets can run (missing toolchains or empty filter)");
    }

    let targets = status.available;
    tracing::info!("Benchmarking {} targets, {} runs each", targets.len(), config.run.runs);

    let workspace = ArtifactWorkspace::prepare(&targets, &config.platform, &config.shell)?;
    let runner = BenchmarkRunner::new(workspace.timer());
    let session: Vec<SessionTarget> = targets
        .iter()
        .map(|t| t.session_target(&config.platform))
        .collect();

    let outcome = runner.run_session(&session, config.run.runs, &mut std::io::stdout().lock());

    let finished = if config.run.keep_artifacts {
        workspace.keep();
        Ok(())
    } else {
        workspace.finish()
    };

    let report = settle_session(outcome, finished)?;

    JsonReporter::new().generate(&report, &config.run.output_file)?;

    if let Some(dir) = &config.paths.report_dir {
        ReportGenerator::new().generate_all(&report, Some(config.run.runs), dir)?;
    }

    Ok(())
}

/// @ai:intent Combine the session result with workspace teardown; a session error wins
/// @ai:effects io
fn settle_session(
    outcome: std::result::Result<ResultsReport, BenchError>,
    finished: std::result::Result<(), BenchError>,
) -> Result<ResultsReport> {
    match (outcome, finished) {
        (Ok(report), Ok(())) => Ok(report),
        (Ok(_), Err(e)) => Err(e).context("Failed to remove workspace"),
        (Err(e), finished) => {
            if let Err(cleanup) = finished {
                tracing::warn!("Failed to remove workspace: {}", cleanup);
            }
            Err(e.into())
        }
    }
}

/// @ai:intent Print stored statistics and render reports from a results file
/// @ai:effects fs:read, fs:write, io
fn generate_reports(results_path: PathBuf, output_dir: PathBuf) -> Result<()> {
    let report = JsonReporter::new()
        .load(&results_path)
        .with_context(|| format!("Failed to read results from {}", results_path.display()))?;

    TextReporter::new().write_report(&mut std::io::stdout().lock(), &report)?;
    ReportGenerator::new().generate_all(&report, None, &output_dir)?;

    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent List configured targets with their resolved commands
/// @ai:effects fs:read, io
fn list_targets(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path.as_deref())?;

    println!("{:<12} {:<30} Requires", "Target", "Run");
    println!("{}", "-".repeat(60));

    for target in &config.targets {
        println!(
            "{:<12} {:<30} {}",
            target.name,
            config.platform.expand(&target.run),
            target
                .requires
                .iter()
                .map(|req| req.tool.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<&Path>) -> Result<BenchmarkConfig> {
    match path {
        Some(p) => BenchmarkConfig::load(p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => {
            let default_path = Path::new("benchmark.toml");

            if default_path.exists() {
                BenchmarkConfig::load(default_path)
                    .with_context(|| format!("Failed to load config {}", default_path.display()))
            } else {
                Ok(BenchmarkConfig::default())
            }
        }
    }
}

/// @ai:intent Split a comma-separated list, dropping blanks
/// @ai:effects pure
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
