//! Checks a pull-request description and gates a CI step on the result.
//!
//! Usage:
//!
//! ```text
//! prgate [--file PATH | --event PATH | --env VAR | --stdin]
//!        [--config PATH] [--max-header-length N]
//!        [--format text|json] [--fetch-timeout-secs N]
//! ```
//!
//! Without a source flag the description is taken from the
//! `$GITHUB_EVENT_PATH` payload when that variable is set, and from stdin
//! otherwise. Gate messages go to stdout, one per line; logs go to stderr
//! and are filtered by `PRGATE_LOG`.
//!
//! Exit status is `0` when the gate passes, `1` when it fails and `2` for
//! usage, configuration or input errors.

#[path = "prgate/cli.rs"]
mod cli;

use camino::Utf8PathBuf;
use cli::{CheckOptions, CliError, Command, OutputFormat, SourceChoice, USAGE, parse_args};
use mockable::DefaultClock;
use prgate::lint::{
    adapters::{
        EnvDescriptionSource, EventPayloadDescriptionSource, FileDescriptionSource,
        StdinDescriptionSource,
    },
    config::{CliOverrides, GateConfig},
    domain::LintRun,
    error::{CheckError, ConfigError, RuleSetError},
    ports::DescriptionSource,
    services::{GateReport, Linter, PullRequestCheck},
};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PRGATE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";
const EXIT_FAIL: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Errors that abort the check before a gate decision exists.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("cannot determine working directory: {0}")]
    WorkingDir(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to serialise report: {0}")]
    Serialise(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    init_tracing();
    match collect_args().and_then(run) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(%error, "prgate aborted");
            // The exit status carries the failure if stderr is closed.
            let _ignored = writeln!(io::stderr().lock(), "prgate: {error}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn collect_args() -> Result<Command, AppError> {
    let args = env::args_os()
        .skip(1)
        .map(|arg| arg.into_string().map_err(|_| CliError::NonUtf8Argument))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parse_args(args)?)
}

fn run(command: Command) -> Result<ExitCode, AppError> {
    match command {
        Command::Help => {
            write_lines([USAGE])?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            write_lines([concat!("prgate ", env!("CARGO_PKG_VERSION"))])?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(options) => run_check(&options),
    }
}

fn run_check(options: &CheckOptions) -> Result<ExitCode, AppError> {
    let linter = build_linter(options)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)?;
    let run = runtime.block_on(fetch_and_lint(options, linter))?;

    match options.format {
        OutputFormat::Text => write_lines(run.decision.messages.iter())?,
        OutputFormat::Json => {
            let report = GateReport::from_run(&run, &DefaultClock);
            write_lines([serde_json::to_string_pretty(&report)?])?;
        }
    }

    if run.decision.passed() {
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(summary) = &run.decision.summary {
        tracing::warn!(%summary, "pull request check failed");
    }
    Ok(ExitCode::from(EXIT_FAIL))
}

fn build_linter(options: &CheckOptions) -> Result<Linter, AppError> {
    let cwd = env::current_dir()
        .map_err(|error| AppError::WorkingDir(error.to_string()))
        .and_then(|dir| {
            Utf8PathBuf::from_path_buf(dir)
                .map_err(|raw| AppError::WorkingDir(format!("{} is not UTF-8", raw.display())))
        })?;

    let mut config = GateConfig::load(&cwd, options.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        max_header_length: options.max_header_length,
    });
    Ok(Linter::new(config.into_rule_set()?)?)
}

async fn fetch_and_lint(options: &CheckOptions, linter: Linter) -> Result<LintRun, CheckError> {
    let timeout = options.fetch_timeout;
    match &options.source {
        SourceChoice::File(path) => check(FileDescriptionSource::new(path.clone()), linter, timeout).await,
        SourceChoice::Event(path) => {
            check(EventPayloadDescriptionSource::new(path.clone()), linter, timeout).await
        }
        SourceChoice::Env(variable) => {
            check(EnvDescriptionSource::new(variable.clone()), linter, timeout).await
        }
        SourceChoice::Stdin => check(StdinDescriptionSource, linter, timeout).await,
        SourceChoice::Detect => match EventPayloadDescriptionSource::from_env() {
            Some(source) => check(source, linter, timeout).await,
            None => check(StdinDescriptionSource, linter, timeout).await,
        },
    }
}

async fn check<S>(source: S, linter: Linter, timeout: Option<Duration>) -> Result<LintRun, CheckError>
where
    S: DescriptionSource,
{
    let pr_check = PullRequestCheck::new(Arc::new(source), linter);
    match timeout {
        Some(limit) => pr_check.with_fetch_timeout(limit).run().await,
        None => pr_check.run().await,
    }
}

fn write_lines<I>(lines: I) -> Result<(), AppError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line.as_ref()).map_err(AppError::Output)?;
    }
    stdout.flush().map_err(AppError::Output)
}
