//! Command-line argument parsing for `prgate`.

use camino::Utf8PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Usage text printed by `prgate help`.
pub(crate) const USAGE: &str = "\
Usage: prgate [SOURCE] [OPTIONS]
       prgate help | version

Sources (default: $GITHUB_EVENT_PATH payload when set, otherwise stdin):
  --file PATH               read the description from a text file
  --event PATH              read pull_request.body from a CI event payload
  --env VAR                 read the description from an environment variable
  --stdin                   read the description from standard input

Options:
  --config PATH             load rule configuration from PATH
                            (default: ./prgate.toml when present)
  --max-header-length N     override the header-max-length limit
  --format text|json        output format (default: text)
  --fetch-timeout-secs N    abort when reading the description takes longer

Exit status: 0 pass, 1 fail, 2 usage, configuration or input error.
Log filter: PRGATE_LOG (default: warn).";

/// Errors raised while parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CliError {
    #[error("argument is not valid UTF-8")]
    NonUtf8Argument,
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("only one description source may be given, found {first} and {second}")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },
}

/// Where the description is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum SourceChoice {
    /// `$GITHUB_EVENT_PATH` when set, otherwise stdin.
    #[default]
    Detect,
    File(Utf8PathBuf),
    Event(Utf8PathBuf),
    Env(String),
    Stdin,
}

impl SourceChoice {
    const fn flag(&self) -> &'static str {
        match self {
            Self::Detect => "default source",
            Self::File(_) => "--file",
            Self::Event(_) => "--event",
            Self::Env(_) => "--env",
            Self::Stdin => "--stdin",
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options of a check invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CheckOptions {
    pub(crate) source: SourceChoice,
    pub(crate) config: Option<Utf8PathBuf>,
    pub(crate) max_header_length: Option<usize>,
    pub(crate) format: OutputFormat,
    pub(crate) fetch_timeout: Option<Duration>,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Version,
    Check(CheckOptions),
}

/// Parses arguments, excluding the program name.
pub(crate) fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, CliError> {
    let mut options = CheckOptions::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = split_inline_value(arg);
        let mut value_for = |name: &'static str| {
            inline
                .clone()
                .or_else(|| iter.next())
                .ok_or(CliError::MissingValue(name))
        };

        match flag.as_str() {
            "help" | "-h" | "--help" => return Ok(Command::Help),
            "version" | "-V" | "--version" => return Ok(Command::Version),
            "--file" => set_source(&mut options, SourceChoice::File(value_for("--file")?.into()))?,
            "--event" => {
                set_source(&mut options, SourceChoice::Event(value_for("--event")?.into()))?;
            }
            "--env" => set_source(&mut options, SourceChoice::Env(value_for("--env")?))?,
            "--stdin" => set_source(&mut options, SourceChoice::Stdin)?,
            "--config" => options.config = Some(value_for("--config")?.into()),
            "--max-header-length" => {
                options.max_header_length =
                    Some(parse_number("--max-header-length", &value_for("--max-header-length")?)?);
            }
            "--format" => options.format = parse_format(&value_for("--format")?)?,
            "--fetch-timeout-secs" => {
                let secs = parse_number("--fetch-timeout-secs", &value_for("--fetch-timeout-secs")?)?;
                options.fetch_timeout = Some(Duration::from_secs(secs));
            }
            other => return Err(CliError::UnknownArgument(other.to_owned())),
        }
    }

    Ok(Command::Check(options))
}

/// Splits `--flag=value` into its parts; other arguments pass through.
fn split_inline_value(arg: String) -> (String, Option<String>) {
    if arg.starts_with("--")
        && let Some((name, value)) = arg.split_once('=')
    {
        return (name.to_owned(), Some(value.to_owned()));
    }
    (arg, None)
}

fn set_source(options: &mut CheckOptions, choice: SourceChoice) -> Result<(), CliError> {
    if options.source != SourceChoice::Detect {
        return Err(CliError::ConflictingSources {
            first: options.source.flag(),
            second: choice.flag(),
        });
    }
    options.source = choice;
    Ok(())
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_owned(),
    })
}

fn parse_format(value: &str) -> Result<OutputFormat, CliError> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(CliError::InvalidValue {
            flag: "--format",
            value: other.to_owned(),
        }),
    }
}
