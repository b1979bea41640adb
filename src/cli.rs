//! Command-line adapter.
//!
//! Loads each input completely, checks that it is UTF-8, hands the text to
//! the validator and reports the outcome. Only this layer turns a rejection
//! into an exit status.

use crate::conformance::{CorpusRunner, TestResult};
use crate::error::ValidationError;
use crate::json::limits::MAX_NESTING_DEPTH_CEILING;
use crate::json::{validate_with_limits, Limits};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "jsonvet")]
#[command(about = "Check that files are valid RFC 8259 JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate one or more JSON files
    Check(CheckArgs),

    /// Run an accept/reject conformance corpus
    Corpus {
        /// Path to the corpus JSON file
        path: PathBuf,
    },

    /// Show version information
    Version,
}

/// Options for `jsonvet check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files to validate; `-` or no files reads standard input
    pub files: Vec<PathBuf>,

    /// Use strict limits (1 MiB input, depth 64, no lone surrogates)
    #[arg(long)]
    pub strict: bool,

    /// Maximum nesting depth of arrays and objects (at most 1024)
    #[arg(
        long,
        env = "JSONVET_MAX_DEPTH",
        value_parser = clap::value_parser!(u64).range(..=MAX_NESTING_DEPTH_CEILING)
    )]
    pub max_depth: Option<u64>,

    /// Maximum input size in bytes
    #[arg(long, env = "JSONVET_MAX_SIZE")]
    pub max_size: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print nothing for valid inputs
    #[arg(short, long)]
    pub quiet: bool,
}

impl CheckArgs {
    /// Limits selected by the flags.
    pub fn limits(&self) -> Limits {
        let mut limits = if self.strict {
            Limits::strict()
        } else {
            Limits::standard()
        };
        if let Some(depth) = self.max_depth {
            limits = limits.with_max_nesting_depth(depth);
        }
        if let Some(size) = self.max_size {
            limits = limits.with_max_input_size(size);
        }
        limits
    }
}

/// Report format for `jsonvet check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path: ok` / `path:line:col: error[E103]: ...`
    Text,
    /// One JSON object per input
    Json,
}

/// Failures of the adapter itself, as opposed to invalid JSON.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input could not be read.
    #[error("{path}: {source}")]
    Io {
        /// Display name of the input.
        path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The input bytes are not UTF-8.
    #[error("{path}: invalid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Display name of the input.
        path: String,
        /// Length of the valid prefix.
        offset: usize,
    },
}

/// Outcome of one input, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    /// Valid JSON.
    Valid,
    /// Readable text that is not valid JSON.
    Invalid,
    /// The input could not be checked at all.
    Failed,
}

impl Status {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Valid => 0,
            Status::Invalid => 1,
            Status::Failed => 2,
        }
    }
}

/// Machine-readable line for `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Report<'a> {
    Ok {
        path: &'a str,
    },
    Err {
        path: &'a str,
        code: u32,
        name: &'static str,
        message: String,
        position: usize,
        line: usize,
        column: usize,
    },
}

impl<'a> Report<'a> {
    fn new(path: &'a str, text: &str, result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Report::Ok { path },
            Err(e) => {
                let (line, column) = e.line_col(text);
                Report::Err {
                    path,
                    code: e.code(),
                    name: e.name(),
                    message: e.kind().to_string(),
                    position: e.position(),
                    line,
                    column,
                }
            }
        }
    }
}

/// Display name for an input path.
fn display_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read an input completely.
fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let io_err = |source| CliError::Io {
        path: display_name(path),
        source,
    };
    if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(io_err)?;
        Ok(buf)
    } else {
        fs::read(path).map_err(io_err)
    }
}

/// Turn raw bytes into text, the adapter's half of the contract.
pub fn decode_text(path: &str, bytes: Vec<u8>) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        path: path.to_string(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Validate one decoded input and write its report.
pub fn check_text<W: Write>(
    out: &mut W,
    path: &str,
    text: &str,
    args: &CheckArgs,
) -> io::Result<Status> {
    let result = validate_with_limits(text, args.limits());

    match args.format {
        OutputFormat::Json if args.quiet && result.is_ok() => {}
        OutputFormat::Json => {
            let line = serde_json::to_string(&Report::new(path, text, &result))
                .map_err(io::Error::other)?;
            writeln!(out, "{}", line)?;
        }
        OutputFormat::Text => match &result {
            Ok(()) if args.quiet => {}
            Ok(()) => writeln!(out, "{}: ok", path)?,
            Err(e) => {
                let (line, column) = e.line_col(text);
                writeln!(
                    out,
                    "{}:{}:{}: error[E{}]: {}",
                    path,
                    line,
                    column,
                    e.code(),
                    e.kind()
                )?;
            }
        },
    }

    match result {
        Ok(()) => {
            tracing::debug!(path, "valid");
            Ok(Status::Valid)
        }
        Err(e) => {
            tracing::debug!(path, code = e.code(), position = e.position(), "invalid");
            Ok(Status::Invalid)
        }
    }
}

/// Run `jsonvet check`, returning the worst status seen.
pub fn run_check(args: &CheckArgs) -> Status {
    let files = if args.files.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        args.files.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut worst = Status::Valid;

    for file in &files {
        let name = display_name(file);
        tracing::info!(path = %name, "checking");

        let status = match read_input(file).and_then(|bytes| decode_text(&name, bytes)) {
            Ok(text) => match check_text(&mut out, &name, &text, args) {
                Ok(status) => status,
                Err(e) => {
                    tracing::error!(error = %e, "failed to write report");
                    Status::Failed
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "cannot check input");
                eprintln!("jsonvet: {}", e);
                Status::Failed
            }
        };
        worst = worst.max(status);
    }

    worst
}

/// Run `jsonvet corpus`.
pub fn run_corpus(path: &Path) -> Status {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner,
        Err(e) => {
            tracing::error!(error = %e, "cannot load corpus");
            eprintln!("jsonvet: {}: {}", path.display(), e);
            return Status::Failed;
        }
    };

    tracing::info!(vectors = runner.vector_count(), "running corpus");
    let results = runner.run_all();

    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("FAIL {} - expected: {}, actual: {}", id, expected, actual);
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        Status::Valid
    } else {
        Status::Invalid
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> ExitCode {
    let status = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Corpus { path } => run_corpus(&path),
        Commands::Version => {
            println!("jsonvet v{}", env!("CARGO_PKG_VERSION"));
            Status::Valid
        }
    };
    ExitCode::from(status.exit_code())
}
