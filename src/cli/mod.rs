//! CLI module for bracefmt
//!
//! ## Commands
//!
//! - `render [--sequential] [--file PATH | TEMPLATE] [ARGS...]` - Print the formatted template
//! - `scan [--file PATH | TEMPLATE]` - List placeholder tokens with their byte spans
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions write to a caller-supplied sink and return `CliResult<T>` instead of calling
//! `process::exit`. Only the top-level `run()` function reports errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use thiserror::Error;

use crate::version::BRACEFMT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Rendered through `miette` by [`run`], so each variant carries a diagnostic code and, where useful, help.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("no template given")]
    #[diagnostic(
        code(bracefmt::cli::missing_template),
        help("pass the template as the first argument, or use --file PATH (`-` reads stdin)")
    )]
    MissingTemplate,

    #[error("failed to read template from {path}")]
    #[diagnostic(code(bracefmt::cli::read_template))]
    ReadTemplate {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    #[diagnostic(code(bracefmt::cli::write))]
    Write(#[source] io::Error),
}

impl CliError {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::MissingTemplate | CliError::ReadTemplate { .. } | CliError::Write(_) => ExitCode::FAILURE,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Positional {0}-style placeholder formatting
#[derive(Parser, Debug)]
#[command(name = "bracefmt")]
#[command(version = BRACEFMT_VERSION)]
#[command(about = "Replace {0}, {1}, ... placeholders in a template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace {0}, {1}, ... in a template with the given values
    Render {
        /// Read the template from a file (`-` for stdin) instead of the first argument
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Re-scan substituted text for later placeholders (legacy behavior)
        #[arg(long)]
        sequential: bool,
        /// Template followed by its values (only values when --file is given)
        #[arg(value_name = "TEMPLATE_AND_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// List placeholder tokens as `<index>\t<start>..<end>` byte spans
    Scan {
        /// Read the template from a file (`-` for stdin)
        #[arg(short, long, value_name = "PATH", conflicts_with = "template")]
        file: Option<PathBuf>,
        /// Template to scan
        #[arg(value_name = "TEMPLATE", allow_hyphen_values = true)]
        template: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(cli, &mut out) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            let exit_code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(exit_code.0);
        }
    }
}

/// Execute the parsed command against `out` and return its exit code.
pub fn execute(cli: Cli, out: &mut impl Write) -> CliResult<ExitCode> {
    match cli.command {
        Command::Render {
            file,
            sequential,
            values,
        } => commands::render(file.as_deref(), values, sequential, out),
        Command::Scan { file, template } => commands::scan(file.as_deref(), template, out),
    }
}

// ============================================================================
// Tests
// ============================================================================
