use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Dataset could not be loaded or parsed.
    Ingest(regio_ingest::IngestError),
    /// Dataset loaded but the hierarchy build rejected it.
    Build(regio_core::BuildError),
    /// Code lookup with no match.
    NotFound(String),
    /// Argument / usage errors (empty code, empty pattern).
    Usage(String),
    /// Terminal input failure in the interactive shell.
    Input(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Ingest(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Build(e) => write!(
                f,
                "{} {e}\n  {} the dataset violates code uniqueness; fix the source file",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::NotFound(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(e) => write!(f, "{} {e}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<regio_ingest::IngestError> for CliError {
    fn from(e: regio_ingest::IngestError) -> Self {
        CliError::Ingest(e)
    }
}

impl From<regio_core::BuildError> for CliError {
    fn from(e: regio_core::BuildError) -> Self {
        CliError::Build(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e)
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Print the error and terminate with the matching exit code.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    let code = match e {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code);
}
