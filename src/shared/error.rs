use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated and presented
    Success = 0,
    /// Configuration, probe or persistence failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for inventory collection and SBOM generation.
///
/// Per-package problems are not errors; they travel as
/// [`ProbeWarning`](crate::sbom_generation::domain::ProbeWarning) values.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to query {probe} packages\nDetails: {details}\n\n💡 Hint: Verify that {probe} works on this host, or exclude it with --tools")]
    ProbeQueryFatal { probe: String, details: String },

    #[error("No package manager selected: {reason}\n\n💡 Hint: Use --tools with one or more of: {known}")]
    NoProbesSelected { reason: String, known: String },

    #[error("Diff supports spdx-json output only (requested: {format})\n\n💡 Hint: Drop --format or use --format spdx-json together with --diff")]
    DiffFormatMismatch { format: String },

    #[error("{path} already exists\n\n💡 Hint: Use the --force option to overwrite the file")]
    OutputExists { path: PathBuf },

    #[error("Baseline SBOM not found: {path}\n\n💡 Hint: Pass the path of a previously generated spdx-json document to --diff")]
    BaselineNotFound { path: PathBuf },

    #[error("Failed to parse baseline SBOM: {path}\nDetails: {details}\n\n💡 Hint: The baseline must be an SPDX JSON document produced by this tool")]
    BaselineParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
