use crate::model_scan::domain::CycleReport;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs can tell a broken model apart from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the model is acyclic and all required imports resolved
    Success = 0,
    /// The model itself is invalid (import cycle, or missing package in strict mode)
    ModelInvalid = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing folder, file I/O error, bad configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that escaped `run`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ModelError>() {
            Some(ModelError::ImportCycle { .. }) | Some(ModelError::MissingPackage { .. }) => {
                ExitCode::ModelInvalid
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ModelInvalid => write!(f, "Model Invalid (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while scanning a model tree and validating its import graph.
///
/// Messages are pure functions of the input so they can be asserted on verbatim.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Folder does not exist: {path}\n\n💡 Hint: Pass the root of your model tree with --folder")]
    FolderNotFound { path: PathBuf },

    #[error("Not a directory: {path}\n\n💡 Hint: --folder must point at a directory, not a single file")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Critical import recursion loop(s) detected:\n{cycles}\n\n💡 Hint: Break each loop by removing one of the listed imports")]
    ImportCycle { cycles: CycleReport },

    #[error("{message}\n\n💡 Hint: Add the missing packages to the scanned folder, or list them with --ignore-missing")]
    MissingPackage { message: String },

    #[error("Graph is empty: no packages/imports found.\n\n💡 Hint: Check --folder and --extension")]
    EmptyGraph,

    #[error("Unknown layout: {layout}\n\n💡 Hint: Use one of: spring, kamada_kawai, shell")]
    UnknownLayout { layout: String },

    /// Validation error for requests and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
