//! Error handling for line ordering runs

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Exit code for a failed run
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a run that failed on I/O
pub const IO_FAILURE: i32 = 2;

/// Errors produced by the sort engine and its collaborators
#[derive(Error, Debug)]
pub enum SortError {
    /// Unrecognized ordering rule, algorithm or other malformed argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A file could not be read or written, or a directory could not be created
    #[error("I/O error, path: {}, error: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A worker terminated abnormally or a worker slot could not be accessed
    #[error("Worker failure, {context}: {message}")]
    Concurrency { context: String, message: String },
}

/// Result alias used throughout the crate
pub type SortResult<T> = Result<T, SortError>;

impl SortError {
    pub fn invalid_argument(message: impl Into<String>) -> SortError {
        SortError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> SortError {
        SortError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn concurrency(context: impl Into<String>, message: impl Into<String>) -> SortError {
        SortError::Concurrency {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::Io { .. } => IO_FAILURE,
            SortError::InvalidArgument { .. } | SortError::Concurrency { .. } => EXIT_FAILURE,
        }
    }
}
