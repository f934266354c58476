//! Global error handling for mergecraft
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::editor::EditorError;

/// Global error type for mergecraft operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Gitignore parsing errors
    #[error("Ignore rule error: {0}")]
    Ignore(#[from] ignore::Error),

    /// Editor launch errors
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Root path could not be resolved
    #[error("The specified path '{path}' was not found in '{search_root}' or its subdirectories")]
    PathNotFound { path: String, search_root: PathBuf },

    /// Scanner errors
    #[error("Scanner error: {0}")]
    Scanner(String),
}

/// Specialized Result type for mergecraft operations
pub type Result<T> = std::result::Result<T, MergeError>;

/// Creates a MergeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::MergeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting MergeError to io::Error for backward compatibility with tests
impl From<MergeError> for io::Error {
    fn from(err: MergeError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
