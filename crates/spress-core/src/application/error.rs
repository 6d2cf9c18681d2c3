//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Filesystem failures carry the underlying I/O error text untouched; they
//! are deliberately not folded into the domain taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while driving the adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A skeleton layer could not be read.
    #[error("skeleton source at {path} could not be read: {reason}")]
    SkeletonSource { path: PathBuf, reason: String },

    /// The package manager command failed.
    #[error("package manager failed: {command}: {reason}")]
    PackageManager { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SkeletonSource { path, .. } => vec![
                format!("Skeleton directory '{}' is unreadable", path.display()),
                "Check the skeleton paths in your configuration".into(),
            ],
            Self::PackageManager { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure composer is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
        }
    }
}
