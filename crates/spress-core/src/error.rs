//! Unified error handling for Spress Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors. Display is transparent: domain messages are part of
//! the external contract and must reach the caller verbatim.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Spress Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpressError {
    /// Errors from the domain layer (scaffolding rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (adapter failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SpressError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SpressResult<T> = Result<T, SpressError>;
