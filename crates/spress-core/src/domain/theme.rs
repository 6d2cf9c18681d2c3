//! Theme identifiers and resolved theme packages.

use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Identifier of the built-in blank skeleton. Requesting it skips package
/// resolution entirely.
pub const BLANK_THEME: &str = "blank";

/// A parsed theme identifier of the form `vendor/name[:version-constraint]`.
///
/// The canonical name (without the constraint) is what gets recorded in the
/// generated configuration and queried against repositories; the raw
/// requested form, constraint included, is what is handed to the package
/// manager for installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeName {
    raw: String,
    name: String,
    constraint: Option<String>,
}

impl ThemeName {
    /// Parse a template identifier supplied by the caller.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if input.is_empty() {
            return Err(DomainError::EmptyThemeName);
        }

        let (name, constraint) = match input.split_once(':') {
            Some((name, constraint)) => (name, Some(constraint)),
            None => (input, None),
        };

        if name.is_empty() || constraint.is_some_and(str::is_empty) {
            return Err(DomainError::InvalidThemeName { name: input.into() });
        }

        Ok(Self {
            raw: input.to_string(),
            name: name.to_string(),
            constraint: constraint.map(str::to_string),
        })
    }

    /// Canonical package name, without any version constraint.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version constraint, if the caller supplied one.
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// The identifier exactly as requested, constraint included.
    pub fn requested(&self) -> &str {
        &self.raw
    }

    /// Whether this is the built-in blank skeleton rather than a package.
    ///
    /// A constraint disqualifies: `blank:1.0` is treated as a package named
    /// `blank`, not as the built-in skeleton.
    pub fn is_blank(&self) -> bool {
        self.name == BLANK_THEME && self.constraint.is_none()
    }
}

/// A theme resolved by the package manager.
///
/// Created during generation and discarded once the theme's skeleton
/// fragment has been copied; the generator never caches it across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePackage {
    /// Canonical `vendor/name` of the installed package.
    pub name: String,
    /// Where the package manager materialized the package.
    pub location: PathBuf,
    /// Whether the package is tagged as a theme.
    pub is_theme: bool,
}
