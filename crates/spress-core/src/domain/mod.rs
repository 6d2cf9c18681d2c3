//! Core domain layer for Spress scaffolding.
//!
//! This module contains pure business logic with no I/O. All filesystem and
//! package-registry concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: domain objects are Clone + PartialEq

pub mod error;
pub mod manifest;
pub mod skeleton;
pub mod theme;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use manifest::{INSTALLER_CONSTRAINT, INSTALLER_PACKAGE, SiteManifest};
pub use skeleton::{DEFAULT_SITE_TITLE, RenderContext, SkeletonEntry, SkeletonTree};
pub use theme::{BLANK_THEME, ThemeName, ThemePackage};

/// Site configuration file written at the root of every generated site.
/// Its presence is also the marker used to detect a previously generated
/// site when deciding whether `force` is required.
pub const CONFIG_FILENAME: &str = "config.yml";

/// Dependency manifest consumed by the package manager.
pub const MANIFEST_FILENAME: &str = "composer.json";

/// Directory, relative to the site root, that holds installed theme trees.
/// Each theme lives under its own `vendor/name` subpath so themes never
/// collide with each other or with the blank skeleton.
pub const THEMES_DIR: &str = "src/themes";
