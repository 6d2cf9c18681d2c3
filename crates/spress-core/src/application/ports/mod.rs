//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `spress-adapters` implement
//! these; tests substitute in-memory fakes or mocks.

use std::path::Path;

use crate::domain::{SkeletonTree, ThemePackage};
use crate::error::SpressResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `spress_adapters::filesystem::LocalFilesystem` (production)
/// - `spress_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpressResult<()>;

    /// Write text content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, contents: &str) -> SpressResult<()>;

    /// Recursively copy a directory tree. Existing files at the destination
    /// are overwritten; files outside the copied set are left alone.
    fn copy_tree(&self, src: &Path, dst: &Path) -> SpressResult<()>;
}

/// Port for one ordered skeleton layer.
///
/// Implemented by:
/// - `spress_adapters::skeleton::BlankSkeleton` (embedded blank site)
/// - `spress_adapters::skeleton::DirectorySkeleton` (on-disk layers)
pub trait SkeletonSource: Send + Sync {
    /// Produce this layer's file tree.
    fn tree(&self) -> SpressResult<SkeletonTree>;
}

/// Options accepted by [`PackageManager::install`] and
/// [`PackageManager::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Compute the operations but do not write anything.
    pub dry_run: bool,
    /// Fetch from version-control sources rather than distribution archives.
    pub prefer_source: bool,
    /// Exclude development-only dependencies.
    pub no_dev: bool,
    /// Skip post-install hook execution.
    pub no_scripts: bool,
}

/// Port for the package resolver.
///
/// Existence and theme-kind queries are deliberately two separate methods:
/// callers observe their failure modes in order (`ThemeNotFound` before
/// `NotATheme`) and tests stub them independently.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    /// True if the named package is resolvable from registered sources.
    fn exist_package(&self, name: &str) -> SpressResult<bool>;

    /// True if the package is tagged as a theme (vs a plain dependency).
    fn is_theme_package(&self, name: &str) -> SpressResult<bool>;

    /// Metadata for an installed package.
    fn package(&self, name: &str) -> SpressResult<ThemePackage>;

    /// Materialize the named packages into the project's dependency area.
    /// With no packages, reproduce the previously locked set.
    fn install(&self, options: &InstallOptions, packages: &[String]) -> SpressResult<()>;

    /// Refresh installed packages to the latest versions satisfying their
    /// constraints. With no packages, all are updated.
    fn update(&self, options: &InstallOptions, packages: &[String]) -> SpressResult<()>;
}
