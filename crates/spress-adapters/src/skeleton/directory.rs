//! Filesystem-based skeleton layers.
//!
//! Loads a skeleton directory into a `SkeletonTree`, preserving empty
//! directories. Skeleton layers are small text trees, so contents are read
//! eagerly; binary payloads belong in theme packages, not skeleton layers.

use std::path::PathBuf;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use spress_core::{
    application::{ApplicationError, ports::SkeletonSource},
    domain::SkeletonTree,
    error::SpressResult,
};

/// A skeleton layer backed by a directory on disk.
///
/// Registered after the embedded blank skeleton, these layers let a caller
/// overlay or replace individual files without special-casing.
#[derive(Debug, Clone)]
pub struct DirectorySkeleton {
    root: PathBuf,
}

impl DirectorySkeleton {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_error(&self, reason: impl ToString) -> spress_core::error::SpressError {
        ApplicationError::SkeletonSource {
            path: self.root.clone(),
            reason: reason.to_string(),
        }
        .into()
    }
}

impl SkeletonSource for DirectorySkeleton {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn tree(&self) -> SpressResult<SkeletonTree> {
        let mut tree = SkeletonTree::new();
        let mut count = 0usize;

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| self.read_error(e))?;
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| self.read_error(e))?
                .to_path_buf();

            if entry.file_type().is_dir() {
                tree = tree.with_dir(relative);
            } else {
                let contents =
                    std::fs::read_to_string(entry.path()).map_err(|e| self.read_error(e))?;
                tree = tree.with_file(relative, contents);
                count += 1;
            }
        }

        debug!(files = count, "skeleton layer loaded");
        Ok(tree)
    }
}
