//! Skeleton trees: the ordered file layers merged into a new site.
//!
//! A skeleton is a template file tree copied into a new site as starting
//! content. Layers are applied in registration order; a file supplied by a
//! later layer overwrites one from an earlier layer at the same relative
//! path, so callers can stack optional fragments without special-casing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single entry of a skeleton layer, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonEntry {
    /// A directory created even when it stays empty.
    Dir(PathBuf),
    /// A text file rendered through the [`RenderContext`] before writing.
    File { path: PathBuf, contents: String },
}

impl SkeletonEntry {
    /// The entry's path relative to the site root.
    pub fn path(&self) -> &Path {
        match self {
            Self::Dir(path) => path,
            Self::File { path, .. } => path,
        }
    }
}

/// Ordered file tree supplied by one skeleton layer, or the merge of several.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonTree {
    entries: Vec<SkeletonEntry>,
}

impl SkeletonTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory entry (builder style).
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(SkeletonEntry::Dir(path.into()));
        self
    }

    /// Add a file entry (builder style).
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.entries.push(SkeletonEntry::File {
            path: path.into(),
            contents: contents.into(),
        });
        self
    }

    /// Apply a later layer over this one.
    ///
    /// A file at an already-present relative path replaces the earlier file
    /// in place (keeping its position, so write order stays stable); new
    /// paths are appended. Duplicate directories are dropped.
    pub fn merge(&mut self, later: SkeletonTree) {
        for entry in later.entries {
            match &entry {
                SkeletonEntry::Dir(path) => {
                    let known = self
                        .entries
                        .iter()
                        .any(|e| matches!(e, SkeletonEntry::Dir(p) if p == path));
                    if !known {
                        self.entries.push(entry);
                    }
                }
                SkeletonEntry::File { path, .. } => {
                    let slot = self.entries.iter().position(
                        |e| matches!(e, SkeletonEntry::File { path: p, .. } if p == path),
                    );
                    match slot {
                        Some(index) => self.entries[index] = entry,
                        None => self.entries.push(entry),
                    }
                }
            }
        }
    }

    /// Render every file's contents through the given context.
    pub fn render(&self, context: &RenderContext) -> SkeletonTree {
        let entries = self
            .entries
            .iter()
            .map(|entry| match entry {
                SkeletonEntry::Dir(path) => SkeletonEntry::Dir(path.clone()),
                SkeletonEntry::File { path, contents } => SkeletonEntry::File {
                    path: path.clone(),
                    contents: context.render(contents),
                },
            })
            .collect();
        SkeletonTree { entries }
    }

    pub fn entries(&self) -> &[SkeletonEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a file's contents by relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.entries.iter().find_map(|entry| match entry {
            SkeletonEntry::File { path: p, contents } if p == path => Some(contents.as_str()),
            _ => None,
        })
    }
}

/// Default site title rendered into a fresh configuration file.
pub const DEFAULT_SITE_TITLE: &str = "My Spress site";

/// Context for rendering skeleton files.
///
/// Immutable after creation; transformations create new instances (see
/// [`Self::with_variable`]). Built-in variables:
///
/// | Variable     | Value                                     |
/// |--------------|-------------------------------------------|
/// | `theme_name` | canonical name of the installed theme     |
/// | `site_title` | [`DEFAULT_SITE_TITLE`] unless overridden  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(theme_name: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        variables.insert("theme_name".to_string(), theme_name.into());
        variables.insert("site_title".to_string(), DEFAULT_SITE_TITLE.to_string());
        Self { variables }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{variable}}` placeholders.
    ///
    /// Unknown placeholders are left as-is so a skeleton never fails to
    /// generate over a typo in an optional variable.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_file_overwrites_earlier_at_same_path() {
        let mut base = SkeletonTree::new()
            .with_file("config.yml", "base")
            .with_file("index.html", "index");
        base.merge(SkeletonTree::new().with_file("config.yml", "override"));

        assert_eq!(base.file("config.yml"), Some("override"));
        assert_eq!(base.file("index.html"), Some("index"));
        assert_eq!(base.entries().len(), 2);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut base = SkeletonTree::new()
            .with_file("a", "1")
            .with_file("b", "2");
        base.merge(SkeletonTree::new().with_file("a", "3"));

        assert_eq!(base.entries()[0].path(), Path::new("a"));
    }

    #[test]
    fn new_paths_are_appended_in_order() {
        let mut base = SkeletonTree::new().with_dir("src/layouts");
        base.merge(
            SkeletonTree::new()
                .with_dir("src/plugins")
                .with_file("config.yml", "c"),
        );

        assert_eq!(base.entries().len(), 3);
        assert_eq!(base.entries()[2].path(), Path::new("config.yml"));
    }

    #[test]
    fn duplicate_dirs_collapse() {
        let mut base = SkeletonTree::new().with_dir("src/layouts");
        base.merge(SkeletonTree::new().with_dir("src/layouts"));
        assert_eq!(base.entries().len(), 1);
    }

    #[test]
    fn render_substitutes_known_variables() {
        let tree = SkeletonTree::new().with_file("config.yml", "name: {{theme_name}}");
        let rendered = tree.render(&RenderContext::new("vendor/name"));
        assert_eq!(rendered.file("config.yml"), Some("name: vendor/name"));
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::new("blank");
        assert_eq!(ctx.render("x: {{unknown}}"), "x: {{unknown}}");
    }

    #[test]
    fn context_override_wins() {
        let ctx = RenderContext::new("blank").with_variable("site_title", "Docs");
        assert_eq!(ctx.get("site_title"), Some("Docs"));
        assert_eq!(ctx.render("{{site_title}}"), "Docs");
    }
}
