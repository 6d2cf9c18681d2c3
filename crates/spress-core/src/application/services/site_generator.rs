//! Site generator - the scaffolding orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the request (theme name, destination conflict)
//! 2. Resolve and install the theme package when one is requested
//! 3. Merge skeleton layers, render them, and write the site tree
//! 4. Copy the theme's skeleton fragment and write the dependency manifest
//!
//! Every validation failure happens before the step it guards mutates the
//! destination. The copy steps themselves are not transactional: a failure
//! mid-copy leaves a partial tree and is surfaced as-is.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, InstallOptions, PackageManager, SkeletonSource},
    domain::{
        CONFIG_FILENAME, MANIFEST_FILENAME, THEMES_DIR,
        error::DomainError,
        manifest::SiteManifest,
        skeleton::{DEFAULT_SITE_TITLE, RenderContext, SkeletonEntry, SkeletonTree},
        theme::{ThemeName, ThemePackage},
    },
    error::SpressResult,
};

/// Produces a new site at a target path from skeleton layers and an
/// optionally resolved theme package.
///
/// The package manager is optional: a generator built without one can still
/// service the blank template, and rejects anything else before touching the
/// filesystem.
pub struct SiteGenerator {
    skeletons: Vec<Box<dyn SkeletonSource>>,
    filesystem: Box<dyn Filesystem>,
    packages: Option<Box<dyn PackageManager>>,
    site_title: String,
}

impl SiteGenerator {
    /// Create a generator for the given ordered skeleton layers.
    ///
    /// Layers are immutable configuration for the generator's lifetime;
    /// later layers override earlier ones at equal relative paths.
    pub fn new(skeletons: Vec<Box<dyn SkeletonSource>>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            skeletons,
            filesystem,
            packages: None,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }

    /// Attach a package manager, enabling non-blank themes.
    pub fn with_package_manager(mut self, packages: Box<dyn PackageManager>) -> Self {
        self.packages = Some(packages);
        self
    }

    /// Override the site title rendered into the configuration file.
    pub fn with_site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }

    /// Generate a site at `path` from the given template identifier.
    ///
    /// `template` is either the blank identifier or a package-style
    /// `vendor/name[:version-constraint]`. With `force`, a previously
    /// generated site at `path` is overwritten in place; files outside the
    /// generated set are never deleted.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn generate(&self, path: &Path, template: &str, force: bool) -> SpressResult<()> {
        let theme = ThemeName::parse(template)?;

        // The configuration file doubles as the generated-site marker.
        let marker = path.join(CONFIG_FILENAME);
        if self.filesystem.exists(&marker) && !force {
            return Err(DomainError::SiteExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        // Resolution and installation happen before the first write, so a
        // rejected theme leaves the destination untouched.
        let package = self.resolve_theme(&theme)?;

        let context =
            RenderContext::new(theme.name()).with_variable("site_title", self.site_title.clone());
        let tree = self.merged_skeleton()?.render(&context);
        self.write_tree(path, &tree)?;

        if let Some(package) = &package {
            self.copy_theme_fragment(path, package)?;
        }

        let manifest = match &package {
            Some(package) => SiteManifest::new().with_theme(&package.name, theme.constraint()),
            None => SiteManifest::new(),
        };
        self.filesystem
            .write_file(&path.join(MANIFEST_FILENAME), &manifest.to_json())?;

        info!(theme = theme.name(), "site generated");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Resolve and install the requested theme; `None` for the blank case.
    ///
    /// Failure order is observable and fixed: missing resolver, then
    /// unresolvable package, then wrong package kind.
    fn resolve_theme(&self, theme: &ThemeName) -> SpressResult<Option<ThemePackage>> {
        if theme.is_blank() {
            debug!("blank template requested, skipping package resolution");
            return Ok(None);
        }

        let packages = self
            .packages
            .as_deref()
            .ok_or(DomainError::PackageManagerRequired)?;

        if !packages.exist_package(theme.name())? {
            return Err(DomainError::ThemeNotFound {
                name: theme.name().to_string(),
            }
            .into());
        }
        if !packages.is_theme_package(theme.name())? {
            return Err(DomainError::NotATheme {
                name: theme.name().to_string(),
            }
            .into());
        }

        debug!(theme = theme.requested(), "installing theme package");
        packages.install(&InstallOptions::default(), &[theme.requested().to_string()])?;

        Ok(Some(packages.package(theme.name())?))
    }

    /// Merge all skeleton layers in registration order.
    fn merged_skeleton(&self) -> SpressResult<SkeletonTree> {
        let mut merged = SkeletonTree::new();
        for source in &self.skeletons {
            merged.merge(source.tree()?);
        }
        Ok(merged)
    }

    /// Write a rendered tree below `root`, creating parents as needed.
    fn write_tree(&self, root: &Path, tree: &SkeletonTree) -> SpressResult<()> {
        self.filesystem.create_dir_all(root)?;

        for entry in tree.entries() {
            match entry {
                SkeletonEntry::Dir(rel) => {
                    self.filesystem.create_dir_all(&root.join(rel))?;
                }
                SkeletonEntry::File { path, contents } => {
                    let target = root.join(path);
                    if let Some(parent) = target.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&target, contents)?;
                }
            }
        }

        Ok(())
    }

    /// Copy an installed theme's skeleton fragment into the site's theme
    /// area, keyed by the package's `vendor/name` path.
    fn copy_theme_fragment(&self, root: &Path, package: &ThemePackage) -> SpressResult<()> {
        if !self.filesystem.exists(&package.location) {
            debug!(package = %package.name, "theme package carries no skeleton fragment");
            return Ok(());
        }

        let destination = root.join(THEMES_DIR).join(&package.name);
        if let Some(parent) = destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.copy_tree(&package.location, &destination)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::MockPackageManager;
    use crate::domain::{BLANK_THEME, SkeletonTree};
    use crate::error::SpressError;

    // ── Test doubles ──────────────────────────────────────────────────────

    /// Records every mutation so tests can assert both on the produced tree
    /// and on the "nothing was written" failure contracts.
    #[derive(Clone, Default)]
    struct FakeFilesystem {
        inner: Arc<Mutex<FakeState>>,
    }

    #[derive(Default)]
    struct FakeState {
        files: BTreeMap<PathBuf, String>,
        dirs: BTreeSet<PathBuf>,
        copies: Vec<(PathBuf, PathBuf)>,
        // Paths that exist without the fake having created them, e.g. the
        // package manager's installation area.
        preexisting: BTreeSet<PathBuf>,
    }

    impl FakeFilesystem {
        fn new() -> Self {
            Self::default()
        }

        fn preexisting(self, path: impl Into<PathBuf>) -> Self {
            self.inner.lock().unwrap().preexisting.insert(path.into());
            self
        }

        fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.inner.lock().unwrap().files.get(path.as_ref()).cloned()
        }

        fn has_dir(&self, path: impl AsRef<Path>) -> bool {
            self.inner.lock().unwrap().dirs.contains(path.as_ref())
        }

        fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
            self.inner.lock().unwrap().copies.clone()
        }

        fn files(&self) -> BTreeMap<PathBuf, String> {
            self.inner.lock().unwrap().files.clone()
        }

        fn is_untouched(&self) -> bool {
            let state = self.inner.lock().unwrap();
            state.files.is_empty() && state.dirs.is_empty() && state.copies.is_empty()
        }
    }

    impl Filesystem for FakeFilesystem {
        fn exists(&self, path: &Path) -> bool {
            let state = self.inner.lock().unwrap();
            state.files.contains_key(path)
                || state.dirs.contains(path)
                || state.preexisting.contains(path)
        }

        fn create_dir_all(&self, path: &Path) -> SpressResult<()> {
            self.inner.lock().unwrap().dirs.insert(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, contents: &str) -> SpressResult<()> {
            self.inner
                .lock()
                .unwrap()
                .files
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn copy_tree(&self, src: &Path, dst: &Path) -> SpressResult<()> {
            self.inner
                .lock()
                .unwrap()
                .copies
                .push((src.to_path_buf(), dst.to_path_buf()));
            Ok(())
        }
    }

    /// The blank layer as the embedded adapter ships it, reduced to what the
    /// generator's contract needs.
    struct TestBlankSkeleton;

    impl SkeletonSource for TestBlankSkeleton {
        fn tree(&self) -> SpressResult<SkeletonTree> {
            Ok(SkeletonTree::new()
                .with_file("config.yml", "name: {{theme_name}}\ntitle: {{site_title}}\n")
                .with_file("src/content/index.html", "<h1>{{site_title}}</h1>\n")
                .with_dir("src/content/assets")
                .with_dir("src/content/posts")
                .with_dir("src/layouts")
                .with_dir("src/includes")
                .with_dir("src/plugins"))
        }
    }

    fn blank_generator(fs: &FakeFilesystem) -> SiteGenerator {
        SiteGenerator::new(vec![Box::new(TestBlankSkeleton)], Box::new(fs.clone()))
    }

    fn site() -> PathBuf {
        PathBuf::from("/tmp/site")
    }

    // ── Blank generation ──────────────────────────────────────────────────

    #[test]
    fn blank_site_generates_standard_layout() {
        let fs = FakeFilesystem::new();
        blank_generator(&fs)
            .generate(&site(), BLANK_THEME, false)
            .unwrap();

        assert!(fs.file(site().join("config.yml")).is_some());
        assert!(fs.file(site().join("composer.json")).is_some());
        assert!(fs.file(site().join("src/content/index.html")).is_some());
        for dir in [
            "src/content/assets",
            "src/content/posts",
            "src/layouts",
            "src/includes",
            "src/plugins",
        ] {
            assert!(fs.has_dir(site().join(dir)), "missing directory: {dir}");
        }
    }

    #[test]
    fn blank_config_records_the_blank_theme() {
        let fs = FakeFilesystem::new();
        blank_generator(&fs)
            .generate(&site(), BLANK_THEME, false)
            .unwrap();

        let config = fs.file(site().join("config.yml")).unwrap();
        assert!(config.contains("name: blank"));
        assert!(config.contains("title: My Spress site"));
    }

    #[test]
    fn site_title_override_reaches_the_config() {
        let fs = FakeFilesystem::new();
        blank_generator(&fs)
            .with_site_title("Release notes")
            .generate(&site(), BLANK_THEME, false)
            .unwrap();

        let config = fs.file(site().join("config.yml")).unwrap();
        assert!(config.contains("title: Release notes"));
    }

    #[test]
    fn blank_manifest_requires_only_the_installer() {
        let fs = FakeFilesystem::new();
        blank_generator(&fs)
            .generate(&site(), BLANK_THEME, false)
            .unwrap();

        let manifest = fs.file(site().join("composer.json")).unwrap();
        assert!(manifest.contains("spress/spress-installer"));
    }

    #[test]
    fn generating_into_existing_empty_dir_succeeds() {
        let fs = FakeFilesystem::new().preexisting(site());
        blank_generator(&fs)
            .generate(&site(), BLANK_THEME, false)
            .unwrap();
        assert!(fs.file(site().join("config.yml")).is_some());
    }

    // ── Conflict and force semantics ──────────────────────────────────────

    #[test]
    fn second_generation_without_force_is_a_conflict() {
        let fs = FakeFilesystem::new();
        let generator = blank_generator(&fs);
        generator.generate(&site(), BLANK_THEME, false).unwrap();

        let err = generator.generate(&site(), BLANK_THEME, false).unwrap_err();
        assert_eq!(
            err,
            SpressError::Domain(DomainError::SiteExists { path: site() })
        );
    }

    #[test]
    fn force_overwrites_and_is_idempotent() {
        let fs = FakeFilesystem::new();
        let generator = blank_generator(&fs);
        generator.generate(&site(), BLANK_THEME, false).unwrap();
        let first = fs.files();

        generator.generate(&site(), BLANK_THEME, true).unwrap();
        assert_eq!(fs.files(), first);
    }

    // ── Validation failures write nothing ─────────────────────────────────

    #[test]
    fn empty_theme_name_is_rejected_before_writing() {
        let fs = FakeFilesystem::new();
        let err = blank_generator(&fs).generate(&site(), "", false).unwrap_err();

        assert_eq!(err, SpressError::Domain(DomainError::EmptyThemeName));
        assert!(fs.is_untouched());
    }

    #[test]
    fn non_blank_without_package_manager_fails_before_writing() {
        let fs = FakeFilesystem::new();
        let err = blank_generator(&fs)
            .generate(&site(), "template-test", false)
            .unwrap_err();

        assert_eq!(
            err,
            SpressError::Domain(DomainError::PackageManagerRequired)
        );
        assert!(fs.is_untouched());
    }

    #[test]
    fn unknown_theme_reports_not_found_and_writes_nothing() {
        let fs = FakeFilesystem::new();
        let mut packages = MockPackageManager::new();
        packages
            .expect_exist_package()
            .withf(|name| name == "vendor-name/foo")
            .returning(|_| Ok(false));
        // No expectation on is_theme_package: a call would panic, proving
        // the existence check short-circuits.

        let err = blank_generator(&fs)
            .with_package_manager(Box::new(packages))
            .generate(&site(), "vendor-name/foo", false)
            .unwrap_err();

        assert_eq!(
            err,
            SpressError::Domain(DomainError::ThemeNotFound {
                name: "vendor-name/foo".into()
            })
        );
        assert!(fs.is_untouched());
    }

    #[test]
    fn non_theme_package_is_rejected_and_writes_nothing() {
        let fs = FakeFilesystem::new();
        let mut packages = MockPackageManager::new();
        packages.expect_exist_package().returning(|_| Ok(true));
        packages.expect_is_theme_package().returning(|_| Ok(false));

        let err = blank_generator(&fs)
            .with_package_manager(Box::new(packages))
            .generate(&site(), "vendor-name/foo", false)
            .unwrap_err();

        assert_eq!(
            err,
            SpressError::Domain(DomainError::NotATheme {
                name: "vendor-name/foo".into()
            })
        );
        assert!(fs.is_untouched());
    }

    #[test]
    fn existence_is_checked_before_theme_kind() {
        let fs = FakeFilesystem::new();
        let mut sequence = mockall::Sequence::new();
        let mut packages = MockPackageManager::new();
        packages
            .expect_exist_package()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(true));
        packages
            .expect_is_theme_package()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(false));

        let _ = blank_generator(&fs)
            .with_package_manager(Box::new(packages))
            .generate(&site(), "vendor-name/foo", false);
    }

    // ── Themed generation ─────────────────────────────────────────────────

    fn spresso_manager(location: PathBuf) -> MockPackageManager {
        let mut packages = MockPackageManager::new();
        packages
            .expect_exist_package()
            .withf(|name| name == "spress/spress-theme-spresso")
            .returning(|_| Ok(true));
        packages
            .expect_is_theme_package()
            .withf(|name| name == "spress/spress-theme-spresso")
            .returning(|_| Ok(true));
        packages
            .expect_install()
            .withf(|options, list| {
                *options == InstallOptions::default()
                    && list == ["spress/spress-theme-spresso:2.1.*-dev"]
            })
            .returning(|_, _| Ok(()));
        packages.expect_package().returning(move |name| {
            Ok(ThemePackage {
                name: name.to_string(),
                location: location.clone(),
                is_theme: true,
            })
        });
        packages
    }

    #[test]
    fn themed_generation_records_canonical_name() {
        let location = PathBuf::from("/packages/spresso");
        let fs = FakeFilesystem::new().preexisting(location.clone());

        blank_generator(&fs)
            .with_package_manager(Box::new(spresso_manager(location)))
            .generate(&site(), "spress/spress-theme-spresso:2.1.*-dev", false)
            .unwrap();

        // Canonical name, not the raw requested string with constraint.
        let config = fs.file(site().join("config.yml")).unwrap();
        assert!(config.contains("name: spress/spress-theme-spresso"));
        assert!(!config.contains("2.1.*-dev"));
    }

    #[test]
    fn theme_fragment_is_copied_into_theme_area() {
        let location = PathBuf::from("/packages/spresso");
        let fs = FakeFilesystem::new().preexisting(location.clone());

        blank_generator(&fs)
            .with_package_manager(Box::new(spresso_manager(location.clone())))
            .generate(&site(), "spress/spress-theme-spresso:2.1.*-dev", false)
            .unwrap();

        assert_eq!(
            fs.copies(),
            vec![(
                location,
                site().join("src/themes/spress/spress-theme-spresso")
            )]
        );
    }

    #[test]
    fn themed_manifest_declares_the_theme_dependency() {
        let location = PathBuf::from("/packages/spresso");
        let fs = FakeFilesystem::new().preexisting(location.clone());

        blank_generator(&fs)
            .with_package_manager(Box::new(spresso_manager(location)))
            .generate(&site(), "spress/spress-theme-spresso:2.1.*-dev", false)
            .unwrap();

        let manifest = fs.file(site().join("composer.json")).unwrap();
        assert!(manifest.contains("\"spress/spress-theme-spresso\": \"2.1.*-dev\""));
        assert!(manifest.contains("spress/spress-installer"));
    }

    #[test]
    fn theme_without_fragment_skips_the_copy() {
        // The package's location does not exist, so there is nothing to copy;
        // generation still succeeds and the baseline skeleton stands.
        let fs = FakeFilesystem::new();
        blank_generator(&fs)
            .with_package_manager(Box::new(spresso_manager("/packages/spresso".into())))
            .generate(&site(), "spress/spress-theme-spresso:2.1.*-dev", false)
            .unwrap();

        assert!(fs.copies().is_empty());
        assert!(fs.file(site().join("config.yml")).is_some());
    }

    #[test]
    fn later_skeleton_layer_overrides_the_blank_one() {
        struct OverrideLayer;
        impl SkeletonSource for OverrideLayer {
            fn tree(&self) -> SpressResult<SkeletonTree> {
                Ok(SkeletonTree::new().with_file("src/content/index.html", "override\n"))
            }
        }

        let fs = FakeFilesystem::new();
        let generator = SiteGenerator::new(
            vec![Box::new(TestBlankSkeleton), Box::new(OverrideLayer)],
            Box::new(fs.clone()),
        );
        generator.generate(&site(), BLANK_THEME, false).unwrap();

        assert_eq!(
            fs.file(site().join("src/content/index.html")).as_deref(),
            Some("override\n")
        );
    }
}
