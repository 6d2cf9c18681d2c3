//! Package manager backed by the external `composer` binary.
//!
//! All dependency resolution, network access, and lock-file handling live in
//! composer itself; this adapter only builds command lines, runs them in the
//! project directory, and interprets exit status and JSON output. Command
//! failures are surfaced with the command line and captured stderr; nothing
//! is retried.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde::Deserialize;
use tracing::{debug, instrument};

use spress_core::{
    application::{
        ApplicationError,
        ports::{InstallOptions, PackageManager},
    },
    domain::ThemePackage,
    error::SpressResult,
};

/// Package `type` that marks a composer package as a Spress theme.
pub const THEME_PACKAGE_TYPE: &str = "spress-theme";

/// Package manager adapter that shells out to `composer`.
pub struct ComposerPackageManager {
    project_dir: PathBuf,
    binary: PathBuf,
}

/// The slice of `composer show --format=json` this adapter reads.
#[derive(Debug, Deserialize)]
struct PackageInfo {
    #[serde(rename = "type")]
    package_type: Option<String>,
}

impl ComposerPackageManager {
    /// Create an adapter operating inside the given project directory.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            binary: PathBuf::from("composer"),
        }
    }

    /// Override the composer binary (tests point this at a stub).
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    fn run(&self, args: &[String]) -> SpressResult<Output> {
        debug!(command = %self.render_command(args), "running composer");
        Command::new(&self.binary)
            .args(args)
            .current_dir(&self.project_dir)
            .output()
            .map_err(|e| self.command_error(args, e.to_string()))
    }

    /// Run and require success, returning captured stdout.
    fn run_checked(&self, args: &[String]) -> SpressResult<String> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.command_error(args, stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn render_command(&self, args: &[String]) -> String {
        let mut parts = vec![self.binary.display().to_string()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    fn command_error(&self, args: &[String], reason: String) -> spress_core::error::SpressError {
        ApplicationError::PackageManager {
            command: self.render_command(args),
            reason,
        }
        .into()
    }
}

impl PackageManager for ComposerPackageManager {
    #[instrument(skip(self))]
    fn exist_package(&self, name: &str) -> SpressResult<bool> {
        // A failing `show --available` means the package is unknown to every
        // registered repository; that is an answer, not an error.
        let output = self.run(&show_args(name, false))?;
        Ok(output.status.success())
    }

    #[instrument(skip(self))]
    fn is_theme_package(&self, name: &str) -> SpressResult<bool> {
        let args = show_args(name, true);
        let stdout = self.run_checked(&args)?;
        let info: PackageInfo = serde_json::from_str(&stdout)
            .map_err(|e| self.command_error(&args, format!("unparsable package info: {e}")))?;
        Ok(info.package_type.as_deref() == Some(THEME_PACKAGE_TYPE))
    }

    fn package(&self, name: &str) -> SpressResult<ThemePackage> {
        Ok(ThemePackage {
            name: name.to_string(),
            location: self.project_dir.join("vendor").join(name),
            is_theme: self.is_theme_package(name)?,
        })
    }

    #[instrument(skip(self, options))]
    fn install(&self, options: &InstallOptions, packages: &[String]) -> SpressResult<()> {
        self.run_checked(&install_args(options, packages))?;
        Ok(())
    }

    #[instrument(skip(self, options))]
    fn update(&self, options: &InstallOptions, packages: &[String]) -> SpressResult<()> {
        self.run_checked(&update_args(options, packages))?;
        Ok(())
    }
}

// ── Command-line builders ─────────────────────────────────────────────────────
//
// Pure functions so flag mapping is testable without a composer binary.

fn option_flags(options: &InstallOptions) -> Vec<String> {
    let mut flags = Vec::new();
    if options.dry_run {
        flags.push("--dry-run".to_string());
    }
    if options.prefer_source {
        flags.push("--prefer-source".to_string());
    }
    if options.no_dev {
        flags.push("--no-dev".to_string());
    }
    if options.no_scripts {
        flags.push("--no-scripts".to_string());
    }
    flags
}

/// With explicit packages, `require` adds and installs them; without,
/// `install` reproduces the locked set.
fn install_args(options: &InstallOptions, packages: &[String]) -> Vec<String> {
    let mut args = if packages.is_empty() {
        vec!["install".to_string()]
    } else {
        vec!["require".to_string()]
    };
    args.extend(option_flags(options));
    args.extend(packages.iter().cloned());
    args
}

fn update_args(options: &InstallOptions, packages: &[String]) -> Vec<String> {
    let mut args = vec!["update".to_string()];
    args.extend(option_flags(options));
    args.extend(packages.iter().cloned());
    args
}

fn show_args(name: &str, json: bool) -> Vec<String> {
    let mut args = vec!["show".to_string(), "--available".to_string()];
    if json {
        args.push("--format=json".to_string());
    }
    args.push(name.to_string());
    args
}
