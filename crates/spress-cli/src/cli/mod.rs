//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and defaults.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "spress",
    bin_name = "spress",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Spress site scaffolding",
    long_about = "Spress scaffolds new static-site projects and keeps their \
                  themes and plugins up to date.",
    after_help = "EXAMPLES:\n\
        \x20 spress new:site ./my-site\n\
        \x20 spress new:site ./my-blog spresso\n\
        \x20 spress new:site ./my-blog vendor/theme:2.1.* --force\n\
        \x20 spress update:plugin --prefer-lock",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new site.
    #[command(
        name = "new:site",
        visible_alias = "new",
        about = "Create a new site",
        after_help = "EXAMPLES:\n\
            \x20 spress new:site\n\
            \x20 spress new:site ./my-site\n\
            \x20 spress new:site ./my-blog spresso\n\
            \x20 spress new:site ./my-blog vendor/theme:2.1.*-dev --force"
    )]
    NewSite(NewSiteArgs),

    /// Update plugins and themes.
    #[command(
        name = "update:plugin",
        visible_alias = "update",
        about = "Update plugins and themes to the latest version",
        after_help = "EXAMPLES:\n\
            \x20 spress update:plugin\n\
            \x20 spress update:plugin vendor/plugin-a vendor/plugin-b\n\
            \x20 spress update:plugin --prefer-lock --no-scripts"
    )]
    UpdatePlugin(UpdatePluginArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 spress completions bash > ~/.local/share/bash-completion/completions/spress\n\
            \x20 spress completions zsh  > ~/.zfunc/_spress\n\
            \x20 spress completions fish > ~/.config/fish/completions/spress.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new:site ──────────────────────────────────────────────────────────────────

/// Arguments for `spress new:site`.
#[derive(Debug, Args)]
pub struct NewSiteArgs {
    /// Path of the new site.
    #[arg(value_name = "PATH", default_value = "./", help = "Path of the new site")]
    pub path: PathBuf,

    /// Theme to generate with: the built-in `blank`, the `spresso` shorthand,
    /// or any `vendor/name[:version-constraint]` package.
    #[arg(
        value_name = "TEMPLATE",
        default_value = "blank",
        help = "Theme package name"
    )]
    pub template: String,

    /// Overwrite a previously generated site at the destination.
    #[arg(long = "force", help = "Force creation even if path already exists")]
    pub force: bool,

    /// Complete scaffold.
    #[arg(long = "all", help = "Complete scaffold")]
    pub all: bool,
}

// ── update:plugin ─────────────────────────────────────────────────────────────

/// Arguments for `spress update:plugin`.
#[derive(Debug, Args)]
pub struct UpdatePluginArgs {
    /// Packages that should be updated; if not provided all packages are.
    #[arg(value_name = "PACKAGES", help = "Packages to update (all when omitted)")]
    pub packages: Vec<String>,

    /// Forces installation from package sources when possible, including VCS
    /// information.
    #[arg(long = "prefer-source", help = "Install from sources when possible")]
    pub prefer_source: bool,

    /// Outputs the operations but will not execute anything.
    #[arg(long = "dry-run", help = "Show operations without executing them")]
    pub dry_run: bool,

    /// Enables installation of require-dev packages.
    #[arg(long = "dev", help = "Install development dependencies too")]
    pub dev: bool,

    /// Skips the execution of all scripts defined in the manifest.
    #[arg(long = "no-scripts", help = "Skip post-install script execution")]
    pub no_scripts: bool,

    /// If the site has a lock file, reinstall the exact versions declared in
    /// it instead of resolving anew.
    #[arg(long = "prefer-lock", help = "Use exact versions from the lock file")]
    pub prefer_lock: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `spress completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
