//! Implementation of the `spress update:plugin` command.
//!
//! Derives package-manager options from CLI flags and dispatches to either
//! `install` (exact locked versions) or `update` (latest satisfying
//! versions). The package manager does the actual work.

use tracing::instrument;

use spress_adapters::ComposerPackageManager;
use spress_core::application::ports::{InstallOptions, PackageManager};

use crate::{
    cli::UpdatePluginArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `spress update:plugin` command.
#[instrument(skip_all, fields(packages = args.packages.len()))]
pub fn execute(args: UpdatePluginArgs, output: OutputManager) -> CliResult<()> {
    output.info("Updating plugins and themes...")?;

    let options = derive_options(&args);
    let packages = ComposerPackageManager::new("./");

    if args.prefer_lock {
        packages.install(&options, &args.packages)
    } else {
        packages.update(&options, &args.packages)
    }
    .map_err(CliError::Core)?;

    output.success("Plugins and themes updated")?;
    Ok(())
}

/// Map CLI flags onto [`InstallOptions`].
///
/// Development dependencies are excluded unless `--dev` is passed.
fn derive_options(args: &UpdatePluginArgs) -> InstallOptions {
    InstallOptions {
        dry_run: args.dry_run,
        prefer_source: args.prefer_source,
        no_dev: !args.dev,
        no_scripts: args.no_scripts,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
