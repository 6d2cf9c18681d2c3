//! Implementation of the `spress new:site` command.
//!
//! Responsibility: translate CLI arguments into a generator invocation and
//! display results. No scaffolding logic lives here.

use tracing::{debug, info, instrument};

use spress_adapters::{BlankSkeleton, ComposerPackageManager, DirectorySkeleton, LocalFilesystem};
use spress_core::application::{SiteGenerator, ports::SkeletonSource};

use crate::{
    cli::NewSiteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Shorthand accepted in place of the full spresso theme package name.
const SPRESSO_THEME: &str = "spresso";

/// Package behind the [`SPRESSO_THEME`] shorthand.
const SPRESSO_PACKAGE: &str = "spress/spress-theme-spresso";

/// Execute the `spress new:site` command.
#[instrument(skip_all, fields(path = %args.path.display(), template = %args.template))]
pub fn execute(args: NewSiteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template = resolve_alias(&args.template);

    output.info(&format!(
        "Generating a site using the theme: \"{template}\"..."
    ))?;
    debug!(all = args.all, "scaffold requested");

    let mut skeletons: Vec<Box<dyn SkeletonSource>> = vec![Box::new(BlankSkeleton::new())];
    for dir in &config.skeletons.dirs {
        skeletons.push(Box::new(DirectorySkeleton::new(dir)));
    }

    let generator = SiteGenerator::new(skeletons, Box::new(LocalFilesystem::new()))
        .with_package_manager(Box::new(ComposerPackageManager::new(&args.path)))
        .with_site_title(config.site.title.clone());

    generator
        .generate(&args.path, &template, args.force)
        .map_err(CliError::Core)?;

    info!(template, "site generated");
    output.success(&format!(
        "New site with theme \"{}\" created at \"{}\" folder",
        template,
        args.path.display()
    ))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.path.display()))?;
    output.print("  spress update:plugin   # keep themes and plugins fresh")?;

    Ok(())
}

/// Expand the `spresso` shorthand; everything else passes through untouched.
fn resolve_alias(template: &str) -> String {
    if template == SPRESSO_THEME {
        SPRESSO_PACKAGE.to_string()
    } else {
        template.to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
