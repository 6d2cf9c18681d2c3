//! The dependency manifest written alongside every generated site.
//!
//! The manifest declares the installed theme as a dependency so a later
//! `update:plugin` run can refresh it through the package manager. It always
//! requires the Spress installer plugin, which teaches the package manager
//! where theme packages are placed.

use std::collections::BTreeMap;

use serde::Serialize;

/// Installer plugin required by every generated site.
pub const INSTALLER_PACKAGE: &str = "spress/spress-installer";

/// Version constraint for [`INSTALLER_PACKAGE`].
pub const INSTALLER_CONSTRAINT: &str = ">=2.1";

/// Builder for the `composer.json` manifest of a generated site.
///
/// Requirements are kept in a sorted map so repeated generations of the same
/// request serialize byte-identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteManifest {
    require: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct ManifestDocument<'a> {
    require: &'a BTreeMap<String, String>,
    #[serde(rename = "prefer-stable")]
    prefer_stable: bool,
}

impl SiteManifest {
    /// A manifest with only the installer requirement.
    pub fn new() -> Self {
        let mut require = BTreeMap::new();
        require.insert(
            INSTALLER_PACKAGE.to_string(),
            INSTALLER_CONSTRAINT.to_string(),
        );
        Self { require }
    }

    /// Declare the resolved theme as a dependency. Without an explicit
    /// constraint any version is accepted.
    pub fn with_theme(mut self, name: &str, constraint: Option<&str>) -> Self {
        self.require
            .insert(name.to_string(), constraint.unwrap_or("*").to_string());
        self
    }

    /// Constraint recorded for a required package, if any.
    pub fn requirement(&self, package: &str) -> Option<&str> {
        self.require.get(package).map(String::as_str)
    }

    /// Serialize to the on-disk `composer.json` representation.
    pub fn to_json(&self) -> String {
        let document = ManifestDocument {
            require: &self.require,
            prefer_stable: true,
        };
        // A string map cannot fail to serialize.
        let mut json =
            serde_json::to_string_pretty(&document).expect("manifest serializes to JSON");
        json.push('\n');
        json
    }
}
