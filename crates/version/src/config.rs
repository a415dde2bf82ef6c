//! Versioning configuration.
//!
//! Read from the `[versioning]` table of a TOML file:
//!
//! ```toml
//! [versioning]
//! scheme = "semver"
//! tagPrefix = "v"
//! releaseSeries = "2.1"
//! ignorePreReleases = true
//! ```

use crate::error::Result;
use crate::release::LastReleaseOptions;
use crate::scheme::VersioningScheme;
use crate::version::Version;
use serde::{Deserialize, Serialize};

/// Versioning settings of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Versioning scheme of the project.
    pub scheme: VersioningScheme,
    /// Prefix of release tags (default: `v`).
    #[serde(rename = "tagPrefix")]
    pub tag_prefix: String,
    /// Release series to look up the last release in.
    #[serde(rename = "releaseSeries", skip_serializing_if = "Option::is_none")]
    pub release_series: Option<String>,
    /// Skip pre-releases when looking up the last release.
    #[serde(rename = "ignorePreReleases")]
    pub ignore_pre_releases: bool,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            scheme: VersioningScheme::Pep440,
            tag_prefix: "v".to_string(),
            release_series: None,
            ignore_pre_releases: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    versioning: VersioningConfig,
}

impl VersioningConfig {
    /// Parse the `[versioning]` table of a TOML document.
    ///
    /// A document without the table yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is
    /// not valid TOML or the table has invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.versioning)
    }

    /// Format the release tag of a version.
    #[must_use]
    pub fn format_tag(&self, version: &Version) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    /// Options for finding the last release with this configuration.
    #[must_use]
    pub fn lookup_options(&self) -> LastReleaseOptions {
        let options = LastReleaseOptions::new(self.tag_prefix.clone())
            .with_ignore_pre_releases(self.ignore_pre_releases);
        match &self.release_series {
            Some(series) => options.with_release_series(series.clone()),
            None => options,
        }
    }
}
