//! Release version selection.
//!
//! Picks the version of the next release from the last released version
//! and a [`ReleaseType`], and finds the last released version in a list of
//! tag names.

use crate::calculator::VersionCalculator;
use crate::error::{Error, Result};
use crate::scheme::VersioningScheme;
use crate::version::Version;
use chrono::NaiveDate;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Kind of the release to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseType {
    /// Bugfix release, `1.2.3` to `1.2.4`.
    Patch,
    /// Feature release, `1.2.3` to `1.3.0`.
    Minor,
    /// Breaking release, `1.2.3` to `2.0.0`.
    Major,
    /// Calendar release `<year>.<month>.<patch>`.
    Calendar,
    /// Next alpha pre-release.
    Alpha,
    /// Next beta pre-release.
    Beta,
    /// Next release candidate.
    ReleaseCandidate,
    /// An explicitly given version.
    Version,
}

/// All release types.
pub const RELEASE_TYPES: &[ReleaseType] = &[
    ReleaseType::Patch,
    ReleaseType::Minor,
    ReleaseType::Major,
    ReleaseType::Calendar,
    ReleaseType::Alpha,
    ReleaseType::Beta,
    ReleaseType::ReleaseCandidate,
    ReleaseType::Version,
];

impl ReleaseType {
    /// Name used on the command line and in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Calendar => "calendar",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::ReleaseCandidate => "release-candidate",
            Self::Version => "version",
        }
    }

    /// Whether pre-release tags count as the last release for this type.
    ///
    /// A final release collects all changes since the last final release,
    /// a pre-release only those since the last pre-release.
    #[must_use]
    pub const fn includes_pre_releases(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta | Self::ReleaseCandidate)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RELEASE_TYPES
            .iter()
            .copied()
            .find(|release_type| release_type.as_str() == s)
            .ok_or_else(|| Error::UnknownReleaseType {
                name: s.to_string(),
                expected: RELEASE_TYPES
                    .iter()
                    .map(|release_type| release_type.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Get the version of the next release.
///
/// `explicit_version` is required for [`ReleaseType::Version`] and rejected
/// for every other release type, which is calculated from `last_release`.
///
/// # Errors
///
/// - [`Error::MissingReleaseVersion`] if the release type is `version` but no
///   version was given
/// - [`Error::UnexpectedReleaseVersion`] if a version was given for another
///   release type
/// - [`Error::NoLastReleaseVersion`] if there is no release to calculate from
/// - any error of the calculator
pub fn next_release_version(
    calculator: &dyn VersionCalculator,
    last_release: Option<&Version>,
    release_type: ReleaseType,
    explicit_version: Option<&Version>,
    today: NaiveDate,
) -> Result<Version> {
    if explicit_version.is_some() && release_type != ReleaseType::Version {
        return Err(Error::UnexpectedReleaseVersion {
            release_type: release_type.to_string(),
        });
    }

    let last = || last_release.ok_or(Error::NoLastReleaseVersion);
    let next = match release_type {
        ReleaseType::Version => {
            return explicit_version
                .cloned()
                .ok_or(Error::MissingReleaseVersion);
        }
        ReleaseType::Patch => calculator.next_patch_version(last()?),
        ReleaseType::Minor => calculator.next_minor_version(last()?),
        ReleaseType::Major => calculator.next_major_version(last()?),
        ReleaseType::Calendar => calculator.next_calendar_version(last()?, today),
        ReleaseType::Alpha => calculator.next_alpha_version(last()?),
        ReleaseType::Beta => calculator.next_beta_version(last()?),
        ReleaseType::ReleaseCandidate => calculator.next_release_candidate_version(last()?),
    }?;

    debug!(
        %release_type,
        next = %next,
        "Selected next release version"
    );
    Ok(next)
}

/// Options for finding the last release in a list of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastReleaseOptions {
    /// Prefix of release tags, e.g. `v`.
    pub tag_prefix: String,
    /// Only consider tags of this release series, e.g. `1.2` or `23`.
    pub release_series: Option<String>,
    /// Skip pre-releases and development releases.
    pub ignore_pre_releases: bool,
}

impl LastReleaseOptions {
    /// Create options for tags starting with `tag_prefix`.
    #[must_use]
    pub fn new(tag_prefix: impl Into<String>) -> Self {
        Self {
            tag_prefix: tag_prefix.into(),
            ..Self::default()
        }
    }

    /// Restrict the lookup to a release series.
    #[must_use]
    pub fn with_release_series(mut self, release_series: impl Into<String>) -> Self {
        self.release_series = Some(release_series.into());
        self
    }

    /// Skip pre-releases and development releases.
    #[must_use]
    pub const fn with_ignore_pre_releases(mut self, ignore: bool) -> Self {
        self.ignore_pre_releases = ignore;
        self
    }

    /// Decide whether pre-releases are skipped for the given release type.
    ///
    /// Pre-releases are kept for pre-release types and whenever a release
    /// series is set, as a series may contain pre-releases only.
    #[must_use]
    pub fn for_release_type(mut self, release_type: ReleaseType) -> Self {
        self.ignore_pre_releases =
            !release_type.includes_pre_releases() && self.release_series.is_none();
        self
    }

    fn series_pattern(&self) -> Result<Option<Pattern>> {
        let Some(series) = &self.release_series else {
            return Ok(None);
        };
        let pattern = format!("{}{series}.*", Pattern::escape(&self.tag_prefix));
        Pattern::new(&pattern)
            .map(Some)
            .map_err(|err| Error::InvalidReleaseSeries {
                series: series.clone(),
                message: err.to_string(),
            })
    }
}

/// Get all released versions found in `tags`, newest first.
///
/// Tags that do not parse in `scheme` are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidReleaseSeries`] if the release series can not be
/// turned into a tag pattern.
pub fn last_release_versions<I, S>(
    tags: I,
    scheme: VersioningScheme,
    options: &LastReleaseOptions,
) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern = options.series_pattern()?;
    let mut versions = Vec::new();

    for tag in tags {
        let tag = tag.as_ref();
        if pattern.as_ref().is_some_and(|pattern| !pattern.matches(tag)) {
            continue;
        }

        let Some(text) = tag.strip_prefix(options.tag_prefix.as_str()) else {
            debug!(tag, prefix = %options.tag_prefix, "Ignoring tag without release prefix");
            continue;
        };
        let version = match scheme.parse_version(text) {
            Ok(version) => version,
            Err(err) => {
                debug!(tag, error = %err, "Ignoring tag without a valid version");
                continue;
            }
        };

        if options.ignore_pre_releases && (version.is_pre_release() || version.is_dev_release()) {
            debug!(tag, "Ignoring pre-release tag");
            continue;
        }

        versions.push(version);
    }

    versions.sort_by(newest_first);
    Ok(versions)
}

/// Get the last released version found in `tags`.
///
/// # Errors
///
/// See [`last_release_versions`].
pub fn last_release_version<I, S>(
    tags: I,
    scheme: VersioningScheme,
    options: &LastReleaseOptions,
) -> Result<Option<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(last_release_versions(tags, scheme, options)?.into_iter().next())
}

// SemVer versions differing only in build metadata are not ordered; fall back
// to their text to keep the sort total.
fn newest_first(a: &Version, b: &Version) -> Ordering {
    b.partial_cmp(a)
        .unwrap_or_else(|| b.to_string().cmp(&a.to_string()))
}
