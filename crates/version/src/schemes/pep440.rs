//! PEP 440 versions and their calculator.
//!
//! Parsing, normalization and ordering are delegated to [`pep440_rs`].
//! This module maps the parsed segments onto the scheme independent
//! accessors of [`Version`] and renders the next versions in PEP 440
//! canonical spelling (`1.2.3a1`, `1.2.3rc2.dev1`).

use crate::calculator::{VersionCalculator, increment};
use crate::error::{Error, Result};
use crate::scheme::VersioningScheme;
use crate::version::{ALPHA, BETA, LocalSegment, PreRelease, RELEASE_CANDIDATE, Version};
use pep440_rs::PrereleaseKind;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

#[allow(clippy::expect_used)]
static LOCAL_RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[a-zA-Z]+)(?P<number>0|[1-9][0-9]*)$")
        .expect("Invalid local release regex")
});

/// A version following [PEP 440](https://peps.python.org/pep-0440/).
#[derive(Debug, Clone)]
pub struct Pep440Version {
    version: pep440_rs::Version,
    parsed_version: String,
    pre: Option<PreRelease>,
    local: Option<LocalSegment>,
}

impl Pep440Version {
    /// Parse a PEP 440 version string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersion`] if the text is not a valid PEP 440
    /// version.
    pub fn from_string(version: &str) -> Result<Self> {
        let parsed = pep440_rs::Version::from_str(version)
            .map_err(|_| Error::invalid_version(format!("Invalid version: '{version}'")))?;
        Ok(Self::from_parsed(parsed, version.to_string()))
    }

    /// Convert a version of any scheme into a PEP 440 version.
    ///
    /// The original version string is tried first. If it is not valid PEP
    /// 440 the version is rebuilt from its segments, keeping the original
    /// string as [`parsed_version`](Self::parsed_version). Segments that
    /// cannot be expressed in PEP 440 are dropped down to the release.
    #[must_use]
    pub fn from_version(version: &Version) -> Self {
        if let Version::Pep440(version) = version {
            return version.clone();
        }

        if let Ok(converted) = Self::from_string(version.parsed_version()) {
            return converted;
        }

        let release = format!("{}.{}.{}", version.major(), version.minor(), version.patch());
        let local = version
            .local()
            .map(|local| format!("+{local}"))
            .unwrap_or_default();
        let candidate = match (version.pre(), version.dev()) {
            (None, Some(dev)) => format!("{release}.dev{dev}{local}"),
            (Some(pre), Some(dev)) => format!("{release}-{pre}.dev{dev}"),
            (Some(pre), None) => format!("{release}-{pre}{local}"),
            (None, None) => format!("{release}{local}"),
        };

        let mut converted = Self::from_string(&candidate).unwrap_or_else(|_| {
            debug!(
                version = %version,
                candidate = %candidate,
                "Version can not be expressed in PEP 440, keeping the release only"
            );
            Self::from_release(version.major(), version.minor(), version.patch())
        });
        converted.parsed_version = version.parsed_version().to_string();
        converted
    }

    fn from_release(major: u64, minor: u64, patch: u64) -> Self {
        let version = pep440_rs::Version::new([major, minor, patch]);
        let parsed_version = version.to_string();
        Self::from_parsed(version, parsed_version)
    }

    fn from_parsed(version: pep440_rs::Version, parsed_version: String) -> Self {
        let pre = version.pre().map(|pre| {
            let name = match pre.kind {
                PrereleaseKind::Alpha => ALPHA,
                PrereleaseKind::Beta => BETA,
                PrereleaseKind::Rc => RELEASE_CANDIDATE,
            };
            PreRelease::new(name, pre.number)
        });

        // The local segment is only reported in its `<name><number>` shape.
        let rendered = version.to_string();
        let local = rendered.split_once('+').and_then(|(_, local)| {
            let captures = LOCAL_RELEASE_REGEX.captures(local)?;
            let number = captures["number"].parse().ok()?;
            Some(LocalSegment::new(&captures["name"], number))
        });

        Self {
            version,
            parsed_version,
            pre,
            local,
        }
    }

    /// Original version string from which the version has been parsed.
    #[must_use]
    pub fn parsed_version(&self) -> &str {
        &self.parsed_version
    }

    /// The underlying [`pep440_rs::Version`].
    #[must_use]
    pub const fn inner(&self) -> &pep440_rs::Version {
        &self.version
    }

    fn release_part(&self, index: usize) -> u64 {
        self.version.release().get(index).copied().unwrap_or(0)
    }

    /// The first item of the release or `0` if unavailable.
    #[must_use]
    pub fn major(&self) -> u64 {
        self.release_part(0)
    }

    /// The second item of the release or `0` if unavailable.
    #[must_use]
    pub fn minor(&self) -> u64 {
        self.release_part(1)
    }

    /// The third item of the release or `0` if unavailable.
    #[must_use]
    pub fn patch(&self) -> u64 {
        self.release_part(2)
    }

    /// The pre-release segment with `a`/`b`/`c` spelled `alpha`/`beta`/`rc`.
    #[must_use]
    pub const fn pre(&self) -> Option<&PreRelease> {
        self.pre.as_ref()
    }

    /// The development number.
    #[must_use]
    pub fn dev(&self) -> Option<u64> {
        self.version.dev()
    }

    /// The local version segment if it has the `<name><number>` shape.
    #[must_use]
    pub const fn local(&self) -> Option<&LocalSegment> {
        self.local.as_ref()
    }

    /// Whether this version is an alpha, beta, release candidate or
    /// development release.
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some() || self.dev().is_some()
    }
}

impl FromStr for Pep440Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for Pep440Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

impl PartialEq for Pep440Version {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for Pep440Version {}

impl PartialOrd for Pep440Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pep440Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl Hash for Pep440Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl From<Pep440Version> for Version {
    fn from(version: Pep440Version) -> Self {
        Self::Pep440(version)
    }
}

/// Calculates next versions in PEP 440 spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pep440VersionCalculator;

impl VersionCalculator for Pep440VersionCalculator {
    fn scheme(&self) -> VersioningScheme {
        VersioningScheme::Pep440
    }

    fn next_dev_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = match (current.dev(), current.pre()) {
            (Some(dev), Some(pre)) => {
                format!("{major}.{minor}.{patch}-{pre}.dev{}", increment(dev, current)?)
            }
            (Some(dev), None) => format!("{major}.{minor}.{patch}.dev{}", increment(dev, current)?),
            (None, Some(pre)) => {
                let number = increment(pre.number, current)?;
                format!("{major}.{minor}.{patch}{}{number}.dev1", pre.name)
            }
            (None, None) => format!("{major}.{minor}.{}.dev1", increment(patch, current)?),
        };
        debug!(current = %current, next = %next, "Calculated next dev version");
        self.version_from_string(&next)
    }

    fn next_alpha_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = if current.is_dev_release() {
            match current.pre() {
                Some(pre) if pre.is(ALPHA) => format!("{major}.{minor}.{patch}a{}", pre.number),
                Some(_) => format!("{major}.{minor}.{}a1", increment(patch, current)?),
                None => format!("{major}.{minor}.{patch}a1"),
            }
        } else {
            match current.pre() {
                Some(pre) if pre.is(ALPHA) => {
                    format!("{major}.{minor}.{patch}a{}", increment(pre.number, current)?)
                }
                _ => format!("{major}.{minor}.{}a1", increment(patch, current)?),
            }
        };
        debug!(current = %current, next = %next, "Calculated next alpha version");
        self.version_from_string(&next)
    }

    fn next_beta_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let pre = current.pre();
        let next = match pre {
            Some(pre) if current.is_dev_release() && pre.is(BETA) => {
                format!("{major}.{minor}.{patch}b{}", pre.number)
            }
            Some(pre) if current.is_dev_release() && pre.is(RELEASE_CANDIDATE) => {
                format!("{major}.{minor}.{}b1", increment(patch, current)?)
            }
            _ if current.is_dev_release() || current.is_alpha_release() => {
                format!("{major}.{minor}.{patch}b1")
            }
            Some(pre) if pre.is(BETA) => {
                format!("{major}.{minor}.{patch}b{}", increment(pre.number, current)?)
            }
            _ => format!("{major}.{minor}.{}b1", increment(patch, current)?),
        };
        debug!(current = %current, next = %next, "Calculated next beta version");
        self.version_from_string(&next)
    }

    fn next_release_candidate_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = if current.is_dev_release() {
            match current.pre() {
                Some(pre) if pre.is(RELEASE_CANDIDATE) => {
                    format!("{major}.{minor}.{patch}rc{}", pre.number)
                }
                _ => format!("{major}.{minor}.{patch}rc1"),
            }
        } else if current.is_alpha_release() || current.is_beta_release() {
            format!("{major}.{minor}.{patch}rc1")
        } else if let Some(pre) = current.pre().filter(|pre| pre.is(RELEASE_CANDIDATE)) {
            format!("{major}.{minor}.{patch}rc{}", increment(pre.number, current)?)
        } else {
            format!("{major}.{minor}.{}rc1", increment(patch, current)?)
        };
        debug!(current = %current, next = %next, "Calculated next release candidate version");
        self.version_from_string(&next)
    }
}
