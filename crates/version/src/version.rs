//! Scheme independent version values.
//!
//! A [`Version`] is always produced by a [`VersioningScheme`]: either by
//! parsing a string or by converting a version of another scheme. It is
//! never mutated afterwards; every calculation returns a new value.
//!
//! Both schemes agree on a few conventions:
//! - `-dev` and `.dev` suffixes mark development versions, `+dev` does not
//! - a development version can also be a pre-release (`1.2.3-alpha1-dev1`)
//! - pre-release names are reported as `alpha`, `beta` and `rc`

use crate::scheme::VersioningScheme;
use crate::schemes::pep440::Pep440Version;
use crate::schemes::semantic::SemanticVersion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Name of an alpha pre-release.
pub const ALPHA: &str = "alpha";
/// Name of a beta pre-release.
pub const BETA: &str = "beta";
/// Name of a release candidate.
pub const RELEASE_CANDIDATE: &str = "rc";

/// The pre-release segment of a version, e.g. `alpha1` or `rc2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PreRelease {
    /// Pre-release name (`alpha`, `beta`, `rc` or any other SemVer identifier).
    pub name: String,
    /// Pre-release counter.
    pub number: u64,
}

impl PreRelease {
    /// Create a new pre-release segment.
    #[must_use]
    pub fn new(name: impl Into<String>, number: u64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// Check if this segment is named `name`.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.number)
    }
}

/// A `<name><number>` local (PEP 440) or build (SemVer) segment, e.g. `dev1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalSegment {
    /// Segment name.
    pub name: String,
    /// Segment number.
    pub number: u64,
}

impl LocalSegment {
    /// Create a new local segment.
    #[must_use]
    pub fn new(name: impl Into<String>, number: u64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.number)
    }
}

/// A parsed version of one of the supported versioning schemes.
#[derive(Debug, Clone)]
pub enum Version {
    /// A PEP 440 version.
    Pep440(Pep440Version),
    /// A Semantic Versioning 2.0 version.
    Semantic(SemanticVersion),
}

impl Version {
    /// The versioning scheme this version was created with.
    #[must_use]
    pub const fn scheme(&self) -> VersioningScheme {
        match self {
            Self::Pep440(_) => VersioningScheme::Pep440,
            Self::Semantic(_) => VersioningScheme::Semantic,
        }
    }

    /// Original version string from which the version has been parsed.
    #[must_use]
    pub fn parsed_version(&self) -> &str {
        match self {
            Self::Pep440(v) => v.parsed_version(),
            Self::Semantic(v) => v.parsed_version(),
        }
    }

    /// The first item of the version or `0` if unavailable.
    #[must_use]
    pub fn major(&self) -> u64 {
        match self {
            Self::Pep440(v) => v.major(),
            Self::Semantic(v) => v.major(),
        }
    }

    /// The second item of the version or `0` if unavailable.
    #[must_use]
    pub fn minor(&self) -> u64 {
        match self {
            Self::Pep440(v) => v.minor(),
            Self::Semantic(v) => v.minor(),
        }
    }

    /// The third item of the version or `0` if unavailable.
    #[must_use]
    pub fn patch(&self) -> u64 {
        match self {
            Self::Pep440(v) => v.patch(),
            Self::Semantic(v) => v.patch(),
        }
    }

    /// The pre-release segment of the version.
    #[must_use]
    pub fn pre(&self) -> Option<&PreRelease> {
        match self {
            Self::Pep440(v) => v.pre(),
            Self::Semantic(v) => v.pre(),
        }
    }

    /// The development number of the version.
    #[must_use]
    pub fn dev(&self) -> Option<u64> {
        match self {
            Self::Pep440(v) => v.dev(),
            Self::Semantic(v) => v.dev(),
        }
    }

    /// The local (build) segment of the version.
    #[must_use]
    pub fn local(&self) -> Option<&LocalSegment> {
        match self {
            Self::Pep440(v) => v.local(),
            Self::Semantic(v) => v.local(),
        }
    }

    /// Whether this version is a pre-release.
    ///
    /// PEP 440 counts development releases as pre-releases, SemVer only
    /// counts versions with a non `dev` pre-release identifier.
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        match self {
            Self::Pep440(v) => v.is_pre_release(),
            Self::Semantic(v) => v.is_pre_release(),
        }
    }

    /// Whether this version is a development release.
    #[must_use]
    pub fn is_dev_release(&self) -> bool {
        self.dev().is_some()
    }

    /// Whether this version is an alpha release.
    #[must_use]
    pub fn is_alpha_release(&self) -> bool {
        self.pre().is_some_and(|pre| pre.is(ALPHA))
    }

    /// Whether this version is a beta release.
    #[must_use]
    pub fn is_beta_release(&self) -> bool {
        self.pre().is_some_and(|pre| pre.is(BETA))
    }

    /// Whether this version is a release candidate.
    #[must_use]
    pub fn is_release_candidate(&self) -> bool {
        self.pre().is_some_and(|pre| pre.is(RELEASE_CANDIDATE))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pep440(v) => v.fmt(f),
            Self::Semantic(v) => v.fmt(f),
        }
    }
}

// The right hand side is converted into the scheme of the left hand side, so
// equality across schemes is not symmetric and `Version` is not `Eq`.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Pep440(a), Self::Pep440(b)) => a == b,
            (Self::Semantic(a), Self::Semantic(b)) => a == b,
            (Self::Pep440(a), other) => *a == Pep440Version::from_version(other),
            (Self::Semantic(a), other) => *a == SemanticVersion::from_version(other),
        }
    }
}

/// Versions never equal plain strings. Callers use the `"current"` sentinel
/// to skip version checks.
impl PartialEq<str> for Version {
    fn eq(&self, _other: &str) -> bool {
        false
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, _other: &&str) -> bool {
        false
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Pep440(a), Self::Pep440(b)) => a.partial_cmp(b),
            (Self::Semantic(a), Self::Semantic(b)) => a.partial_cmp(b),
            (Self::Pep440(a), other) => a.partial_cmp(&Pep440Version::from_version(other)),
            (Self::Semantic(a), other) => a.partial_cmp(&SemanticVersion::from_version(other)),
        }
    }
}

// Only the release triple is hashed, equal versions of different schemes
// must collide.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major().hash(state);
        self.minor().hash(state);
        self.patch().hash(state);
    }
}

/// A version update from a previous version to a new version.
///
/// If previous and new are equal the version was not updated and
/// `changed_files` should be empty. `previous` is `None` for an initial
/// release.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionUpdate {
    /// Version before the update.
    pub previous: Option<Version>,
    /// Version after the update.
    pub new: Version,
    /// Files rewritten by the update.
    pub changed_files: Vec<PathBuf>,
}

impl VersionUpdate {
    /// Create an update without changed files.
    #[must_use]
    pub const fn new(previous: Option<Version>, new: Version) -> Self {
        Self {
            previous,
            new,
            changed_files: Vec::new(),
        }
    }

    /// Record the files rewritten by the update.
    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<PathBuf>) -> Self {
        self.changed_files = files;
        self
    }

    /// Whether the version actually changed.
    #[must_use]
    pub fn is_update(&self) -> bool {
        self.previous.as_ref() != Some(&self.new)
    }
}
