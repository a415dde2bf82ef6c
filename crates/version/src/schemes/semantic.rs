//! Semantic Versioning 2.0 versions and their calculator.
//!
//! The grammar is parsed by the [`semver`] crate. On top of it the
//! pre-release identifier must look like `<name><number>`, optionally
//! followed by `-dev<number>`:
//!
//! | version             | pre        | dev |
//! |---------------------|------------|-----|
//! | `1.2.3-alpha1`      | `alpha1`   | -   |
//! | `1.2.3-dev2`        | -          | 2   |
//! | `1.2.3-rc1-dev3`    | `rc1`      | 3   |
//!
//! Build metadata (`+dev1`) never marks a development release.

use crate::calculator::{VersionCalculator, increment};
use crate::error::{Error, Result};
use crate::scheme::VersioningScheme;
use crate::version::{ALPHA, BETA, LocalSegment, PreRelease, RELEASE_CANDIDATE, Version};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

const DEV: &str = "dev";

#[allow(clippy::expect_used)]
static PRE_RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[a-zA-Z]+)(?P<number>0|[1-9][0-9]*)(?:-(?P<extra>[a-zA-Z]+)(?P<extra_number>0|[1-9][0-9]*))?$",
    )
    .expect("Invalid pre-release regex")
});

/// A [Semantic Versioning](https://semver.org/) version.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    version: semver::Version,
    parsed_version: String,
    pre: Option<PreRelease>,
    dev: Option<u64>,
    local: Option<LocalSegment>,
}

/// Position of a version within its release triple.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stage<'a> {
    Dev(u64),
    Pre(&'a PreRelease, PreStage),
    Final,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PreStage {
    Dev(u64),
    Release,
}

impl SemanticVersion {
    /// Parse a SemVer version string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersion`] if the text is not SemVer and
    /// [`Error::InvalidPrerelease`] if the pre-release identifier is not of
    /// the supported `<name><number>[-dev<number>]` shape.
    pub fn from_string(version: &str) -> Result<Self> {
        let parsed = semver::Version::parse(version)
            .map_err(|_| Error::invalid_version(format!("{version} is not valid SemVer string")))?;

        let (pre, dev) = split_pre_release(&parsed)?;
        let local = PRE_RELEASE_REGEX
            .captures(parsed.build.as_str())
            .and_then(|captures| {
                let number = captures["number"].parse().ok()?;
                Some(LocalSegment::new(&captures["name"], number))
            });

        Ok(Self {
            version: parsed,
            parsed_version: version.to_string(),
            pre,
            dev,
            local,
        })
    }

    /// Convert a version of any scheme into a SemVer version.
    ///
    /// The original version string is tried first. Otherwise the version is
    /// rebuilt from its segments (`1.2.3-rc1-dev1`) and keeps the original
    /// string as [`parsed_version`](Self::parsed_version). Segments that
    /// cannot be expressed in SemVer are dropped down to the release.
    #[must_use]
    pub fn from_version(version: &Version) -> Self {
        if let Version::Semantic(version) = version {
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
            (None, Some(dev)) => format!("{release}-dev{dev}{local}"),
            (Some(pre), Some(dev)) => format!("{release}-{pre}-dev{dev}"),
            (Some(pre), None) => format!("{release}-{pre}{local}"),
            (None, None) => format!("{release}{local}"),
        };

        let mut converted = Self::from_string(&candidate).unwrap_or_else(|_| {
            debug!(
                version = %version,
                candidate = %candidate,
                "Version can not be expressed in SemVer, keeping the release only"
            );
            Self::from_release(version.major(), version.minor(), version.patch())
        });
        converted.parsed_version = version.parsed_version().to_string();
        converted
    }

    fn from_release(major: u64, minor: u64, patch: u64) -> Self {
        let version = semver::Version::new(major, minor, patch);
        Self {
            parsed_version: version.to_string(),
            version,
            pre: None,
            dev: None,
            local: None,
        }
    }

    /// Original version string from which the version has been parsed.
    #[must_use]
    pub fn parsed_version(&self) -> &str {
        &self.parsed_version
    }

    /// The underlying [`semver::Version`].
    #[must_use]
    pub const fn inner(&self) -> &semver::Version {
        &self.version
    }

    /// The major version.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.version.major
    }

    /// The minor version.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.version.minor
    }

    /// The patch version.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.version.patch
    }

    /// The pre-release segment, `None` for `dev` pre-releases.
    #[must_use]
    pub const fn pre(&self) -> Option<&PreRelease> {
        self.pre.as_ref()
    }

    /// The development number.
    #[must_use]
    pub const fn dev(&self) -> Option<u64> {
        self.dev
    }

    /// The build metadata if it has the `<name><number>` shape.
    #[must_use]
    pub const fn local(&self) -> Option<&LocalSegment> {
        self.local.as_ref()
    }

    /// Whether this version is an alpha, beta, release candidate or other
    /// non `dev` pre-release.
    #[must_use]
    pub const fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }

    fn stage(&self) -> Stage<'_> {
        match (&self.pre, self.dev) {
            (Some(pre), Some(dev)) => Stage::Pre(pre, PreStage::Dev(dev)),
            (Some(pre), None) => Stage::Pre(pre, PreStage::Release),
            (None, Some(dev)) => Stage::Dev(dev),
            (None, None) => Stage::Final,
        }
    }
}

fn split_pre_release(version: &semver::Version) -> Result<(Option<PreRelease>, Option<u64>)> {
    let pre_release = version.pre.as_str();
    if pre_release.is_empty() {
        return Ok((None, None));
    }

    let invalid = || Error::invalid_prerelease(pre_release, version.to_string());
    let captures = PRE_RELEASE_REGEX.captures(pre_release).ok_or_else(invalid)?;
    let name = &captures["name"];
    let number = captures["number"].parse().map_err(|_| invalid())?;

    let (pre, mut dev) = if name == DEV {
        (None, Some(number))
    } else {
        (Some(PreRelease::new(name, number)), None)
    };

    if captures.name("extra").is_some_and(|extra| extra.as_str() == DEV) {
        if name == DEV {
            return Err(invalid());
        }
        dev = Some(captures["extra_number"].parse().map_err(|_| invalid())?);
    }

    Ok((pre, dev))
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

// Build metadata takes part in equality.
impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for SemanticVersion {}

/// Versions with the same precedence but different pre-release or build
/// text (`1.0.0` and `1.0.0+dev1`) are not comparable.
impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let precedence = (self.major(), self.minor(), self.patch(), self.stage());
        let other_precedence = (other.major(), other.minor(), other.patch(), other.stage());
        match precedence.cmp(&other_precedence) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl From<SemanticVersion> for Version {
    fn from(version: SemanticVersion) -> Self {
        Self::Semantic(version)
    }
}

/// Calculates next versions in SemVer spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticVersionCalculator;

impl VersionCalculator for SemanticVersionCalculator {
    fn scheme(&self) -> VersioningScheme {
        VersioningScheme::Semantic
    }

    fn next_dev_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = match (current.dev(), current.pre()) {
            (Some(dev), Some(pre)) => {
                format!("{major}.{minor}.{patch}-{pre}-dev{}", increment(dev, current)?)
            }
            (Some(dev), None) => format!("{major}.{minor}.{patch}-dev{}", increment(dev, current)?),
            (None, Some(pre)) => {
                let number = increment(pre.number, current)?;
                format!("{major}.{minor}.{patch}-{}{number}-dev1", pre.name)
            }
            (None, None) => format!("{major}.{minor}.{}-dev1", increment(patch, current)?),
        };
        debug!(current = %current, next = %next, "Calculated next dev version");
        self.version_from_string(&next)
    }

    fn next_alpha_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = if current.is_dev_release() {
            match current.pre() {
                Some(pre) if pre.is(ALPHA) => {
                    format!("{major}.{minor}.{patch}-alpha{}", pre.number)
                }
                Some(_) => format!("{major}.{minor}.{}-alpha1", increment(patch, current)?),
                None => format!("{major}.{minor}.{patch}-alpha1"),
            }
        } else {
            match current.pre() {
                Some(pre) if pre.is(ALPHA) => {
                    format!("{major}.{minor}.{patch}-alpha{}", increment(pre.number, current)?)
                }
                _ => format!("{major}.{minor}.{}-alpha1", increment(patch, current)?),
            }
        };
        debug!(current = %current, next = %next, "Calculated next alpha version");
        self.version_from_string(&next)
    }

    fn next_beta_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = match current.pre() {
            Some(pre) if current.is_dev_release() && pre.is(BETA) => {
                format!("{major}.{minor}.{patch}-beta{}", pre.number)
            }
            Some(pre) if current.is_dev_release() && pre.is(RELEASE_CANDIDATE) => {
                format!("{major}.{minor}.{}-beta1", increment(patch, current)?)
            }
            _ if current.is_dev_release() || current.is_alpha_release() => {
                format!("{major}.{minor}.{patch}-beta1")
            }
            Some(pre) if pre.is(BETA) => {
                format!("{major}.{minor}.{patch}-beta{}", increment(pre.number, current)?)
            }
            _ => format!("{major}.{minor}.{}-beta1", increment(patch, current)?),
        };
        debug!(current = %current, next = %next, "Calculated next beta version");
        self.version_from_string(&next)
    }

    fn next_release_candidate_version(&self, current: &Version) -> Result<Version> {
        let (major, minor, patch) = (current.major(), current.minor(), current.patch());
        let next = if current.is_dev_release() {
            match current.pre() {
                Some(pre) if pre.is(RELEASE_CANDIDATE) => {
                    format!("{major}.{minor}.{patch}-rc{}", pre.number)
                }
                _ => format!("{major}.{minor}.{patch}-rc1"),
            }
        } else if current.is_alpha_release() || current.is_beta_release() {
            format!("{major}.{minor}.{patch}-rc1")
        } else if let Some(pre) = current.pre().filter(|pre| pre.is(RELEASE_CANDIDATE)) {
            format!("{major}.{minor}.{patch}-rc{}", increment(pre.number, current)?)
        } else {
            format!("{major}.{minor}.{}-rc1", increment(patch, current)?)
        };
        debug!(current = %current, next = %next, "Calculated next release candidate version");
        self.version_from_string(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(version: &str) -> Version {
        VersioningScheme::Semantic.parse_version(version).unwrap()
    }

    fn pep440(version: &str) -> Version {
        VersioningScheme::Pep440.parse_version(version).unwrap()
    }

    fn assert_transitions(
        cases: &[(&str, &str)],
        transition: impl Fn(&SemanticVersionCalculator, &Version) -> Result<Version>,
    ) {
        let calculator = SemanticVersionCalculator;
        for (current, expected) in cases {
            let next = transition(&calculator, &parse(current)).unwrap();
            assert_eq!(
                next,
                parse(expected),
                "{next} is not the expected next version {expected} for {current}"
            );
        }
    }

    #[test]
    fn test_parse_version() {
        for version in [
            "0.0.1",
            "1.2.3",
            "1.2.3-foo1",
            "1.2.3-a1",
            "1.2.3-alpha1",
            "1.2.3-alpha1-dev1",
            "1.2.3-beta1-dev1",
            "1.2.3-rc1",
            "1.2.3-rc1-dev1",
            "1.2.3-dev1",
            "1.2.3+foo1",
            "22.4.1-dev3",
        ] {
            let parsed = SemanticVersion::from_string(version).unwrap();
            assert_eq!(parsed.to_string(), version);
            assert_eq!(parsed.parsed_version(), version);
        }
    }

    #[test]
    fn test_parsed_version_after_conversion() {
        let converted = SemanticVersion::from_version(&pep440("22.4.1.dev1"));
        assert_eq!(converted.to_string(), "22.4.1-dev1");
        assert_eq!(converted.parsed_version(), "22.4.1.dev1");
    }

    #[test]
    fn test_parse_error() {
        for version in [
            "abc",
            "1.2.3d",
            "1.2.3.post1",
            "1.2.3a1",
            "1.2.3b1",
            "1.2.3rc1",
            "1.2.3a1+dev1",
            "22.4.1.dev1",
        ] {
            let err = SemanticVersion::from_string(version).unwrap_err();
            assert_eq!(err.to_string(), format!("{version} is not valid SemVer string"));
        }
    }

    #[test]
    fn test_parse_prerelease_error() {
        for (version, pre) in [("1.2.3-pos1t1", "pos1t1"), ("1.2.3-dev1-dev1", "dev1-dev1")] {
            let err = SemanticVersion::from_string(version).unwrap_err();
            assert_eq!(err, Error::invalid_prerelease(pre, version));
            assert_eq!(err.to_string(), format!("Invalid prerelease {pre} in {version}"));
        }
    }

    #[test]
    fn test_equal() {
        for version in [
            "1.0.0",
            "1.0.0+dev1",
            "1.0.0-dev1",
            "1.0.0-alpha1+dev1",
            "1.0.0-alpha1-dev1",
            "1.0.0-rc1-dev1",
        ] {
            assert_eq!(parse(version), parse(version));
        }

        for (a, b) in [
            ("1.0.0", "1.0.1"),
            ("1.0.0", "1.0.0+dev1"),
            ("1.0.0", "1.0.0-alpha1"),
            ("1.0.0+dev1", "1.0.0-dev1"),
            ("1.0.0+dev1", "1.0.0+dev2"),
            ("1.0.0-alpha1", "1.0.0-beta1"),
            ("1.0.0-alpha1", "1.0.0-alpha1+dev1"),
            ("1.0.0-rc1+dev1", "1.0.0-rc1+dev2"),
        ] {
            assert_ne!(parse(a), parse(b), "{a} equals {b}");
        }
    }

    #[test]
    fn test_equal_pep440_version() {
        for (a, b) in [
            ("1.0.0", "1.0.0"),
            ("1.0.0-dev1", "1.0.0-dev1"),
            ("1.0.0-dev1", "1.0.0.dev1"),
            ("1.0.0-alpha1", "1.0.0a1"),
            ("1.0.0-alpha1-dev1", "1.0.0-alpha1-dev1"),
            ("1.0.0-alpha1-dev1", "1.0.0a1.dev1"),
            ("1.0.0-beta1", "1.0.0b1"),
            ("1.0.0-beta1-dev1", "1.0.0b1.dev1"),
            ("1.0.0-rc1-dev1", "1.0.0-rc1.dev1"),
            ("1.0.0-rc1-dev1", "1.0.0rc1.dev1"),
        ] {
            assert_eq!(parse(a), pep440(b), "{a} does not equal {b}");
        }
    }

    #[test]
    fn test_ordering() {
        for (greater, lesser) in [
            ("1.0.0", "0.9.9999"),
            ("1.0.1", "1.0.0"),
            ("1.0.0", "1.0.0-dev1"),
            ("1.0.0", "1.0.0-alpha1"),
            ("1.0.0", "1.0.0-rc1"),
            ("1.0.0-alpha1", "1.0.0-dev1"),
            ("1.0.0-alpha1", "1.0.0-alpha1-dev1"),
            ("1.0.0-alpha2", "1.0.0-alpha1"),
            ("1.0.0-beta1", "1.0.0-dev1"),
            ("1.0.0-beta1", "1.0.0-alpha1"),
            ("1.0.0-beta1", "1.0.0-beta1-dev1"),
            ("1.0.0-rc1", "1.0.0-beta1"),
            ("1.0.0-rc1", "1.0.0-rc1-dev1"),
            ("1.0.0-rc2", "1.0.0-rc1"),
            ("1.0.0-dev2", "1.0.0-dev1"),
            ("1.0.0-alpha1-dev2", "1.0.0-alpha1-dev1"),
        ] {
            let (greater, lesser) = (parse(greater), parse(lesser));
            assert!(greater > lesser, "{greater} should be greater than {lesser}");
            assert!(greater >= lesser);
            assert!(lesser < greater, "{lesser} should be less than {greater}");
            assert!(lesser <= greater);
            assert!(!(lesser > greater));
        }
    }

    #[test]
    fn test_build_metadata_is_not_comparable() {
        for (a, b) in [
            ("1.0.0", "1.0.0+dev1"),
            ("1.0.0+dev1", "1.0.0+dev2"),
            ("1.0.0-alpha1", "1.0.0-alpha1+dev1"),
        ] {
            let (a, b) = (parse(a), parse(b));
            assert_eq!(a.partial_cmp(&b), None);
            assert!(!(a > b));
            assert!(!(a >= b));
            assert!(!(a < b));
            assert!(!(a <= b));
        }
        assert!(parse("1.0.0+dev1") >= parse("1.0.0+dev1"));
    }

    #[test]
    fn test_is_dev_release() {
        for version in ["1.0.0-dev1", "1.0.0-alpha1-dev1", "1.0.0-rc1-dev1"] {
            assert!(parse(version).is_dev_release(), "{version}");
        }
        for version in ["1.0.0", "1.0.0+foo1", "1.0.0+dev1", "1.0.0-alpha1", "1.0.0-rc1+dev1"] {
            assert!(!parse(version).is_dev_release(), "{version}");
        }
    }

    #[test]
    fn test_is_pre_release() {
        for version in ["1.0.0-alpha1", "1.0.0-foo1", "1.0.0-rc1-dev1"] {
            assert!(parse(version).is_pre_release(), "{version}");
        }
        for version in ["1.0.0", "1.0.0-dev1", "1.0.0+dev1"] {
            assert!(!parse(version).is_pre_release(), "{version}");
        }
    }

    #[test]
    fn test_pre_release_kinds() {
        for version in ["1.0.0-alpha1", "1.0.0-alpha1+foo1", "1.0.0-alpha1-foo1", "1.0.0-alpha1-dev1"] {
            assert!(parse(version).is_alpha_release(), "{version}");
        }
        for version in ["1.0.0-beta1", "1.0.0-beta1-foo1", "1.0.0-beta1+dev1"] {
            assert!(parse(version).is_beta_release(), "{version}");
        }
        for version in ["1.0.0-rc1", "1.0.0-rc1+foo1", "1.0.0-rc1-dev1"] {
            assert!(parse(version).is_release_candidate(), "{version}");
        }
        for version in ["1.0.0", "1.0.0+dev1", "1.0.0-dev1", "1.0.0-a1", "1.0.0-b1"] {
            let version = parse(version);
            assert!(!version.is_alpha_release());
            assert!(!version.is_beta_release());
            assert!(!version.is_release_candidate());
        }
    }

    #[test]
    fn test_pre_and_local() {
        let cases = [
            ("1.0.0", None, None),
            ("1.0.0+dev1", None, Some(("dev", 1))),
            ("1.0.0-dev1", None, None),
            ("1.0.0-alpha1", Some(("alpha", 1)), None),
            ("1.0.0-rc1+foo1", Some(("rc", 1)), Some(("foo", 1))),
            ("1.0.0-beta1+dev1", Some(("beta", 1)), Some(("dev", 1))),
            ("1.0.0-rc1-dev1", Some(("rc", 1)), None),
            ("1.0.0+build.5", None, None),
        ];
        for (version, pre, local) in cases {
            let parsed = parse(version);
            let pre = pre.map(|(name, number)| PreRelease::new(name, number));
            let local = local.map(|(name, number)| LocalSegment::new(name, number));
            assert_eq!(parsed.pre(), pre.as_ref(), "{version}");
            assert_eq!(parsed.local(), local.as_ref(), "{version}");
        }
    }

    #[test]
    fn test_next_patch_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.0.2"),
                ("1.2.3", "1.2.4"),
                ("1.2.3+dev1", "1.2.4"),
                ("1.2.3-dev1", "1.2.3"),
                ("1.2.3-foo1", "1.2.3"),
                ("1.2.3-alpha1", "1.2.3"),
                ("1.2.3-beta1", "1.2.3"),
                ("1.2.3-rc1", "1.2.3"),
                ("1.2.3-alpha1+dev1", "1.2.3"),
                ("1.2.3-beta1+dev1", "1.2.3"),
                ("1.2.3-rc1+dev1", "1.2.3"),
                ("1.2.3-alpha1-dev1", "1.2.3"),
                ("1.2.3-beta1-dev1", "1.2.3"),
                ("1.2.3-rc1-dev1", "1.2.3"),
                ("22.4.1", "22.4.2"),
                ("22.4.1+dev3", "22.4.2"),
                ("22.4.1-dev1", "22.4.1"),
                ("22.4.1-dev3", "22.4.1"),
                ("1.0.0-a1", "1.0.0"),
                ("1.1.0-alpha1", "1.1.0"),
                ("1.0.0+dev1", "1.0.1"),
                ("1.1.0+dev1", "1.1.1"),
                ("1.0.0-dev1", "1.0.0"),
                ("1.1.0-dev1", "1.1.0"),
            ],
            SemanticVersionCalculator::next_patch_version,
        );
    }

    #[test]
    fn test_next_minor_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.1.0"),
                ("1.2.3", "1.3.0"),
                ("1.2.3+dev1", "1.3.0"),
                ("1.2.3-dev1", "1.3.0"),
                ("1.2.3-foo1", "1.3.0"),
                ("1.2.3-alpha1", "1.3.0"),
                ("1.2.3-beta1", "1.3.0"),
                ("1.2.3-rc1", "1.3.0"),
                ("1.2.3-alpha1+dev1", "1.3.0"),
                ("1.2.3-beta1+dev1", "1.3.0"),
                ("1.2.3-rc1+dev1", "1.3.0"),
                ("22.4.1", "22.5.0"),
                ("22.4.1+dev3", "22.5.0"),
                ("22.4.1-dev1", "22.5.0"),
                ("22.4.1-dev3", "22.5.0"),
                ("1.0.0-a1", "1.0.0"),
                ("1.1.0-alpha1", "1.1.0"),
                ("1.0.0+dev1", "1.1.0"),
                ("1.1.0+dev1", "1.2.0"),
                ("1.0.0-dev1", "1.0.0"),
                ("1.1.0-dev1", "1.1.0"),
            ],
            SemanticVersionCalculator::next_minor_version,
        );
    }

    #[test]
    fn test_next_major_version() {
        assert_transitions(
            &[
                ("0.0.1", "1.0.0"),
                ("1.2.3", "2.0.0"),
                ("1.2.3+dev1", "2.0.0"),
                ("1.2.3-dev1", "2.0.0"),
                ("1.2.3-foo1", "2.0.0"),
                ("1.2.3-alpha1", "2.0.0"),
                ("1.2.3-beta1", "2.0.0"),
                ("1.2.3-rc1", "2.0.0"),
                ("1.2.3-alpha1+dev1", "2.0.0"),
                ("1.2.3-beta1+dev1", "2.0.0"),
                ("1.2.3-rc1+dev1", "2.0.0"),
                ("1.2.3-alpha1-dev1", "2.0.0"),
                ("1.2.3-beta1-dev1", "2.0.0"),
                ("1.2.3-rc1-dev1", "2.0.0"),
                ("22.4.1", "23.0.0"),
                ("22.4.1+dev3", "23.0.0"),
                ("22.4.1-dev1", "23.0.0"),
                ("22.4.1-dev3", "23.0.0"),
                ("1.0.0-a1", "1.0.0"),
                ("1.0.0-beta1", "1.0.0"),
                ("1.1.0-alpha1", "2.0.0"),
                ("1.0.0+dev1", "2.0.0"),
                ("1.1.0+dev1", "2.0.0"),
                ("1.0.0-dev1", "1.0.0"),
                ("1.1.0-dev1", "2.0.0"),
            ],
            SemanticVersionCalculator::next_major_version,
        );
    }

    #[test]
    fn test_next_calendar_version() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_transitions(
            &[
                ("21.4.1-dev3", "24.3.0"),
                ("19.3.1-dev3", "24.3.0"),
                ("24.3.1-dev3", "24.3.1"),
                ("24.3.1", "24.3.2"),
                ("2023.12.4", "2024.3.0"),
            ],
            |calculator, current| calculator.next_calendar_version(current, today),
        );

        let err = SemanticVersionCalculator
            .next_calendar_version(&parse("24.4.0"), today)
            .unwrap_err();
        assert_eq!(err.to_string(), "'24.4.0' is higher than '24.3'.");
    }

    #[test]
    fn test_next_dev_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.0.2-dev1"),
                ("1.2.3", "1.2.4-dev1"),
                ("1.2.3+dev1", "1.2.4-dev1"),
                ("1.2.3-dev1", "1.2.3-dev2"),
                ("1.2.3-foo1", "1.2.3-foo2-dev1"),
                ("1.2.3-alpha1", "1.2.3-alpha2-dev1"),
                ("1.2.3-beta1", "1.2.3-beta2-dev1"),
                ("1.2.3-rc1", "1.2.3-rc2-dev1"),
                ("1.2.3-alpha1+dev1", "1.2.3-alpha2-dev1"),
                ("1.2.3-beta1+dev1", "1.2.3-beta2-dev1"),
                ("1.2.3-rc1+dev1", "1.2.3-rc2-dev1"),
                ("1.2.3-alpha1-dev1", "1.2.3-alpha1-dev2"),
                ("1.2.3-beta1-dev1", "1.2.3-beta1-dev2"),
                ("1.2.3-rc1-dev1", "1.2.3-rc1-dev2"),
                ("22.4.1", "22.4.2-dev1"),
                ("22.4.1+dev3", "22.4.2-dev1"),
                ("22.4.1-dev1", "22.4.1-dev2"),
                ("22.4.1-dev3", "22.4.1-dev4"),
                ("1.0.0-a1", "1.0.0-a2-dev1"),
                ("1.0.0-beta1", "1.0.0-beta2-dev1"),
                ("1.1.0-alpha1", "1.1.0-alpha2-dev1"),
                ("1.0.0+dev1", "1.0.1-dev1"),
                ("1.1.0+dev1", "1.1.1-dev1"),
                ("1.0.0-dev1", "1.0.0-dev2"),
                ("1.1.0-dev1", "1.1.0-dev2"),
            ],
            SemanticVersionCalculator::next_dev_version,
        );
    }

    #[test]
    fn test_next_version_number_overflow() {
        let calculator = SemanticVersionCalculator;
        let current = parse("1.2.3-dev18446744073709551615");
        assert_eq!(current.dev(), Some(u64::MAX));
        let err = calculator.next_dev_version(&current).unwrap_err();
        assert!(err.to_string().contains("Cannot increment"));

        let current = parse("1.2.3-rc18446744073709551615");
        assert!(calculator.next_release_candidate_version(&current).is_err());
        assert!(calculator.next_dev_version(&current).is_err());
        assert_eq!(calculator.next_patch_version(&current).unwrap(), parse("1.2.3"));
    }

    #[test]
    fn test_next_alpha_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.0.2-alpha1"),
                ("1.2.3", "1.2.4-alpha1"),
                ("1.2.3+dev1", "1.2.4-alpha1"),
                ("1.2.3-dev1", "1.2.3-alpha1"),
                ("1.2.3-post1", "1.2.4-alpha1"),
                ("1.2.3-alpha1", "1.2.3-alpha2"),
                ("1.2.3-beta1", "1.2.4-alpha1"),
                ("1.2.3-rc1", "1.2.4-alpha1"),
                ("1.2.3-alpha1+dev1", "1.2.3-alpha2"),
                ("1.2.3-beta1+dev1", "1.2.4-alpha1"),
                ("1.2.3-rc1+dev1", "1.2.4-alpha1"),
                ("1.2.3-alpha1-dev1", "1.2.3-alpha1"),
                ("1.2.3-beta1-dev1", "1.2.4-alpha1"),
                ("22.4.1", "22.4.2-alpha1"),
                ("22.4.1+dev3", "22.4.2-alpha1"),
                ("22.4.1-dev1", "22.4.1-alpha1"),
                ("22.4.1-dev3", "22.4.1-alpha1"),
                ("1.0.0-a1", "1.0.1-alpha1"),
                ("1.0.0-beta1", "1.0.1-alpha1"),
                ("1.1.0-alpha1", "1.1.0-alpha2"),
                ("1.0.0+dev1", "1.0.1-alpha1"),
                ("1.1.0+dev1", "1.1.1-alpha1"),
                ("1.0.0-dev1", "1.0.0-alpha1"),
                ("1.1.0-dev1", "1.1.0-alpha1"),
            ],
            SemanticVersionCalculator::next_alpha_version,
        );
    }

    #[test]
    fn test_next_beta_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.0.2-beta1"),
                ("1.2.3", "1.2.4-beta1"),
                ("1.2.3+dev1", "1.2.4-beta1"),
                ("1.2.3-dev1", "1.2.3-beta1"),
                ("1.2.3-foo1", "1.2.4-beta1"),
                ("1.2.3-alpha1", "1.2.3-beta1"),
                ("1.2.3-beta1", "1.2.3-beta2"),
                ("1.2.3-rc1", "1.2.4-beta1"),
                ("1.2.3-alpha1+dev1", "1.2.3-beta1"),
                ("1.2.3-beta1+dev1", "1.2.3-beta2"),
                ("1.2.3-rc1+dev1", "1.2.4-beta1"),
                ("1.2.3-alpha1-dev1", "1.2.3-beta1"),
                ("1.2.3-beta1-dev1", "1.2.3-beta1"),
                ("1.2.3-rc1-dev1", "1.2.4-beta1"),
                ("22.4.1", "22.4.2-beta1"),
                ("22.4.1+dev3", "22.4.2-beta1"),
                ("22.4.1-dev1", "22.4.1-beta1"),
                ("22.4.1-dev3", "22.4.1-beta1"),
                ("1.0.0-a1", "1.0.1-beta1"),
                ("1.0.0-beta1", "1.0.0-beta2"),
                ("1.1.0-alpha1", "1.1.0-beta1"),
                ("1.0.0+dev1", "1.0.1-beta1"),
                ("1.1.0+dev1", "1.1.1-beta1"),
                ("1.0.0-dev1", "1.0.0-beta1"),
                ("1.1.0-dev1", "1.1.0-beta1"),
            ],
            SemanticVersionCalculator::next_beta_version,
        );
    }

    #[test]
    fn test_next_release_candidate_version() {
        assert_transitions(
            &[
                ("0.0.1", "0.0.2-rc1"),
                ("1.2.3", "1.2.4-rc1"),
                ("1.2.3+dev1", "1.2.4-rc1"),
                ("1.2.3-dev1", "1.2.3-rc1"),
                ("1.2.3-foo1", "1.2.4-rc1"),
                ("1.2.3-alpha1", "1.2.3-rc1"),
                ("1.2.3-beta1", "1.2.3-rc1"),
                ("1.2.3-rc1", "1.2.3-rc2"),
                ("1.2.3-alpha1+dev1", "1.2.3-rc1"),
                ("1.2.3-beta1+dev1", "1.2.3-rc1"),
                ("1.2.3-rc1+dev1", "1.2.3-rc2"),
                ("1.2.3-alpha1-dev1", "1.2.3-rc1"),
                ("1.2.3-beta1-dev1", "1.2.3-rc1"),
                ("1.2.3-rc1-dev1", "1.2.3-rc1"),
                ("22.4.1", "22.4.2-rc1"),
                ("22.4.1+dev3", "22.4.2-rc1"),
                ("22.4.1-dev1", "22.4.1-rc1"),
                ("22.4.1-dev3", "22.4.1-rc1"),
                ("1.0.0-a1", "1.0.1-rc1"),
                ("1.0.0-beta1", "1.0.0-rc1"),
                ("1.1.0-alpha1", "1.1.0-rc1"),
                ("1.0.0+dev1", "1.0.1-rc1"),
                ("1.1.0+dev1", "1.1.1-rc1"),
                ("1.0.0-dev1", "1.0.0-rc1"),
                ("1.1.0-dev1", "1.1.0-rc1"),
            ],
            SemanticVersionCalculator::next_release_candidate_version,
        );
    }
}
