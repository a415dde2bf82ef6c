//! Versioning schemes.
//!
//! A [`VersioningScheme`] ties a version grammar to its calculator. It is
//! the only way to create [`Version`] values.

use crate::calculator::VersionCalculator;
use crate::error::{Error, Result};
use crate::schemes::pep440::{Pep440Version, Pep440VersionCalculator};
use crate::schemes::semantic::{SemanticVersion, SemanticVersionCalculator};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PEP440_CALCULATOR: Pep440VersionCalculator = Pep440VersionCalculator;
static SEMANTIC_CALCULATOR: SemanticVersionCalculator = SemanticVersionCalculator;

/// Supported versioning schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersioningScheme {
    /// Python packaging versions, see PEP 440.
    #[default]
    #[serde(rename = "pep440")]
    Pep440,
    /// Semantic Versioning 2.0.
    #[serde(rename = "semver")]
    Semantic,
}

/// All schemes by their configuration key.
pub const VERSIONING_SCHEMES: &[(&str, VersioningScheme)] = &[
    ("pep440", VersioningScheme::Pep440),
    ("semver", VersioningScheme::Semantic),
];

impl VersioningScheme {
    /// Key used in configuration files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pep440 => "pep440",
            Self::Semantic => "semver",
        }
    }

    /// Human readable name of the scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pep440 => "PEP440",
            Self::Semantic => "SemVer",
        }
    }

    /// Parse a version string of this scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not follow the scheme's grammar.
    pub fn parse_version(self, version: &str) -> Result<Version> {
        match self {
            Self::Pep440 => Pep440Version::from_string(version).map(Version::Pep440),
            Self::Semantic => SemanticVersion::from_string(version).map(Version::Semantic),
        }
    }

    /// Convert a version of any scheme into this scheme.
    ///
    /// Versions already of this scheme are returned unchanged.
    #[must_use]
    pub fn convert_version(self, version: &Version) -> Version {
        match self {
            Self::Pep440 => Version::Pep440(Pep440Version::from_version(version)),
            Self::Semantic => Version::Semantic(SemanticVersion::from_version(version)),
        }
    }

    /// The calculator producing versions of this scheme.
    #[must_use]
    pub fn calculator(self) -> &'static dyn VersionCalculator {
        match self {
            Self::Pep440 => &PEP440_CALCULATOR,
            Self::Semantic => &SEMANTIC_CALCULATOR,
        }
    }
}

impl fmt::Display for VersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for VersioningScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        VERSIONING_SCHEMES
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, scheme)| *scheme)
            .ok_or_else(|| Error::UnknownScheme {
                name: s.to_string(),
                expected: VERSIONING_SCHEMES
                    .iter()
                    .map(|(key, _)| *key)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
