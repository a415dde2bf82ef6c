//! Error types for version handling.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for version operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing versions or calculating new ones.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// The version text does not match the scheme's grammar.
    #[error("{message}")]
    #[diagnostic(
        code(relkit::version::invalid_version),
        help("Check the version against the configured versioning scheme (pep440 or semver)")
    )]
    InvalidVersion {
        /// The error message
        message: String,
    },

    /// A SemVer pre-release identifier that is not `<name><number>`.
    #[error("Invalid prerelease {prerelease} in {version}")]
    #[diagnostic(
        code(relkit::version::invalid_prerelease),
        help("Pre-releases must look like alpha1, beta2, rc1 or alpha1-dev1")
    )]
    InvalidPrerelease {
        /// The rejected pre-release identifier
        prerelease: String,
        /// The full version string
        version: String,
    },

    /// The current version lies after today's calendar slot.
    #[error("'{version}' is higher than '{year}.{month}'.")]
    #[diagnostic(code(relkit::version::calendar_ahead))]
    CalendarVersionAhead {
        /// The current version
        version: String,
        /// The year of the calendar slot
        year: u64,
        /// The month of the calendar slot
        month: u32,
    },

    /// A release of type `version` was requested without a version.
    #[error("No release version provided.")]
    #[diagnostic(
        code(relkit::version::missing_release_version),
        help("Pass an explicit release version together with the release type 'version'")
    )]
    MissingReleaseVersion,

    /// An explicit version was passed together with a calculated release type.
    #[error(
        "Invalid release type {release_type} when setting release version explicitly. \
         Use release type version instead."
    )]
    #[diagnostic(code(relkit::version::unexpected_release_version))]
    UnexpectedReleaseVersion {
        /// The conflicting release type
        release_type: String,
    },

    /// No previous release exists to calculate the next one from.
    #[error("No last release version found.")]
    #[diagnostic(
        code(relkit::version::no_last_release),
        help("Create an initial release with an explicit release version")
    )]
    NoLastReleaseVersion,

    /// A release series that cannot be turned into a tag pattern.
    #[error("Invalid release series {series}: {message}")]
    #[diagnostic(
        code(relkit::version::invalid_release_series),
        help("A release series is a version prefix such as 1.2 or 22.4")
    )]
    InvalidReleaseSeries {
        /// The rejected release series
        series: String,
        /// The pattern error
        message: String,
    },

    /// Unknown versioning scheme name.
    #[error("invalid value {name}. Expected one of {expected}.")]
    #[diagnostic(code(relkit::version::unknown_scheme))]
    UnknownScheme {
        /// The rejected name
        name: String,
        /// Comma separated list of valid names
        expected: String,
    },

    /// Unknown release type name.
    #[error("invalid release type {name}. Expected one of {expected}.")]
    #[diagnostic(code(relkit::version::unknown_release_type))]
    UnknownReleaseType {
        /// The rejected name
        name: String,
        /// Comma separated list of valid names
        expected: String,
    },

    /// Versioning configuration could not be parsed.
    #[error("Versioning configuration error: {message}")]
    #[diagnostic(
        code(relkit::version::config),
        help("Check the [versioning] table of the configuration file")
    )]
    Config {
        /// The error message
        message: String,
    },
}

impl Error {
    /// Create a new invalid version error.
    #[must_use]
    pub fn invalid_version(message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            message: message.into(),
        }
    }

    /// Create a new invalid pre-release error.
    #[must_use]
    pub fn invalid_prerelease(prerelease: impl Into<String>, version: impl Into<String>) -> Self {
        Self::InvalidPrerelease {
            prerelease: prerelease.into(),
            version: version.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
