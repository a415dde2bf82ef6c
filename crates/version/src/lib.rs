//! Version schemes for release tooling.
//!
//! This crate parses, compares and calculates release versions for two
//! versioning schemes behind one [`Version`] type.
//!
//! # Features
//!
//! - **PEP 440**: Python packaging versions like `1.2.3rc1.dev2+build1`
//! - **SemVer**: Semantic versions like `1.2.3-rc1-dev2+build1`
//! - **Conversion**: Any version converts into the other scheme
//! - **Next Version**: Patch, minor, major, calendar and pre-release bumps
//! - **Last Release**: Finds the newest release among git tag names
//!
//! # Architecture
//!
//! - [`version`] - The scheme independent version value
//! - [`scheme`] - Scheme selection, parsing and conversion
//! - [`schemes`] - PEP 440 and SemVer implementations
//! - [`calculator`] - Next version calculation
//! - [`release`] - Release types and last release lookup
//! - [`config`] - Versioning configuration
//!
//! # Example
//!
//! ```rust
//! use relkit_version::{ReleaseType, VersioningScheme, next_release_version};
//!
//! let scheme = VersioningScheme::Semantic;
//! let last = scheme.parse_version("1.2.3-rc1")?;
//! let next = next_release_version(
//!     scheme.calculator(),
//!     Some(&last),
//!     ReleaseType::Patch,
//!     None,
//!     chrono::Local::now().date_naive(),
//! )?;
//! assert_eq!(next.to_string(), "1.2.3");
//! # Ok::<(), relkit_version::Error>(())
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod release;
pub mod scheme;
pub mod schemes;
pub mod version;

// Re-export main types
pub use calculator::VersionCalculator;
pub use config::VersioningConfig;
pub use error::{Error, Result};
pub use release::{
    LastReleaseOptions, RELEASE_TYPES, ReleaseType, last_release_version, last_release_versions,
    next_release_version,
};
pub use scheme::{VERSIONING_SCHEMES, VersioningScheme};
pub use schemes::pep440::{Pep440Version, Pep440VersionCalculator};
pub use schemes::semantic::{SemanticVersion, SemanticVersionCalculator};
pub use version::{LocalSegment, PreRelease, Version, VersionUpdate};
