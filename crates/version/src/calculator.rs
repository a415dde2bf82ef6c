//! Next version calculation.
//!
//! Release, calendar and pre-release transitions for a current version.
//! The release and calendar transitions are shared by all schemes; the
//! pre-release transitions depend on the scheme's spelling and are
//! implemented per scheme.

use crate::error::{Error, Result};
use crate::scheme::VersioningScheme;
use crate::version::Version;
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// Calculates the next version for a current version.
///
/// All methods are pure: they never modify `current` and always return a
/// version of the calculator's [`scheme`](Self::scheme).
pub trait VersionCalculator: Send + Sync {
    /// The scheme of the calculated versions.
    fn scheme(&self) -> VersioningScheme;

    /// Parse a version string in the calculator's scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid version of the scheme.
    fn version_from_string(&self, version: &str) -> Result<Version> {
        self.scheme().parse_version(version)
    }

    /// Get the next patch version.
    ///
    /// A pre-release or development release of `1.2.3` becomes `1.2.3`,
    /// any other version becomes `1.2.4`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_patch_version(&self, current: &Version) -> Result<Version> {
        let patch = if is_unreleased(current) {
            current.patch()
        } else {
            increment(current.patch(), current)?
        };
        let next = format!("{}.{}.{patch}", current.major(), current.minor());
        debug!(current = %current, next = %next, "Calculated next patch version");
        self.version_from_string(&next)
    }

    /// Get the next minor version.
    ///
    /// An unreleased `1.2.0` becomes `1.2.0`, any other version of the
    /// `1.2` series becomes `1.3.0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_minor_version(&self, current: &Version) -> Result<Version> {
        let next = if is_unreleased(current) && current.patch() == 0 {
            format!("{}.{}.0", current.major(), current.minor())
        } else {
            format!("{}.{}.0", current.major(), increment(current.minor(), current)?)
        };
        debug!(current = %current, next = %next, "Calculated next minor version");
        self.version_from_string(&next)
    }

    /// Get the next major version.
    ///
    /// An unreleased `2.0.0` becomes `2.0.0`, any other version of the `1`
    /// series becomes `2.0.0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_major_version(&self, current: &Version) -> Result<Version> {
        let next = if is_unreleased(current) && current.minor() == 0 && current.patch() == 0 {
            format!("{}.0.0", current.major())
        } else {
            format!("{}.0.0", increment(current.major(), current)?)
        };
        debug!(current = %current, next = %next, "Calculated next major version");
        self.version_from_string(&next)
    }

    /// Get the next calendar version `<year>.<month>.<patch>` for `today`.
    ///
    /// The year is written with two digits unless the current version uses a
    /// four digit year (a major of 100 or more).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalendarVersionAhead`] if the current version lies
    /// after today's year and month.
    fn next_calendar_version(&self, current: &Version, today: NaiveDate) -> Result<Version> {
        let full_year = u64::from(today.year().unsigned_abs());
        let year = if current.major() >= 100 {
            full_year
        } else {
            full_year % 100
        };
        let month = today.month();
        let minor = current.minor();

        let next = if current.major() < year
            || (current.major() == year && minor < u64::from(month))
        {
            format!("{year}.{month}.0")
        } else if current.major() == year && minor == u64::from(month) {
            let patch = if current.is_dev_release() {
                current.patch()
            } else {
                increment(current.patch(), current)?
            };
            format!("{year}.{month}.{patch}")
        } else {
            return Err(Error::CalendarVersionAhead {
                version: current.to_string(),
                year,
                month,
            });
        };

        debug!(current = %current, next = %next, %today, "Calculated next calendar version");
        self.version_from_string(&next)
    }

    /// Get the next calendar version for the local date.
    ///
    /// # Errors
    ///
    /// See [`next_calendar_version`](Self::next_calendar_version).
    fn next_calendar_version_today(&self, current: &Version) -> Result<Version> {
        self.next_calendar_version(current, Local::now().date_naive())
    }

    /// Get the next development version.
    ///
    /// `1.2.3` becomes `1.2.4.dev1`, `1.2.3.dev1` becomes `1.2.3.dev2` and
    /// `1.2.3a1` becomes `1.2.3a2.dev1` (PEP 440 spelling).
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_dev_version(&self, current: &Version) -> Result<Version>;

    /// Get the next alpha version.
    ///
    /// `1.2.3` becomes `1.2.4a1`, `1.2.3.dev1` becomes `1.2.3a1` and
    /// `1.2.3a1` becomes `1.2.3a2` (PEP 440 spelling).
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_alpha_version(&self, current: &Version) -> Result<Version>;

    /// Get the next beta version.
    ///
    /// `1.2.3` becomes `1.2.4b1`, `1.2.3a1` becomes `1.2.3b1` and
    /// `1.2.3b1` becomes `1.2.3b2` (PEP 440 spelling).
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_beta_version(&self, current: &Version) -> Result<Version>;

    /// Get the next release candidate version.
    ///
    /// `1.2.3` becomes `1.2.4rc1`, `1.2.3b1` becomes `1.2.3rc1` and
    /// `1.2.3rc1` becomes `1.2.3rc2` (PEP 440 spelling).
    ///
    /// # Errors
    ///
    /// Returns an error if the calculated version can not be parsed.
    fn next_release_candidate_version(&self, current: &Version) -> Result<Version>;
}

/// Pre-releases and development releases precede their final release.
fn is_unreleased(version: &Version) -> bool {
    version.is_pre_release() || version.is_dev_release()
}

/// Add one to a number of `current`.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] if the number is already `u64::MAX`.
pub(crate) fn increment(number: u64, current: &Version) -> Result<u64> {
    number.checked_add(1).ok_or_else(|| {
        Error::invalid_version(format!(
            "Cannot increment '{current}': number {number} is too large"
        ))
    })
}
