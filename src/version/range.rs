//! Inclusive version range checks

use tracing::{debug, warn};

use crate::host::HostEnvironment;
use crate::version::compare::{DEFAULT_DELIMITER, VersionString};
use crate::version::error::VersionError;

/// Which of the host's versions a range check applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionTarget {
    /// Operating system version
    OsVersion,
    /// User-facing app version (CFBundleShortVersionString)
    AppVersion,
    /// Build number (CFBundleVersion)
    BuildVersion,
}

impl VersionTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionTarget::OsVersion => "os",
            VersionTarget::AppVersion => "app",
            VersionTarget::BuildVersion => "build",
        }
    }
}

/// Inclusive `[min, max]` bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub min: VersionString,
    pub max: VersionString,
}

impl VersionRange {
    pub fn new(min: VersionString, max: VersionString) -> Self {
        Self { min, max }
    }

    pub fn parse(min: &str, max: &str) -> Result<Self, VersionError> {
        Self::parse_with_delimiter(min, max, DEFAULT_DELIMITER)
    }

    pub fn parse_with_delimiter(min: &str, max: &str, delimiter: char) -> Result<Self, VersionError> {
        Ok(Self {
            min: VersionString::parse_with_delimiter(min, delimiter)?,
            max: VersionString::parse_with_delimiter(max, delimiter)?,
        })
    }

    pub fn contains(&self, current: &VersionString) -> bool {
        self.min <= *current && *current <= self.max
    }

    /// True when `min > max`, in which case nothing is contained
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Check `min <= current <= max` using numeric per-component ordering.
///
/// Malformed input on any side is reported as "not in range".
pub fn in_range(current: &str, min: &str, max: &str) -> bool {
    in_range_with_delimiter(current, min, max, DEFAULT_DELIMITER)
}

/// Same as [`in_range`] with a custom component delimiter.
pub fn in_range_with_delimiter(current: &str, min: &str, max: &str, delimiter: char) -> bool {
    let parsed = VersionString::parse_with_delimiter(current, delimiter).and_then(|current| {
        VersionRange::parse_with_delimiter(min, max, delimiter).map(|range| (current, range))
    });

    match parsed {
        Ok((current, range)) => range.contains(&current),
        Err(e) => {
            warn!("Invalid version in range check: {}", e);
            false
        }
    }
}

/// Check whether the host's version for `target` lies in `[min, max]`.
///
/// Returns false when the host cannot report a version for `target`.
pub fn check_version_range<H>(host: &H, target: VersionTarget, min: &str, max: &str) -> bool
where
    H: HostEnvironment + ?Sized,
{
    check_version_range_with_delimiter(host, target, min, max, DEFAULT_DELIMITER)
}

/// Same as [`check_version_range`] with a custom component delimiter.
pub fn check_version_range_with_delimiter<H>(
    host: &H,
    target: VersionTarget,
    min: &str,
    max: &str,
    delimiter: char,
) -> bool
where
    H: HostEnvironment + ?Sized,
{
    let current = match target {
        VersionTarget::OsVersion => host.os_version(),
        VersionTarget::AppVersion => host.app_version(),
        VersionTarget::BuildVersion => host.build_version(),
    };

    let Some(current) = current else {
        debug!("Host has no {} version", target.as_str());
        return false;
    };

    let result = in_range_with_delimiter(&current, min, max, delimiter);
    debug!(
        "{} version {} in [{}, {}]: {}",
        target.as_str(),
        current,
        min,
        max,
        result
    );
    result
}
