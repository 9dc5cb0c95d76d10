//! Stateless service object over a host environment

use crate::host::{HostEnvironment, Size};
use crate::scheme::registry::is_app_scheme;
use crate::version::compare::DEFAULT_DELIMITER;
use crate::version::range::{VersionTarget, check_version_range_with_delimiter};

/// Bundles the host-dependent checks behind one handle.
///
/// Holds the host and the version delimiter; every call reads fresh values
/// from the host.
#[derive(Debug, Clone)]
pub struct MUtil<H> {
    host: H,
    delimiter: char,
}

impl<H: HostEnvironment> MUtil<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Split version strings on `delimiter` instead of `.`
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether the host's `target` version lies in `[min, max]`
    pub fn check_version_range(&self, target: VersionTarget, min: &str, max: &str) -> bool {
        check_version_range_with_delimiter(&self.host, target, min, max, self.delimiter)
    }

    /// Whether `scheme` is registered by the app
    pub fn is_app_scheme(&self, scheme: &str) -> bool {
        is_app_scheme(&self.host, scheme)
    }

    pub fn os_version(&self) -> Option<String> {
        self.host.os_version()
    }

    pub fn app_version(&self) -> Option<String> {
        self.host.app_version()
    }

    pub fn build_version(&self) -> Option<String> {
        self.host.build_version()
    }

    pub fn vendor_id(&self) -> Option<String> {
        self.host.vendor_id()
    }

    pub fn screen_bounds(&self) -> Size {
        self.host.screen_bounds()
    }
}
