//! `HostEnvironment` backed by fixed values

use crate::host::HostEnvironment;
use crate::host::info::HostInfo;
use crate::host::ui::Size;

/// Host environment built from a [`HostInfo`] and explicitly supplied device
/// values. Used where no live platform is available (command line, tests).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticHost {
    info: HostInfo,
    os_version: Option<String>,
    vendor_id: Option<String>,
    screen_bounds: Size,
}

impl StaticHost {
    pub fn new(info: HostInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub fn with_os_version(mut self, version: impl Into<String>) -> Self {
        self.os_version = Some(version.into());
        self
    }

    pub fn with_vendor_id(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    pub fn with_screen_bounds(mut self, bounds: Size) -> Self {
        self.screen_bounds = bounds;
        self
    }
}

impl HostEnvironment for StaticHost {
    fn os_version(&self) -> Option<String> {
        self.os_version.clone()
    }

    fn app_version(&self) -> Option<String> {
        self.info.short_version.clone()
    }

    fn build_version(&self) -> Option<String> {
        self.info.bundle_version.clone()
    }

    fn vendor_id(&self) -> Option<String> {
        self.vendor_id.clone()
    }

    fn screen_bounds(&self) -> Size {
        self.screen_bounds
    }

    fn url_schemes(&self) -> Vec<String> {
        self.info.url_schemes()
    }
}
