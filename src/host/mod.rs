//! Host platform collaborators
//!
//! Everything that needs the running platform (system version, bundle
//! metadata, URL opening, badges, text layout, localized strings) is reached
//! through the traits in this module, so the logic built on top can be
//! exercised without a UI runtime.
//!
//! # Modules
//!
//! - [`info`]: Bundle info dictionary reader (app/build version, URL schemes)
//! - [`static_host`]: `HostEnvironment` backed by a `HostInfo`
//! - [`ui`]: Label measurement and app badge helpers
//! - [`locale`]: Localized string lookup
//! - [`error`]: Error types for host info and string table loading

#[cfg(test)]
use mockall::automock;

pub mod error;
pub mod info;
pub mod locale;
pub mod static_host;
pub mod ui;

pub use error::{HostInfoError, LocaleError};
pub use info::HostInfo;
pub use locale::{Localizer, StringTable, localized_string};
pub use static_host::StaticHost;
pub use ui::{BadgeSink, Font, Label, Size, TextMeasurer, label_height, set_app_badge};

/// Read-only view of the host environment
#[cfg_attr(test, automock)]
pub trait HostEnvironment: Send + Sync {
    /// Operating system version, e.g. "17.4.1"
    fn os_version(&self) -> Option<String>;

    /// User-facing app version (CFBundleShortVersionString)
    fn app_version(&self) -> Option<String>;

    /// Build number (CFBundleVersion)
    fn build_version(&self) -> Option<String>;

    /// Identifier for the vendor, if the platform exposes one
    fn vendor_id(&self) -> Option<String>;

    /// Main screen size in points
    fn screen_bounds(&self) -> Size;

    /// URL schemes the app registers, re-read on every call
    fn url_schemes(&self) -> Vec<String>;
}

/// Opens URLs on behalf of the app
#[cfg_attr(test, automock)]
pub trait UrlOpener: Send + Sync {
    /// Whether some installed app can handle `url`
    fn can_open_url(&self, url: &str) -> bool;

    /// Hand `url` to the system
    fn open_url(&self, url: &str);
}
