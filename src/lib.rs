//! Version range checks, URL scheme validation and small platform helpers
//! for mobile apps.
//!
//! # Modules
//!
//! - [`version`]: Numeric per-component version comparison and range checks
//! - [`scheme`]: Registered URL scheme lookup and URL string helpers
//! - [`host`]: Traits for the platform collaborators and a static host
//! - [`util`]: Date formatting and call-site logging
//! - [`service`]: Service object tying the checks to a host
//! - [`config`]: Configuration file handling
//! - [`logging`]: Subscriber setup

pub mod config;
pub mod host;
pub mod logging;
pub mod scheme;
pub mod service;
pub mod util;
pub mod version;

#[cfg(test)]
mod test_support;

pub use scheme::is_registered_scheme;
pub use service::MUtil;
pub use version::{VersionTarget, in_range};
