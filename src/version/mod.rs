//! Version range checks
//!
//! # Modules
//!
//! - [`compare`]: Parsing and numeric per-component ordering of version strings
//! - [`range`]: Inclusive range membership and host-backed range checks
//! - [`error`]: Error type for malformed version strings

pub mod compare;
pub mod error;
pub mod range;

pub use compare::{DEFAULT_DELIMITER, VersionString, compare_versions};
pub use error::VersionError;
pub use range::{
    VersionRange, VersionTarget, check_version_range, check_version_range_with_delimiter, in_range,
    in_range_with_delimiter,
};
