//! Small standalone helpers
//!
//! - [`date`]: Gregorian date formatting with LDML patterns
//! - [`log`]: Call-site debug logging (`mlog!`)

pub mod date;
pub mod log;

pub use date::{DateFormatError, gregorian_date_string};
pub use log::{CallSite, format_log_entry};
