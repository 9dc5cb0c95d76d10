//! Call-site debug logging
//!
//! `mlog!` records a message together with the file, module and line it was
//! written at. Entries are only emitted when the crate is built with the
//! `dlog` feature; otherwise `mlog!` formats nothing and logs nothing.

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use crate::util::date::gregorian_date_string;

/// Timestamp pattern of a log entry
pub const LOG_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

/// Capture the current [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::util::log::CallSite {
            file: file!(),
            function: module_path!(),
            line: line!(),
        }
    };
}

/// Log a formatted message with its call site (`dlog` feature only).
#[macro_export]
macro_rules! mlog {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled() {
            $crate::util::log::log(&format!($($arg)*), $crate::call_site!());
        }
    };
}

/// Whether call-site logging is compiled in
pub const fn enabled() -> bool {
    cfg!(feature = "dlog")
}

/// File name without directories or extensions: `src/app/view.rs` -> `view`
pub fn file_stem(file: &str) -> &str {
    let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    name.split('.').next().unwrap_or(name)
}

/// `"<timestamp> [<file> <function> - <line>]\n<message>"`
pub fn format_log_entry<Tz: TimeZone>(
    timestamp: &DateTime<Tz>,
    message: &str,
    site: &CallSite,
) -> String {
    let date = gregorian_date_string(timestamp, LOG_DATE_FORMAT).unwrap_or_default();
    format!(
        "{} [{} {} - {}]\n{}",
        date,
        file_stem(site.file),
        site.function,
        site.line,
        message
    )
}

/// Emit `message` with its call site at debug level.
///
/// Does nothing unless the `dlog` feature is enabled.
pub fn log(message: &str, site: CallSite) {
    if !enabled() {
        return;
    }
    let entry = format_log_entry(&Local::now(), message, &site);
    debug!(target: "mutil::dlog", "{}", entry);
}
