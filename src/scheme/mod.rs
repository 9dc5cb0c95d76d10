//! URL scheme validation
//!
//! - [`registry`]: Membership checks against the app's registered schemes
//! - [`url`]: Scheme syntax, percent encoding and URL opening

pub mod registry;
pub mod url;

pub use registry::{SchemeList, is_app_scheme, is_registered_scheme};
pub use url::{
    can_open_url, decode_url_string, encode_url_string, is_app_scheme_url, is_valid_scheme,
    open_url, scheme_of,
};
