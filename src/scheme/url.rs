//! URL string helpers: scheme syntax, percent encoding, opening

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::host::UrlOpener;
use crate::scheme::registry::is_registered_scheme;

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap());

pub fn is_valid_scheme(scheme: &str) -> bool {
    SCHEME_RE.is_match(scheme)
}

/// Scheme part of `url` (text before the first `:`), if it is well-formed
pub fn scheme_of(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    is_valid_scheme(scheme).then_some(scheme)
}

/// Whether `url` uses one of the given registered schemes
pub fn is_app_scheme_url<S: AsRef<str>>(url: &str, schemes: &[S]) -> bool {
    scheme_of(url).is_some_and(|scheme| is_registered_scheme(scheme, schemes))
}

/// Percent-encode every byte that is not an ASCII letter or digit.
pub fn encode_url_string(input: &str) -> String {
    // urlencoding leaves the unreserved marks alone; escape them too
    let encoded = urlencoding::encode(input);
    let mut result = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '-' => result.push_str("%2D"),
            '.' => result.push_str("%2E"),
            '_' => result.push_str("%5F"),
            '~' => result.push_str("%7E"),
            _ => result.push(c),
        }
    }
    result
}

/// Decode percent escapes.
///
/// Returns `None` for a `%` not followed by two hex digits, or when the
/// decoded bytes are not UTF-8.
pub fn decode_url_string(input: &str) -> Option<String> {
    if has_malformed_escape(input) {
        return None;
    }
    urlencoding::decode(input).ok().map(|decoded| decoded.into_owned())
}

fn has_malformed_escape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().any(|(idx, b)| {
        *b == b'%'
            && !matches!(
                (bytes.get(idx + 1), bytes.get(idx + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

/// Whether some installed app can handle `url`.
///
/// URLs without a well-formed scheme are rejected without asking the opener.
pub fn can_open_url<O>(opener: &O, url: &str) -> bool
where
    O: UrlOpener + ?Sized,
{
    if scheme_of(url).is_none() {
        debug!("Rejecting URL without a valid scheme: {}", url);
        return false;
    }
    opener.can_open_url(url)
}

/// Open `url` if it can be opened. Returns whether it was handed off.
pub fn open_url<O>(opener: &O, url: &str) -> bool
where
    O: UrlOpener + ?Sized,
{
    if !can_open_url(opener, url) {
        return false;
    }
    opener.open_url(url);
    true
}
