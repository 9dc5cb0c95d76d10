//! Registered URL scheme lookup

use tracing::debug;

use crate::host::HostEnvironment;

/// URL schemes an app registers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeList {
    schemes: Vec<String>,
}

impl SchemeList {
    pub fn new(schemes: Vec<String>) -> Self {
        Self { schemes }
    }

    /// Read the current list from the host. Nothing is cached.
    pub fn from_host<H>(host: &H) -> Self
    where
        H: HostEnvironment + ?Sized,
    {
        Self::new(host.url_schemes())
    }

    pub fn contains(&self, candidate: &str) -> bool {
        is_registered_scheme(candidate, &self.schemes)
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SchemeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Exact, case-sensitive membership of `candidate` in `schemes`.
///
/// An empty candidate is never registered.
pub fn is_registered_scheme<S: AsRef<str>>(candidate: &str, schemes: &[S]) -> bool {
    if candidate.is_empty() {
        return false;
    }
    schemes.iter().any(|scheme| scheme.as_ref() == candidate)
}

/// Whether `candidate` is one of the schemes the host app registers
pub fn is_app_scheme<H>(host: &H, candidate: &str) -> bool
where
    H: HostEnvironment + ?Sized,
{
    let schemes = SchemeList::from_host(host);
    let registered = schemes.contains(candidate);
    debug!("Scheme '{}' registered: {}", candidate, registered);
    registered
}
