use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty component at position {position} in version '{version}'")]
    EmptyComponent { version: String, position: usize },

    #[error("Whitespace in component '{component}' of version '{version}'")]
    Whitespace { version: String, component: String },
}
