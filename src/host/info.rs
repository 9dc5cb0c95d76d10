//! Bundle info dictionary reader
//!
//! Reads a JSON rendering of the app's bundle info dictionary. Only the keys
//! used for version and scheme checks are modelled; everything else is
//! ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::host::error::HostInfoError;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct HostInfo {
    #[serde(rename = "CFBundleShortVersionString")]
    pub short_version: Option<String>,

    #[serde(rename = "CFBundleVersion")]
    pub bundle_version: Option<String>,

    #[serde(rename = "CFBundleURLTypes", default)]
    pub url_types: Vec<UrlType>,
}

/// One entry of `CFBundleURLTypes`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct UrlType {
    #[serde(rename = "CFBundleURLName")]
    pub name: Option<String>,

    #[serde(rename = "CFBundleURLSchemes")]
    pub schemes: Option<Vec<String>>,
}

impl HostInfo {
    pub fn from_json(json: &str) -> Result<Self, HostInfoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, HostInfoError> {
        debug!("Loading host info from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| HostInfoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Registered URL schemes.
    ///
    /// Only the first scheme of each URL type counts. Types without schemes
    /// are skipped.
    pub fn url_schemes(&self) -> Vec<String> {
        self.url_types
            .iter()
            .filter_map(|url_type| url_type.schemes.as_ref()?.first().cloned())
            .collect()
    }
}
