//! Localized string lookup

use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::host::error::LocaleError;

/// Source of localized strings
#[cfg_attr(test, automock)]
pub trait Localizer: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Look up `key`, falling back to the key itself when no translation exists.
pub fn localized_string<L>(localizer: &L, key: &str) -> String
where
    L: Localizer + ?Sized,
{
    localizer.lookup(key).unwrap_or_else(|| key.to_string())
}

/// In-memory string table, typically loaded from a JSON object of
/// `key -> translation`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Localizer for StringTable {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
