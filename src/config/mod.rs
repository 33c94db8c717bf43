//! Definition of the agent configuration view consumed by address resolvers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Represents read-only key-value configuration of the agent.
///
/// Resolvers only read from it; the caller owns it and decides how it is
/// populated. Besides programmatic construction it can be loaded from a
/// JSON document, in which every entry is a string-to-string pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentConfig {
    /// Configuration entries.
    entries: HashMap<String, String>,
}

impl AgentConfig {
    /// Creates empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON object of string values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets value for the given key, overriding an existing one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns value for the given key, if present and non-empty.
    ///
    /// An empty value means the same as an absent key: the feature
    /// behind the key is not configured.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

impl From<HashMap<String, String>> for AgentConfig {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for AgentConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
