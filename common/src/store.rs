//! Read-only view of the key/value store shared with the main application.
//!
//! The app writes plain strings under fixed keys (see
//! [`config::keys`](crate::config::keys)); the renderers only ever read them.
//! An absent key is never an error, callers supply the fallback through
//! [`PreferenceStore::string_or`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config_log;
use crate::error::ConfigError;

/// String-keyed store of string values.
pub trait PreferenceStore {
    /// Value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<&str>;

    /// Value stored under `key`, or `default` when absent.
    fn string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str { self.get_string(key).unwrap_or(default) }
}

impl PreferenceStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<&str> { self.get(key).map(String::as_str) }
}

impl PreferenceStore for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<&str> { self.get(key).map(String::as_str) }
}

/// In-memory store snapshot, deserializable from a flat YAML map.
///
/// ```yaml
/// affirmation_text: I am enough.
/// persona_name: Builder
/// theme_name: brutalist
/// ```
///
/// Null values (`~`) are dropped and read back as absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>")]
pub struct MemoryStore(BTreeMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert, mainly for tests and demos.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> { self.0.remove(key) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means an empty store, not a parse failure
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_yaml_str(&yaml)?;
        config_log!(log::Level::Info, "Loaded {} store entries from {}", store.len(), path.display());
        Ok(store)
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<&str> { self.0.get_string(key) }
}

impl From<BTreeMap<String, Option<String>>> for MemoryStore {
    fn from(entries: BTreeMap<String, Option<String>>) -> Self {
        Self(entries.into_iter().filter_map(|(k, v)| Some((k, v?))).collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_string_or_falls_back_only_when_absent() {
        let store = MemoryStore::new().with("present", "value").with("empty", "");
        assert_eq!(store.string_or("present", "fallback"), "value");
        assert_eq!(store.string_or("missing", "fallback"), "fallback");
        assert_eq!(store.string_or("empty", "fallback"), "", "empty string is a stored value");
    }

    #[test]
    fn test_hashmap_store() {
        let map = HashMap::from([("k".to_string(), "v".to_string())]);
        assert_eq!(map.get_string("k"), Some("v"));
        assert_eq!(map.get_string("x"), None);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.insert("a", "1"), None);
        assert_eq!(store.insert("a", "2"), Some("1".to_string()));
        assert_eq!(store.get_string("a"), Some("2"));
        assert_eq!(store.remove("a"), Some("2".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_yaml_str() {
        let store = MemoryStore::from_yaml_str("affirmation_text: I am enough.\npersona_name: Builder\n").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_string("persona_name"), Some("Builder"));
    }

    #[test]
    fn test_null_yaml_values_are_absent() {
        let store = MemoryStore::from_yaml_str("affirmation_text: ~\npersona_name: null\ntheme_name: brutalist\n").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_string("affirmation_text"), None);
        assert_eq!(store.string_or("persona_name", "DELUSIONS"), "DELUSIONS");
        assert_eq!(store.get_string("theme_name"), Some("brutalist"));
    }

    #[test]
    fn test_empty_yaml_is_empty_store() {
        assert!(MemoryStore::from_yaml_str("").unwrap().is_empty());
        assert!(MemoryStore::from_yaml_str("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_non_map_yaml_is_an_error() {
        assert!(matches!(MemoryStore::from_yaml_str("- a\n- b\n"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme_name: brutalist").unwrap();
        let store = MemoryStore::from_yaml_file(file.path()).unwrap();
        assert_eq!(store.get_string("theme_name"), Some("brutalist"));
    }

    #[test]
    fn test_collect_into_store() {
        let store: MemoryStore = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_string("b"), Some("2"));
    }
}
