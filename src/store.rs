//! Abstract key/value persistence consumed by the option tree.
//!
//! The tree reads from a [`SettingsStore`] once at load time and individual
//! options write to it on demand. All lookups are best-effort: a missing key
//! or a type mismatch means "keep the compiled-in default", never an error.

use std::collections::HashMap;

use parking_lot::Mutex;

/// A value as held by a settings store: the three domains options persist.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl StoreValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoreValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoreValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Bool(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Int(value)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Text(value.into())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::Text(value)
    }
}

/// Key/value persistence, namespaced by an optional suite identifier.
///
/// `suite: None` is the default namespace. A suite names an alternate
/// namespace shared across related processes (see
/// [`OptionGroup::with_suite`](crate::OptionGroup::with_suite)).
///
/// Writes are fire-and-forget: implementations log and swallow failures
/// rather than surfacing them, matching the advisory nature of debug state.
pub trait SettingsStore: Send + Sync {
    fn get(&self, suite: Option<&str>, key: &str) -> Option<StoreValue>;

    fn set(&self, suite: Option<&str>, key: &str, value: StoreValue);

    /// Typed lookup; `None` when absent or the stored type doesn't match.
    fn get_bool(&self, suite: Option<&str>, key: &str) -> Option<bool> {
        self.get(suite, key).and_then(|v| v.as_bool())
    }

    fn get_int(&self, suite: Option<&str>, key: &str) -> Option<i64> {
        self.get(suite, key).and_then(|v| v.as_int())
    }

    fn get_text(&self, suite: Option<&str>, key: &str) -> Option<String> {
        self.get(suite, key)
            .and_then(|v| v.as_text().map(str::to_string))
    }
}

/// In-process store backed by a `HashMap`. The default for tests and for
/// embedding the tree without durable persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(Option<String>, String), StoreValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, suite: Option<&str>, key: &str) -> Option<StoreValue> {
        self.entries
            .lock()
            .get(&(suite.map(str::to_string), key.to_string()))
            .cloned()
    }

    fn set(&self, suite: Option<&str>, key: &str, value: StoreValue) {
        self.entries
            .lock()
            .insert((suite.map(str::to_string), key.to_string()), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set(None, "k", StoreValue::Int(42));
        assert_eq!(store.get(None, "k"), Some(StoreValue::Int(42)));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(None, "missing"), None);
    }

    #[test]
    fn suites_are_isolated() {
        let store = MemoryStore::new();
        store.set(None, "k", StoreValue::Bool(true));
        store.set(Some("shared"), "k", StoreValue::Bool(false));
        assert_eq!(store.get_bool(None, "k"), Some(true));
        assert_eq!(store.get_bool(Some("shared"), "k"), Some(false));
        assert_eq!(store.get_bool(Some("other"), "k"), None);
    }

    #[test]
    fn typed_helpers_reject_mismatched_types() {
        let store = MemoryStore::new();
        store.set(None, "k", StoreValue::Text("not a bool".into()));
        assert_eq!(store.get_bool(None, "k"), None);
        assert_eq!(store.get_int(None, "k"), None);
        assert_eq!(store.get_text(None, "k").as_deref(), Some("not a bool"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set(None, "k", StoreValue::Bool(false));
        store.set(None, "k", StoreValue::Bool(true));
        assert_eq!(store.get_bool(None, "k"), Some(true));
    }

    #[test]
    fn store_value_conversions() {
        assert_eq!(StoreValue::from(true), StoreValue::Bool(true));
        assert_eq!(StoreValue::from(3i64), StoreValue::Int(3));
        assert_eq!(StoreValue::from("x"), StoreValue::Text("x".into()));
    }
}
