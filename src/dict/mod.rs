//! User override dictionary: literal Tâi-lô substrings → literal Hanji.
//!
//! The dictionary is an explicit value owned by the caller — there is no
//! process-wide singleton. Core operations mutate the value in place;
//! persistence ([`store`]) and delimited-text exchange ([`csv`]) are thin
//! layers on top of the same plain mapping.
//!
//! * [`UserDict`] — the mapping plus merge operations and JSON import.
//! * [`DictError`] — validation/persistence error variants.
//! * [`store::DictStore`] — JSON file persistence in the config directory.
//! * [`csv`] — two-column delimited-text import/export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod csv;
pub mod store;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use store::DictStore;

// ---------------------------------------------------------------------------
// DictError
// ---------------------------------------------------------------------------

/// Errors raised by dictionary import and persistence.
///
/// "No match" conditions are never errors anywhere in this crate; only
/// structurally invalid payloads and I/O failures surface here.
#[derive(Debug, Error)]
pub enum DictError {
    /// Structured import payload is not a string→string mapping.
    #[error("invalid import payload: {0}")]
    InvalidImport(String),

    /// Reading or writing the dictionary file failed.
    #[error("dictionary file error: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary file holds malformed JSON.
    #[error("dictionary JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// UserDict
// ---------------------------------------------------------------------------

/// The user-maintained Tâi-lô → Hanji override mapping.
///
/// Keys are exact, case-sensitive literals chosen by the user — they are
/// deliberately *not* normalized. Keys may be substrings of each other;
/// the transliteration engine resolves that by longest-key-first
/// application.
///
/// Serializes transparently as a plain JSON object, which is also the
/// structured import/export format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDict(HashMap<String, String>);

impl UserDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hanji value for an exact key, if present.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    /// Iterator over the keys (arbitrary order).
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// All entries sorted by key — the stable order used for listing and
    /// delimited-text export.
    pub fn sorted_entries(&self) -> Vec<(&String, &String)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Insert or overwrite one entry.
    pub fn add_or_update(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    /// Delete an entry; returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    /// Merge every entry of `incoming`, overwriting on key collision.
    /// Existing entries not present in `incoming` are kept. Returns the
    /// number of keys processed.
    pub fn merge_from(&mut self, incoming: HashMap<String, String>) -> usize {
        let count = incoming.len();
        for (key, value) in incoming {
            self.0.insert(key, value);
        }
        count
    }

    // -----------------------------------------------------------------------
    // Structured import
    // -----------------------------------------------------------------------

    /// Merge entries from a JSON object payload.
    ///
    /// Anything other than a top-level object is rejected with
    /// [`DictError::InvalidImport`] and merges nothing. Keys whose value is
    /// not a string are skipped (nesting is not supported); every string
    /// entry merges independently. Returns the number of entries merged.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, DictError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let object = value
            .as_object()
            .ok_or_else(|| DictError::InvalidImport("expected a JSON object".into()))?;

        let mut count = 0;
        for (key, value) in object {
            match value.as_str() {
                Some(hanji) => {
                    self.0.insert(key.clone(), hanji.to_string());
                    count += 1;
                }
                None => {
                    log::warn!("skipping non-string value for key {key:?}");
                }
            }
        }
        Ok(count)
    }

    /// Export as a pretty-printed JSON object.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".into())
    }
}

impl From<HashMap<String, String>> for UserDict {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut dict = UserDict::new();
        assert!(dict.is_empty());

        dict.add_or_update("Lí hó".into(), "你好".into());
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Lí hó"), Some(&"你好".to_string()));

        assert!(dict.remove("Lí hó"));
        assert!(!dict.remove("Lí hó"));
        assert!(dict.is_empty());
    }

    #[test]
    fn add_overwrites_existing_key() {
        let mut dict = UserDict::new();
        dict.add_or_update("k".into(), "v1".into());
        dict.add_or_update("k".into(), "v2".into());

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("k"), Some(&"v2".to_string()));
    }

    #[test]
    fn merge_overwrites_and_keeps_the_rest() {
        let mut dict = UserDict::new();
        dict.add_or_update("k".into(), "v1".into());
        dict.add_or_update("j".into(), "w".into());

        let incoming = HashMap::from([("k".to_string(), "v2".to_string())]);
        assert_eq!(dict.merge_from(incoming), 1);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("k"), Some(&"v2".to_string()));
        assert_eq!(dict.get("j"), Some(&"w".to_string()));
    }

    #[test]
    fn sorted_entries_are_ordered_by_key() {
        let mut dict = UserDict::new();
        dict.add_or_update("b".into(), "2".into());
        dict.add_or_update("a".into(), "1".into());
        dict.add_or_update("c".into(), "3".into());

        let keys: Vec<&str> = dict.sorted_entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    // --- Structured import --------------------------------------------------

    #[test]
    fn import_json_merges_object_entries() {
        let mut dict = UserDict::new();
        let count = dict
            .import_json(r#"{"Lí hó": "你好", "Góa": "我"}"#)
            .expect("valid payload");

        assert_eq!(count, 2);
        assert_eq!(dict.get("Lí hó"), Some(&"你好".to_string()));
    }

    #[test]
    fn import_json_rejects_non_object_payload() {
        let mut dict = UserDict::new();
        dict.add_or_update("keep".into(), "me".into());

        assert!(dict.import_json(r#"["not", "a", "mapping"]"#).is_err());
        assert!(dict.import_json(r#""just a string""#).is_err());

        // Existing entries untouched, nothing merged.
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("keep"), Some(&"me".to_string()));
    }

    #[test]
    fn import_json_rejects_malformed_json() {
        let mut dict = UserDict::new();
        assert!(dict.import_json("{ not json").is_err());
        assert!(dict.is_empty());
    }

    #[test]
    fn import_json_skips_non_string_values() {
        let mut dict = UserDict::new();
        let count = dict
            .import_json(r#"{"ok": "好", "nested": {"x": 1}, "num": 3}"#)
            .expect("object payload");

        assert_eq!(count, 1);
        assert_eq!(dict.get("ok"), Some(&"好".to_string()));
        assert!(dict.get("nested").is_none());
    }

    #[test]
    fn json_round_trip() {
        let mut dict = UserDict::new();
        dict.add_or_update("Lí hó".into(), "你好".into());
        dict.add_or_update("Góa".into(), "我".into());

        let mut reloaded = UserDict::new();
        let count = reloaded.import_json(&dict.export_json()).expect("round trip");

        assert_eq!(count, 2);
        assert_eq!(reloaded, dict);
    }
}
