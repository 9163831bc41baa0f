//! JSON file persistence for the user dictionary.
//!
//! The dictionary lives as a plain JSON object in the platform config
//! directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | Windows  | `%APPDATA%\tailo-input\user-dict.json` |
//! | macOS    | `~/Library/Application Support/tailo-input/user-dict.json` |
//! | Linux    | `~/.config/tailo-input/user-dict.json` |
//!
//! Persistence is host-facing plumbing: every core operation still works on
//! the plain [`UserDict`] value this store hands out.

use std::path::PathBuf;

use super::{DictError, UserDict};
use crate::config::AppPaths;

// ---------------------------------------------------------------------------
// DictStore
// ---------------------------------------------------------------------------

/// Owns a [`UserDict`] together with the file path it round-trips through.
pub struct DictStore {
    dict: UserDict,
    path: PathBuf,
}

impl DictStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Load the dictionary from the platform config directory, or return an
    /// empty one when the file does not exist yet.
    pub fn load_or_default() -> Self {
        Self::load_from(AppPaths::new().user_dict_file)
    }

    /// Load from an explicit path (useful for tests).
    ///
    /// A missing or unreadable file yields an empty dictionary — first-run
    /// and corruption both degrade to "start fresh" rather than failing.
    pub fn load_from(path: PathBuf) -> Self {
        let dict = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("dictionary file {} is malformed ({e}); starting empty", path.display());
                UserDict::new()
            }),
            Err(_) => UserDict::new(),
        };
        Self { dict, path }
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The in-memory dictionary.
    pub fn dict(&self) -> &UserDict {
        &self.dict
    }

    /// Mutable access; call [`save`](DictStore::save) afterwards to persist.
    pub fn dict_mut(&mut self) -> &mut UserDict {
        &mut self.dict
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write the dictionary to its file, creating parent directories as
    /// needed.
    pub fn save(&self) -> Result<(), DictError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.dict)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
