//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// RecognizerConfig
// ---------------------------------------------------------------------------

/// Settings handed to the external speech-recognition collaborator.
///
/// These mirror the Google Cloud Speech `RecognitionConfig` fields the
/// recognizer request is built from; the crate itself performs no network
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Audio encoding identifier (e.g. `"WEBM_OPUS"`).
    pub encoding: String,
    /// Sample rate of the uploaded audio in Hz.
    pub sample_rate_hertz: u32,
    /// BCP-47 language code. Taiwanese Mandarin (`cmn-Hant-TW`) gives the
    /// best results for mixed Hokkien/Mandarin speech.
    pub language_code: String,
    /// Recognition model; `command_and_search` suits short spoken keywords.
    pub model: String,
    /// Use the enhanced model when the language/region supports it.
    pub use_enhanced: bool,
    /// Boost applied to the domain bias phrases (useful range ~5–20).
    pub phrase_boost: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            encoding: "WEBM_OPUS".into(),
            sample_rate_hertz: 48_000,
            language_code: "cmn-Hant-TW".into(),
            model: "command_and_search".into(),
            use_enhanced: true,
            phrase_boost: 12.0,
        }
    }
}

// ---------------------------------------------------------------------------
// DictionaryConfig
// ---------------------------------------------------------------------------

/// Settings for the user override dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Explicit dictionary file path — `None` means the platform default
    /// (`user-dict.json` in the config directory).
    pub file: Option<PathBuf>,
}

impl DictionaryConfig {
    /// Resolve the dictionary file path, honoring the override.
    pub fn resolved_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| AppPaths::new().user_dict_file)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use tailo_input::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// External recognizer settings.
    pub recognizer: RecognizerConfig,
    /// User dictionary settings.
    pub dictionary: DictionaryConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet — first-run
    /// detection.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    /// Verify the recognizer defaults match what the hosted tool sends.
    #[test]
    fn default_recognizer_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.recognizer.encoding, "WEBM_OPUS");
        assert_eq!(cfg.recognizer.sample_rate_hertz, 48_000);
        assert_eq!(cfg.recognizer.language_code, "cmn-Hant-TW");
        assert_eq!(cfg.recognizer.model, "command_and_search");
        assert!(cfg.recognizer.use_enhanced);
        assert_eq!(cfg.recognizer.phrase_boost, 12.0);
        assert!(cfg.dictionary.file.is_none());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.recognizer.language_code = "nan-Hant-TW".into();
        cfg.recognizer.phrase_boost = 8.0;
        cfg.recognizer.use_enhanced = false;
        cfg.dictionary.file = Some(dir.path().join("custom-dict.json"));

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn dictionary_path_override_is_honored() {
        let mut cfg = DictionaryConfig::default();
        cfg.file = Some(PathBuf::from("/tmp/dict.json"));
        assert_eq!(cfg.resolved_file(), PathBuf::from("/tmp/dict.json"));
    }
}
