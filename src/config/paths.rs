//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + user dictionary):
//!   Windows: %APPDATA%\tailo-input\
//!   macOS:   ~/Library/Application Support/tailo-input/
//!   Linux:   ~/.config/tailo-input/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `user-dict.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `user-dict.json`.
    pub user_dict_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "tailo-input";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let user_dict_file = config_dir.join("user-dict.json");

        Self {
            config_dir,
            settings_file,
            user_dict_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .user_dict_file
            .file_name()
            .is_some_and(|n| n == "user-dict.json"));
    }
}
