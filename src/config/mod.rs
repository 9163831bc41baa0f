//! Configuration: TOML settings and platform paths.

pub mod paths;
pub mod settings;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use paths::AppPaths;
pub use settings::{AppConfig, DictionaryConfig, RecognizerConfig};
