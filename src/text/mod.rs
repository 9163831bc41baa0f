//! Text processing for Tâi-lô input.
//!
//! * [`normalize`] — canonicalizes a string into a comparison key.
//! * [`transliterate`] — best-effort Tâi-lô → Hanji rendering (user
//!   overrides first, then the built-in rule table).
//! * [`rules`] — the fixed, ordered built-in substitution table.

pub mod normalize;
pub mod rules;
pub mod translit;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use normalize::normalize;
pub use translit::transliterate;
