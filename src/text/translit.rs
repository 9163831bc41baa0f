//! The Tâi-lô → Hanji transliteration engine.
//!
//! Two passes, in strict order:
//!
//! 1. The user's override dictionary — longest key first, **case-sensitive**
//!    literal replacement (the user entered the exact casing themselves).
//! 2. The built-in rule table ([`super::rules`]) — case-insensitive, fixed
//!    order.
//!
//! Pure best-effort string transform: it never fails, and text matching
//! neither an override nor a rule passes through unchanged (possibly still
//! romanized).

use crate::dict::UserDict;

use super::rules::apply_builtin_rules;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a best-effort Hanji transliteration of `text`.
///
/// Override keys are applied longest first so that a longer override is not
/// pre-empted by a shorter one that happens to be a substring of it. Empty
/// keys are skipped (a degenerate replace-at-every-position otherwise).
///
/// # Examples
///
/// ```
/// use tailo_input::dict::UserDict;
/// use tailo_input::text::transliterate;
///
/// let dict = UserDict::new();
/// assert_eq!(transliterate("Lí chia̍h pá bē", &dict), "你食飽未");
/// ```
pub fn transliterate(text: &str, overrides: &UserDict) -> String {
    let mut s = text.to_string();

    // Pass 1: user overrides, longest key first. Equal lengths are ordered
    // lexicographically so the pass is deterministic.
    let mut keys: Vec<&String> = overrides.keys().filter(|k| !k.is_empty()).collect();
    keys.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    for key in keys {
        if s.contains(key.as_str()) {
            s = s.replace(key.as_str(), overrides.get(key).map_or("", |v| v.as_str()));
        }
    }

    // Pass 2: built-in rule table.
    apply_builtin_rules(&s)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
