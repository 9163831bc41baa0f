//! Text normalization for dictionary comparison keys.
//!
//! Transcripts arrive with inconsistent casing, spacing and punctuation
//! ("江蕙  酒後的心聲!" vs "江蕙酒後的心聲"), so dictionary lookups never
//! compare raw strings. [`normalize`] reduces both sides to a shared key
//! space first.

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Canonicalize `s` into a comparison key.
///
/// # Rules
///
/// 1. Lower-case.
/// 2. Keep only Unicode letters and digits — whitespace, punctuation,
///    symbols and combining marks are all dropped.
///
/// The letter/digit test must be Unicode-aware ([`char::is_alphanumeric`]),
/// not ASCII-only: Hanji have to survive normalization.
///
/// Total and deterministic; the empty string maps to itself.
///
/// # Examples
///
/// ```
/// use tailo_input::text::normalize;
///
/// assert_eq!(normalize("江蕙  酒後的心聲!"), "江蕙酒後的心聲");
/// assert_eq!(normalize("Tâi-uân 0050"), "tâiuân0050");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
