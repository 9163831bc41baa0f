//! Normalized-key index over the domain entries.
//!
//! Built once, read-only afterwards. Lookup recovers the curated entry from
//! a noisy transcript: voice input about a song or stock usually carries
//! filler words ("我想聽…那首歌"), so after an exact-match attempt the
//! resolver falls back to longest-contained-key matching.

use std::collections::HashMap;

use super::entry::{BUILTIN_ENTRIES, DomainEntry};
use crate::text::normalize;

// ---------------------------------------------------------------------------
// DomainIndex
// ---------------------------------------------------------------------------

/// Immutable lookup structure over a slice of [`DomainEntry`]s.
///
/// # Construction rules
///
/// * Every label and alias contributes one `(normalized key → entry)` pair;
///   keys that normalize to the empty string are skipped.
/// * Two keys normalizing identically are **last-write-wins by declaration
///   order**: the later pair replaces the earlier pair's entry while
///   keeping its original scan position.
/// * The literal (non-normalized) labels and aliases are collected,
///   de-duplicated and kept in declaration order as
///   [`bias_phrases`](Self::bias_phrases) for the recognizer configuration.
pub struct DomainIndex {
    entries: &'static [DomainEntry],
    /// `(normalized key, entry index)` in declaration order — scanned for
    /// substring matches, so order is the documented tie-break.
    keys: Vec<(String, usize)>,
    /// Same mapping as `keys`, for O(1) exact lookup.
    exact: HashMap<String, usize>,
    /// De-duplicated literal labels + aliases, declaration order.
    phrases: Vec<&'static str>,
}

impl DomainIndex {
    /// Build an index over `entries`.
    pub fn new(entries: &'static [DomainEntry]) -> Self {
        let mut keys: Vec<(String, usize)> = Vec::new();
        let mut exact: HashMap<String, usize> = HashMap::new();
        let mut phrases: Vec<&'static str> = Vec::new();

        let insert = |keys: &mut Vec<(String, usize)>,
                      exact: &mut HashMap<String, usize>,
                      literal: &'static str,
                      idx: usize| {
            let norm = normalize(literal);
            if norm.is_empty() {
                return;
            }
            match exact.get(&norm) {
                Some(&existing) if existing == idx => {}
                Some(_) => {
                    // Last write wins; the slot keeps its scan position.
                    if let Some(slot) = keys.iter_mut().find(|(k, _)| *k == norm) {
                        slot.1 = idx;
                    }
                    exact.insert(norm, idx);
                }
                None => {
                    keys.push((norm.clone(), idx));
                    exact.insert(norm, idx);
                }
            }
        };

        for (idx, entry) in entries.iter().enumerate() {
            insert(&mut keys, &mut exact, entry.label, idx);
            if !phrases.contains(&entry.label) {
                phrases.push(entry.label);
            }
            for &alias in entry.aliases {
                insert(&mut keys, &mut exact, alias, idx);
                if !phrases.contains(&alias) {
                    phrases.push(alias);
                }
            }
        }

        log::debug!(
            "domain index built: {} entries, {} normalized keys, {} bias phrases",
            entries.len(),
            keys.len(),
            phrases.len(),
        );

        Self { entries, keys, exact, phrases }
    }

    /// Index over the compiled-in entry list.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ENTRIES)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Resolve `raw` to a curated entry, or `None`.
    ///
    /// 1. Normalize; an empty result resolves to nothing.
    /// 2. Exact key hit wins, regardless of other candidates' length.
    /// 3. Otherwise the longest key *contained in* the normalized input
    ///    wins; equal lengths resolve to the first-declared key.
    pub fn resolve(&self, raw: &str) -> Option<&DomainEntry> {
        let norm = normalize(raw);
        if norm.is_empty() {
            return None;
        }

        if let Some(&idx) = self.exact.get(&norm) {
            return Some(&self.entries[idx]);
        }

        let mut best: Option<(&str, usize)> = None;
        for (key, idx) in &self.keys {
            if norm.contains(key.as_str()) {
                let longer = best.map_or(true, |(bk, _)| key.len() > bk.len());
                if longer {
                    best = Some((key.as_str(), *idx));
                }
            }
        }

        best.map(|(_, idx)| &self.entries[idx])
    }

    /// Return the matched entry's label, or `fallback` unchanged.
    pub fn choose_hanji(&self, raw: &str, fallback: &str) -> String {
        match self.resolve(raw) {
            Some(entry) if !entry.label.is_empty() => entry.label.to_string(),
            _ => fallback.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Recognizer configuration
    // -----------------------------------------------------------------------

    /// Literal bias phrases for the external recognizer, de-duplicated, in
    /// declaration order.
    pub fn bias_phrases(&self) -> &[&'static str] {
        &self.phrases
    }
}

impl Default for DomainIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_takes_precedence() {
        let index = DomainIndex::builtin();
        // "0050" is an exact alias of the Yuanta ETF entry; the longer
        // alias "元大台灣50" must not shadow it.
        let entry = index.resolve("0050").expect("should match");
        assert_eq!(entry.key, "0050");
    }

    #[test]
    fn longest_substring_wins() {
        let index = DomainIndex::builtin();
        let entry = index
            .resolve("我想聽 江蕙 酒後的心聲 那首歌")
            .expect("should match");
        assert_eq!(entry.key, "jody-wine");
    }

    #[test]
    fn substring_match_survives_filler_words() {
        let index = DomainIndex::builtin();
        let entry = index.resolve("幫我查一下台積電好無").expect("should match");
        assert_eq!(entry.key, "tsmc");
    }

    #[test]
    fn no_match_returns_none() {
        let index = DomainIndex::builtin();
        assert!(index.resolve("完全不相關的句子").is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        let index = DomainIndex::builtin();
        assert!(index.resolve("").is_none());
        assert!(index.resolve("  ！？  ").is_none());
    }

    #[test]
    fn choose_hanji_prefers_label() {
        let index = DomainIndex::builtin();
        assert_eq!(
            index.choose_hanji("我想聽 酒後的心聲", "fallback"),
            "江蕙 酒後的心聲",
        );
    }

    #[test]
    fn choose_hanji_falls_back_unchanged() {
        let index = DomainIndex::builtin();
        assert_eq!(index.choose_hanji("完全不相關的句子", "fallback"), "fallback");
    }

    #[test]
    fn bias_phrases_are_deduplicated_in_declaration_order() {
        let index = DomainIndex::builtin();
        let phrases = index.bias_phrases();

        // "江蕙 酒後的心聲" is both the label and the first alias of the
        // first entry: it must appear exactly once, first.
        assert_eq!(phrases[0], "江蕙 酒後的心聲");
        assert_eq!(
            phrases.iter().filter(|p| **p == "江蕙 酒後的心聲").count(),
            1,
        );

        // No duplicates anywhere.
        for (i, a) in phrases.iter().enumerate() {
            for b in &phrases[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // --- Collision and tie-break behavior, pinned with a custom list -------

    static COLLIDING: &[DomainEntry] = &[
        DomainEntry {
            key: "first",
            label: "第一版 心事誰人知",
            aliases: &["心事誰人知"],
        },
        DomainEntry {
            key: "second",
            label: "第二版",
            // Normalizes identically to the first entry's alias.
            aliases: &["心事 誰人知"],
        },
    ];

    /// Two keys normalizing identically: the later declaration wins.
    #[test]
    fn normalized_key_collision_is_last_write_wins() {
        let index = DomainIndex::new(COLLIDING);
        let entry = index.resolve("心事誰人知").expect("should match");
        assert_eq!(entry.key, "second");
    }

    static EQUAL_LENGTH: &[DomainEntry] = &[
        DomainEntry { key: "a", label: "歌仔戲", aliases: &[] },
        DomainEntry { key: "b", label: "布袋戲", aliases: &[] },
    ];

    /// Equal-length substring candidates: first-declared key wins.
    #[test]
    fn equal_length_tie_resolves_to_first_declared() {
        let index = DomainIndex::new(EQUAL_LENGTH);
        let entry = index.resolve("我欲看歌仔戲佮布袋戲").expect("should match");
        assert_eq!(entry.key, "a");
    }
}
