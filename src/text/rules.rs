//! Built-in Tâi-lô → Hanji substitution rules.
//!
//! The table is an *ordered* sequence: every rule after the first observes
//! text already rewritten by the rules before it, so precedence is encoded
//! purely by position. Invariant: a more specific pattern (multi-word
//! idiom) must precede every general pattern it contains, otherwise the
//! general rule would consume the span first ("Lí" firing before
//! "Lí chia̍h pá bē" would leave "你 chia̍h pá bē" behind). The
//! `ordering_invariant` test below pins this down against accidental
//! reordering.
//!
//! Matching is case-insensitive and literal — patterns are escaped before
//! compilation, nothing here is a free-form regex.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// A single substitution rule: literal Tâi-lô pattern → Hanji replacement.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Literal Tâi-lô pattern, matched case-insensitively.
    pub pattern: &'static str,
    /// Hanji replacement text.
    pub hanji: &'static str,
}

/// The fixed rule table, most specific first.
pub static RULES: &[Rule] = &[
    // Multi-word idioms
    Rule { pattern: "Lí chia̍h pá bē", hanji: "你食飽未" },
    Rule { pattern: "Lí beh khì Tâi-pak", hanji: "你欲去台北" },
    Rule { pattern: "Lí hó", hanji: "你好" },
    Rule { pattern: "tsài-ji̍t", hanji: "昨日" },
    Rule { pattern: "tsin hó", hanji: "很好" },
    Rule { pattern: "tsit ê", hanji: "一個" },
    Rule { pattern: "tsia̍h-pn̄g", hanji: "食飯" },
    // Single morphemes
    Rule { pattern: "Lí", hanji: "你" },
    Rule { pattern: "Góa", hanji: "我" },
    Rule { pattern: "iáu-sī", hanji: "猶是" },
    Rule { pattern: "beh", hanji: "欲" },
    Rule { pattern: "bē", hanji: "未" },
    Rule { pattern: "bô", hanji: "無" },
    Rule { pattern: "khì", hanji: "去" },
    Rule { pattern: "lâi", hanji: "來" },
    Rule { pattern: "tsia̍h", hanji: "食" },
    Rule { pattern: "pn̄g", hanji: "飯" },
    Rule { pattern: "pá", hanji: "飽" },
    Rule { pattern: "hó", hanji: "好" },
    Rule { pattern: "tio̍h", hanji: "著" },
    Rule { pattern: "kuì", hanji: "過" },
    Rule { pattern: "sió", hanji: "小" },
    Rule { pattern: "lāu-lâng", hanji: "老人" },
    Rule { pattern: "lāu-lōo", hanji: "老爺" },
    Rule { pattern: "lāu-bú", hanji: "老母" },
    Rule { pattern: "tshù", hanji: "家" },
    Rule { pattern: "tī", hanji: "佇" },
    Rule { pattern: "hāi", hanji: "海" },
    Rule { pattern: "Tâi-pak", hanji: "台北" },
    Rule { pattern: "Tâi-uân", hanji: "台灣" },
];

// ---------------------------------------------------------------------------
// Compiled matchers
// ---------------------------------------------------------------------------

/// Rule patterns compiled once, in table order.
static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let re = RegexBuilder::new(&regex::escape(rule.pattern))
                .case_insensitive(true)
                .build()
                .expect("escaped literal pattern must compile");
            (re, rule.hanji)
        })
        .collect()
});

/// Apply the built-in rule table to `text`, in order, each rule globally.
///
/// Text matching no rule passes through unchanged.
pub fn apply_builtin_rules(text: &str) -> String {
    let mut s = text.to_string();
    for (re, hanji) in COMPILED.iter() {
        if re.is_match(&s) {
            s = re.replace_all(&s, *hanji).into_owned();
        }
    }
    s
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_idiom_fires_before_fragments() {
        // "Lí", "pá" and "bē" all have single-token rules; the idiom rule
        // must consume the whole span first.
        assert_eq!(apply_builtin_rules("Lí chia̍h pá bē"), "你食飽未");
    }

    #[test]
    fn single_morphemes_apply_globally() {
        // Token-by-token rules leave the separating spaces in place; only
        // the multi-word idiom rules swallow them.
        assert_eq!(apply_builtin_rules("Góa beh khì Tâi-pak"), "我 欲 去 台北");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(apply_builtin_rules("lí hó"), "你好");
        assert_eq!(apply_builtin_rules("LÍ HÓ"), "你好");
    }

    #[test]
    fn unmatched_text_passes_through() {
        assert_eq!(apply_builtin_rules("完全不相關的句子"), "完全不相關的句子");
        assert_eq!(apply_builtin_rules(""), "");
    }

    #[test]
    fn mixed_matched_and_unmatched() {
        assert_eq!(apply_builtin_rules("Góa 想聽歌"), "我 想聽歌");
    }

    /// No earlier pattern may be a strict case-insensitive substring of a
    /// later pattern: the earlier rule would rewrite the later rule's span
    /// before it could ever match.
    #[test]
    fn ordering_invariant() {
        for (i, earlier) in RULES.iter().enumerate() {
            let earlier_lc = earlier.pattern.to_lowercase();
            for later in &RULES[i + 1..] {
                let later_lc = later.pattern.to_lowercase();
                assert!(
                    !later_lc.contains(&earlier_lc),
                    "rule {:?} precedes {:?} but is contained in it",
                    earlier.pattern,
                    later.pattern,
                );
            }
        }
    }
}
