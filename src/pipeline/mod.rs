//! Transcript → Hanji processing pipeline.
//!
//! Composition of the core pieces, in the order the hosted tool applies
//! them: the raw transcript is transliterated (user overrides, then
//! built-in rules) into a fallback Hanji rendering, and the domain resolver
//! gets the final say — a curated entry matched against the raw transcript
//! replaces the rule-based rendering wholesale.
//!
//! Everything here is synchronous and pure apart from logging; sequencing
//! after an asynchronous recognition call is the caller's concern.

use crate::dict::UserDict;
use crate::domain::DomainIndex;
use crate::text::transliterate;

// ---------------------------------------------------------------------------
// Recognition
// ---------------------------------------------------------------------------

/// Result of processing one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// The raw transcript, unchanged (displayed as the Tâi-lô line).
    pub tailo: String,
    /// The final Hanji rendering.
    pub hanji: String,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Owns the domain index; the user dictionary is borrowed per call so the
/// caller keeps ownership of its mutable state.
pub struct Pipeline {
    index: DomainIndex,
}

impl Pipeline {
    /// Pipeline over the built-in domain entries.
    pub fn new() -> Self {
        Self {
            index: DomainIndex::builtin(),
        }
    }

    /// Pipeline over an explicit index (useful for tests and custom lists).
    pub fn with_index(index: DomainIndex) -> Self {
        Self { index }
    }

    /// The domain index, e.g. for building the recognizer request.
    pub fn index(&self) -> &DomainIndex {
        &self.index
    }

    /// Process one raw transcript into its display strings.
    pub fn process(&self, transcript: &str, dict: &UserDict) -> Recognition {
        let fallback = transliterate(transcript, dict);
        let hanji = self.index.choose_hanji(transcript, &fallback);

        if hanji != fallback {
            log::debug!("domain override: {transcript:?} -> {hanji:?}");
        }

        Recognition {
            tailo: transcript.to_string(),
            hanji,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
