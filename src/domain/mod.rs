//! Curated domain phrases (songs, stocks, proper nouns).
//!
//! * [`DomainEntry`] — one curated (label, aliases) record.
//! * [`BUILTIN_ENTRIES`] — the compiled-in phrase list.
//! * [`DomainIndex`] — normalized-key lookup over the entries, plus the
//!   literal bias-phrase list handed to the external recognizer.

pub mod entry;
pub mod index;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use entry::{BUILTIN_ENTRIES, DomainEntry};
pub use index::DomainIndex;
