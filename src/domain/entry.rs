//! Domain entry type and the built-in curated list.
//!
//! Each entry pairs the canonical Hanji label (what gets displayed and
//! searched) with the spoken forms a recognizer is likely to return for
//! it. The list is compiled in; extend it here.

// ---------------------------------------------------------------------------
// DomainEntry
// ---------------------------------------------------------------------------

/// A curated domain phrase: canonical label plus alternate spoken forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Opaque identifier, unique within the list.
    pub key: &'static str,
    /// Canonical display text (Hanji).
    pub label: &'static str,
    /// Alternate spoken forms, in declaration order.
    pub aliases: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Built-in entries
// ---------------------------------------------------------------------------

/// The compiled-in domain list: Taiwanese songs, then stocks and ETFs.
pub static BUILTIN_ENTRIES: &[DomainEntry] = &[
    DomainEntry {
        key: "jody-wine",
        label: "江蕙 酒後的心聲",
        aliases: &["江蕙 酒後的心聲", "酒後的心聲", "江蕙的酒後的心聲"],
    },
    DomainEntry {
        key: "huang-y-ling",
        label: "黃乙玲 無字的情批",
        aliases: &["黃乙玲 無字的情批", "無字的情批"],
    },
    DomainEntry {
        key: "taiwan-hero",
        label: "洪榮宏 舞女",
        aliases: &["洪榮宏 舞女", "舞女"],
    },
    DomainEntry {
        key: "tsmc",
        label: "台積電 股票",
        aliases: &["台積電", "2330", "台積電股票"],
    },
    DomainEntry {
        key: "0050",
        label: "元大台灣50 ETF 0050",
        aliases: &["0050", "台灣50", "元大台灣50"],
    },
    DomainEntry {
        key: "006208",
        label: "富邦台50 ETF 006208",
        aliases: &["006208", "富邦台50"],
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
