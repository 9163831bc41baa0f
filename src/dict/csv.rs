//! Two-column delimited-text exchange format for the user dictionary.
//!
//! Columns are `tailo,hanji`. Export always emits the header and
//! double-quotes every field with `""`-escaped internal quotes; import also
//! accepts bare (unquoted) fields and a missing header. Each row merges
//! independently — a malformed row is skipped, never fatal.

use super::UserDict;

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serialize `dict` as delimited text, sorted by key.
///
/// Header row `tailo,hanji`, then one `"key","value"` row per entry with
/// internal `"` doubled, rows joined with CRLF.
pub fn export_csv(dict: &UserDict) -> String {
    let mut lines = vec!["tailo,hanji".to_string()];
    for (key, value) in dict.sorted_entries() {
        lines.push(format!("\"{}\",\"{}\"", escape(key), escape(value)));
    }
    lines.join("\r\n")
}

fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Merge rows of delimited `text` into `dict`; returns rows merged.
///
/// * A first line containing both column names (case-insensitive) is
///   treated as a header and skipped.
/// * Rows with fewer than two fields are skipped.
/// * Rows whose first field is empty after trimming are skipped.
/// * On key collision the imported value overwrites the existing one.
pub fn import_csv(dict: &mut UserDict, text: &str) -> usize {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut count = 0;
    let mut first = true;

    for line in &mut lines {
        if first {
            first = false;
            if is_header(line) {
                continue;
            }
        }

        let fields = parse_row(line);
        if fields.len() < 2 {
            log::warn!("skipping malformed dictionary row: {line:?}");
            continue;
        }

        let tailo = fields[0].trim();
        if tailo.is_empty() {
            continue;
        }

        dict.add_or_update(tailo.to_string(), fields[1].trim().to_string());
        count += 1;
    }

    count
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("tailo") && lower.contains("hanji")
}

/// Split one row into fields, honoring double-quoted fields with embedded
/// commas and `""` escapes.
fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
