// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fold display names into a comparable ASCII form for searching.

/// Fold a name for case- and accent-insensitive matching.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Ō" → "O").
/// - Lowercase ASCII letters.
/// - Collapse runs of whitespace into a single space and trim the ends.
pub fn fold_name(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());
    let mut pending_space = false;

    for ch in transliterated.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}
