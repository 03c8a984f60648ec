//! Deterministic initials and palette derivation from a display name.

use xxhash_rust::xxh3::xxh3_64_with_seed;

// Fixed seed so palette assignment is stable across runs and platforms.
const XXH3_SEED: u64 = 0x6d6f6e6f6772616d;

/// Initials shown in the placeholder: the first character of each of the
/// first two whitespace-separated words, uppercased.
///
/// Empty or whitespace-only names fall back to `"?"`.
pub fn initials(display_name: &str) -> String {
    let mut out = String::new();
    for word in display_name.split_whitespace().take(2) {
        if let Some(c) = word.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    if out.is_empty() {
        out.push('?');
    }
    out
}

/// Stable palette slot for a display name.
///
/// `len` must be non-zero; callers guard against empty palettes.
pub fn palette_slot(display_name: &str, len: usize) -> usize {
    (xxh3_64_with_seed(display_name.as_bytes(), XXH3_SEED) % len as u64) as usize
}
