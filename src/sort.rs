use std::cmp::Ordering;

use crate::entry::Entry;

/// Byte-wise comparison after folding ASCII letters to upper case. A name
/// that is a prefix of another sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

/// Stable: names equal under folding keep their enumeration order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}
