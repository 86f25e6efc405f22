//! Alias resolution for free-form enumerated settings.
//!
//! Historic parameter files accept loose spellings for enumerated
//! fields ("fd", "FD", "fully_dynamic", ...). Matching is by
//! case-sensitive substring against an ordered category table, and the
//! table is always scanned to the end: each matching category
//! overwrites the tentative result, so the last declared match wins.
//! That precedence is load-bearing, e.g. a raw value containing both
//! "qs" and "qsd" must resolve to the debug variant.

/// One category of an ordered alias table.
#[derive(Debug, Clone, Copy)]
pub struct AliasCategory<T> {
    /// Substrings that select this category.
    pub aliases: &'static [&'static str],
    /// Value assigned when any alias matches.
    pub value: T,
}

/// Resolve `raw` against an ordered alias table, last match wins.
///
/// Returns `None` when no category matches, so the caller keeps its
/// default. Never scans the table partially.
pub fn resolve_ordered<T: Copy>(raw: &str, table: &[AliasCategory<T>]) -> Option<T> {
    let mut resolved = None;
    for category in table {
        if category.aliases.iter().any(|alias| raw.contains(alias)) {
            resolved = Some(category.value);
        }
    }
    resolved
}

/// Two-way classifier for yes/no style flags.
///
/// True iff the raw string contains `y` or `Y`; only meaningful when
/// the key was present at all (absent keys keep their default).
pub fn resolve_yes_no(raw: &str) -> bool {
    raw.contains('y') || raw.contains('Y')
}
