// crates/devicedb-core/src/text.rs

/// Lowercased form used for query matching.
///
/// Unicode-aware lowercasing only; CJK text passes through unchanged.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test against an already folded needle.
///
/// An empty needle matches everything.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_key(haystack).contains(folded_needle)
}
