use std::collections::HashSet;

/// Wraps a user search term in `%…%` for a `LIKE … ESCAPE '\'` clause,
/// escaping the LIKE wildcards it contains.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Drops duplicate ids while keeping first-seen order.
pub fn dedup_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
