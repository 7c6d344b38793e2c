/// Normalized form used by every name comparison.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive name match between a candidate and an existing entry.
///
/// True when either normalized string contains the other, or when the first
/// whitespace-delimited token of `candidate` occurs inside `existing`.
/// Quantity and unit noise must be stripped from `candidate` beforehand.
/// Blank names never match anything.
pub fn matches(candidate: &str, existing: &str) -> bool {
    let candidate = normalize(candidate);
    let existing = normalize(existing);

    if candidate.is_empty() || existing.is_empty() {
        return false;
    }

    if candidate.contains(&existing) || existing.contains(&candidate) {
        return true;
    }

    candidate
        .split_whitespace()
        .next()
        .is_some_and(|token| existing.contains(token))
}
