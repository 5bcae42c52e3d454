//! Keyword list handling.

/// Split a comma-separated keyword list, dropping blanks and
/// case-insensitive duplicates. First spelling wins.
pub fn parse_keywords(input: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .map(str::to_string)
        .collect()
}
