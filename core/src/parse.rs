//! Comma-separated input handling.

/// Split `input` on commas, trim each segment and drop the empty ones.
///
/// Order is preserved and duplicates are kept. Never fails.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
