//! Line splitting for recognized text.

/// Split raw recognized text into trimmed lines.
///
/// Empty lines are retained in sequence so callers keep line-number semantics;
/// filter them out where needed. Empty input yields an empty sequence.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_keeps_empty_lines() {
        let lines = split_lines("  REWE  \n\n\t1,99 EUR ");
        assert_eq!(lines, vec!["REWE", "", "1,99 EUR"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_lines("").is_empty());
    }
}
