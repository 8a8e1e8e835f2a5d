pub mod expander;

/// Splits a raw input line into word tokens. Tokens are maximal runs of
/// non-whitespace characters; there is no quoting or escaping, so a token
/// boundary is purely whitespace-determined. An empty or all-whitespace line
/// yields no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(tokenize("echo hi"), vec!["echo", "hi"]);
    }

    #[test]
    fn test_collapses_repeated_whitespace() {
        assert_eq!(tokenize("a  b   c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("a\t\tb \t c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trims_leading_and_trailing() {
        assert_eq!(tokenize("  ls -l  "), vec!["ls", "-l"]);
    }

    #[test]
    fn test_blank_lines_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }
}
