//! # Search Patterns
//!
//! Builds the `REGEXP` pattern used for case-insensitive substring search.
//!
//! ## Pattern Shape
//! ```text
//! term "lee"      →  "(?i)lee"
//! term ""         →  "(?i)"          (matches every row)
//! term "MÜLLER"   →  "(?i)MÜLLER"    (Unicode case folding)
//! term "50%.x"    →  "(?i)50%\.x"    (metacharacters matched literally)
//! ```
//!
//! The store evaluates the pattern with the `regex` crate, so case folding
//! covers all of Unicode, not only ASCII.

/// Case-insensitive "contains" pattern for `term`.
///
/// ## Example
/// ```rust
/// use contacts_core::search::substring_pattern;
///
/// assert_eq!(substring_pattern("smith"), "(?i)smith");
/// assert_eq!(substring_pattern("a.b"), r"(?i)a\.b");
/// ```
pub fn substring_pattern(term: &str) -> String {
    format!("(?i){}", regex::escape(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn matches(term: &str, haystack: &str) -> bool {
        Regex::new(&substring_pattern(term)).unwrap().is_match(haystack)
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches("", ""));
        assert!(matches("", "1 Main St"));
    }

    #[test]
    fn test_case_folding_is_unicode_aware() {
        assert!(matches("smith", "Goldsmith"));
        assert!(matches("SMITH", "Goldsmith"));
        assert!(matches("müller", "Müller"));
        assert!(matches("MÜLLER", "Müller"));
        assert!(matches("ÉLODIE", "élodie"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(matches("100%", "100% Main St"));
        assert!(!matches("100%", "1000 Oak Ave"));
        assert!(!matches("a.c", "abc"));
        assert!(matches("(555)", "(555) 1000"));
        assert!(!matches("_", "Ana"));
    }
}
