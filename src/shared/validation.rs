use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating category slugs
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "doll", "weaving", "hand-painted"
    /// - Invalid: "-doll", "doll-", "hand--painted", "Doll", "hand_painted"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("doll"));
        assert!(SLUG_REGEX.is_match("weaving"));
        assert!(SLUG_REGEX.is_match("hand-painted"));
        assert!(SLUG_REGEX.is_match("gifts2"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-doll")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("doll-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("hand--painted")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Doll")); // uppercase
        assert!(!SLUG_REGEX.is_match("hand_painted")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("hand painted")); // space
    }
}
