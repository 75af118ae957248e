use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: three or more `-`, `_` or `*`, optionally spaced.
pub struct HorizontalRule;

impl HorizontalRule {
    fn regex() -> &'static Regex {
        static RULE: OnceLock<Regex> = OnceLock::new();
        RULE.get_or_init(|| {
            Regex::new(r"^\s*(?:(?:-\s*){3,}|(?:_\s*){3,}|(?:\*\s*){3,})$")
                .expect("Invalid horizontal rule regex")
        })
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_spaced_rules() {
        assert!(HorizontalRule::matches("---"));
        assert!(HorizontalRule::matches("* * *"));
        assert!(HorizontalRule::matches("_____"));
        assert!(HorizontalRule::matches("  - - -  "));
    }

    #[test]
    fn mixed_or_short_runs_are_not_rules() {
        assert!(!HorizontalRule::matches("--"));
        assert!(!HorizontalRule::matches("-*-"));
        assert!(!HorizontalRule::matches("- item"));
    }
}
