use std::sync::OnceLock;

use regex::Regex;

/// ATX heading type (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: usize = 6;

    fn regex() -> &'static Regex {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        HEADING.get_or_init(|| {
            Regex::new(&format!(r"^(#{{1,{}}})\s+(.*)$", Self::MAX_LEVEL))
                .expect("Invalid heading regex")
        })
    }

    /// Returns the heading level and its text if the line is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(line)?;
        let hashes = caps.get(1)?.as_str();
        let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        // The regex bounds the run at MAX_LEVEL, so the cast cannot truncate.
        Some((hashes.len() as u8, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
        assert_eq!(Heading::parse("###### Deep  "), Some((6, "Deep")));
    }

    #[test]
    fn requires_space_after_hashes() {
        assert_eq!(Heading::parse("#hashtag"), None);
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("####### nope"), None);
    }

    #[test]
    fn deepest_level_is_max_level() {
        let line = format!("{} deepest", "#".repeat(Heading::MAX_LEVEL));
        assert_eq!(Heading::parse(&line), Some((Heading::MAX_LEVEL as u8, "deepest")));
        let line = format!("{} past", "#".repeat(Heading::MAX_LEVEL + 1));
        assert_eq!(Heading::parse(&line), None);
    }
}
