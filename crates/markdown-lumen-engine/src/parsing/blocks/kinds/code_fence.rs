use std::sync::OnceLock;

use regex::Regex;

/// Fenced code block type with owned delimiter knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Matches an opening fence, capturing the optional language tag.
    fn opener_regex() -> &'static Regex {
        static OPENER: OnceLock<Regex> = OnceLock::new();
        OPENER.get_or_init(|| Regex::new(r"^```(\S*)\s*$").expect("Invalid fence opener regex"))
    }

    /// Returns `Some(language)` if the line opens a fence.
    ///
    /// The inner option is `None` for a bare fence with no language tag.
    pub fn opener(line: &str) -> Option<Option<String>> {
        let caps = Self::opener_regex().captures(line)?;
        let lang = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        Some((!lang.is_empty()).then(|| lang.to_string()))
    }

    /// Any line starting with three backticks closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
