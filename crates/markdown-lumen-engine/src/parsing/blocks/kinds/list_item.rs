use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

/// A recognized list item marker with its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub depth: usize,
    pub kind: ListKind,
    pub number: Option<u64>,
    pub checked: Option<bool>,
    pub content: &'a str,
}

/// List item type: owns bullet, ordinal and checkbox syntax.
pub struct ListItem;

impl ListItem {
    /// Columns of indentation per nesting level.
    pub const INDENT_PER_LEVEL: usize = 2;
    /// Columns a tab counts for when measuring indentation.
    pub const TAB_WIDTH: usize = 4;

    fn unordered_regex() -> &'static Regex {
        static UNORDERED: OnceLock<Regex> = OnceLock::new();
        UNORDERED.get_or_init(|| {
            Regex::new(r"^(\s*)[-+*]\s+(.*)$").expect("Invalid unordered list regex")
        })
    }

    fn ordered_regex() -> &'static Regex {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        ORDERED.get_or_init(|| {
            Regex::new(r"^(\s*)(\d+)\.\s+(.*)$").expect("Invalid ordered list regex")
        })
    }

    fn checkbox_regex() -> &'static Regex {
        static CHECKBOX: OnceLock<Regex> = OnceLock::new();
        CHECKBOX.get_or_init(|| {
            Regex::new(r"^\[([ xX])\](?:\s+(.*))?$").expect("Invalid checkbox regex")
        })
    }

    /// Parses an unordered item (`- `, `+ `, `* `), with optional checkbox.
    pub fn unordered(line: &str) -> Option<ListMarker<'_>> {
        let caps = Self::unordered_regex().captures(line)?;
        let indent = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let (checked, content) = Self::split_checkbox(rest);
        Some(ListMarker {
            depth: Self::depth_of(indent),
            kind: ListKind::Unordered,
            number: None,
            checked,
            content: content.trim_end(),
        })
    }

    /// Parses an ordered item (`1. `).
    pub fn ordered(line: &str) -> Option<ListMarker<'_>> {
        let caps = Self::ordered_regex().captures(line)?;
        let indent = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let number = caps.get(2).and_then(|m| m.as_str().parse().ok());
        let content = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
        Some(ListMarker {
            depth: Self::depth_of(indent),
            kind: ListKind::Ordered,
            number,
            checked: None,
            content: content.trim_end(),
        })
    }

    /// Nesting depth from leading whitespace: columns / 2, rounded down.
    pub fn depth_of(indent: &str) -> usize {
        let columns: usize = indent
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();
        columns / Self::INDENT_PER_LEVEL
    }

    fn split_checkbox(rest: &str) -> (Option<bool>, &str) {
        match Self::checkbox_regex().captures(rest) {
            Some(caps) => {
                let checked = caps.get(1).is_some_and(|m| m.as_str() != " ");
                let content = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                (Some(checked), content)
            }
            None => (None, rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_depth_from_indent() {
        let m = ListItem::unordered("    - deep").unwrap();
        assert_eq!(m.depth, 2);
        assert_eq!(m.kind, ListKind::Unordered);
        assert_eq!(m.content, "deep");
    }

    #[test]
    fn odd_indent_rounds_down() {
        assert_eq!(ListItem::unordered("   * x").unwrap().depth, 1);
    }

    #[test]
    fn checkbox_states() {
        let open = ListItem::unordered("- [ ] todo").unwrap();
        assert_eq!(open.checked, Some(false));
        assert_eq!(open.content, "todo");

        let done = ListItem::unordered("- [X] done").unwrap();
        assert_eq!(done.checked, Some(true));
        assert_eq!(done.content, "done");
    }

    #[test]
    fn link_text_is_not_a_checkbox() {
        let m = ListItem::unordered("- [x](http://a) link").unwrap();
        assert_eq!(m.checked, None);
        assert_eq!(m.content, "[x](http://a) link");
    }

    #[test]
    fn ordered_number_is_captured() {
        let m = ListItem::ordered("  3. third").unwrap();
        assert_eq!(m.depth, 1);
        assert_eq!(m.number, Some(3));
        assert_eq!(m.content, "third");
    }

    #[test]
    fn marker_needs_trailing_space() {
        assert!(ListItem::unordered("-dash").is_none());
        assert!(ListItem::ordered("1.5 apples").is_none());
    }
}
