use std::{collections::HashMap, sync::OnceLock};

use regex::Regex;

/// Link and image delimiter knowledge.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    /// Prefix that turns a link into an image.
    pub const IMAGE: &'static str = "![";

    /// Pairs every `open` in `s` with the `close` that balances it.
    ///
    /// Keys and values are byte offsets into `s`. Unbalanced brackets have no
    /// entry.
    pub fn match_pairs(s: &str, open: u8, close: u8) -> HashMap<usize, usize> {
        let mut pairs = HashMap::new();
        let mut stack = vec![];
        for (i, &b) in s.as_bytes().iter().enumerate() {
            if b == open {
                stack.push(i);
            } else if b == close
                && let Some(start) = stack.pop()
            {
                pairs.insert(start, i);
            }
        }
        pairs
    }

    /// Splits a destination into `(href, title)`: `url "title"`.
    pub fn split_title(dest: &str) -> (String, Option<String>) {
        let dest = dest.trim();
        if dest.ends_with('"')
            && let Some(open) = dest[..dest.len() - 1].rfind(" \"")
        {
            let href = dest[..open].trim().to_string();
            let title = dest[open + 2..dest.len() - 1].to_string();
            return (href, Some(title));
        }
        (dest.to_string(), None)
    }
}

/// Image size annotations: `{WxH}` after the parens or `=WxH` inside them.
pub struct ImageSize;

impl ImageSize {
    fn suffix_regex() -> &'static Regex {
        static SUFFIX: OnceLock<Regex> = OnceLock::new();
        SUFFIX.get_or_init(|| Regex::new(r"^\{(\d*)x(\d*)\}").expect("Invalid image size regex"))
    }

    fn inline_regex() -> &'static Regex {
        static INLINE: OnceLock<Regex> = OnceLock::new();
        INLINE.get_or_init(|| {
            Regex::new(r"^(.*?)\s*=(\d*)x(\d*)$").expect("Invalid inline image size regex")
        })
    }

    /// Parses a `{WxH}` suffix, returning `(width, height, bytes consumed)`.
    pub fn suffix(rest: &str) -> Option<(Option<u32>, Option<u32>, usize)> {
        let caps = Self::suffix_regex().captures(rest)?;
        let len = caps.get(0)?.end();
        Some((
            Self::dimension(caps.get(1).map(|m| m.as_str())),
            Self::dimension(caps.get(2).map(|m| m.as_str())),
            len,
        ))
    }

    /// Splits `src =WxH` into the source and its size.
    pub fn inline(dest: &str) -> Option<(&str, Option<u32>, Option<u32>)> {
        let caps = Self::inline_regex().captures(dest)?;
        Some((
            caps.get(1).map(|m| m.as_str()).unwrap_or_default(),
            Self::dimension(caps.get(2).map(|m| m.as_str())),
            Self::dimension(caps.get(3).map(|m| m.as_str())),
        ))
    }

    fn dimension(s: Option<&str>) -> Option<u32> {
        s.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_bracket_with_nesting() {
        let pairs = Link::match_pairs("[a [b] c](x)", b'[', b']');
        assert_eq!(pairs.get(&0), Some(&8));
        assert_eq!(pairs.get(&3), Some(&5));
    }

    #[test]
    fn unbalanced_brackets_have_no_partner() {
        let pairs = Link::match_pairs("[[a] ] ]", b'[', b']');
        assert_eq!(pairs.get(&0), Some(&5));
        assert_eq!(pairs.get(&1), Some(&3));
        assert!(Link::match_pairs("[open", b'[', b']').is_empty());
        assert_eq!(Link::match_pairs("[[x]", b'[', b']').get(&0), None);
    }

    #[test]
    fn title_is_split_from_href() {
        assert_eq!(
            Link::split_title("https://a.b \"Home\""),
            ("https://a.b".to_string(), Some("Home".to_string()))
        );
        assert_eq!(Link::split_title(" /path "), ("/path".to_string(), None));
    }

    #[test]
    fn size_suffix() {
        assert_eq!(ImageSize::suffix("{100x50} tail"), Some((Some(100), Some(50), 8)));
        assert_eq!(ImageSize::suffix("{x50}"), Some((None, Some(50), 5)));
        assert_eq!(ImageSize::suffix("{wide}"), None);
    }

    #[test]
    fn size_inside_parens() {
        assert_eq!(
            ImageSize::inline("cat.png =320x240"),
            Some(("cat.png", Some(320), Some(240)))
        );
        assert_eq!(ImageSize::inline("cat.png"), None);
    }
}
