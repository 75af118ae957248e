/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in the
/// classifier or tokenizer.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// How many quotes may nest in the tree. Deeper lines stay paragraph
    /// text.
    pub const MAX_NESTING: usize = 32;

    /// Counts the blockquote prefixes on a line.
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`. Returns 0 when the
    /// line is not a blockquote.
    pub fn depth(s: &str) -> usize {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        loop {
            while i < b.len() && b[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth += 1;
                i += 1;
            } else {
                break;
            }
        }
        depth
    }

    /// Strips exactly one level of quoting (`^\s*>\s?`), returning the rest.
    ///
    /// Deeper levels stay in the returned text so that a recursive parse sees
    /// them as blockquote lines again.
    pub fn strip_one(s: &str) -> Option<&str> {
        let rest = s.trim_start().strip_prefix(Self::PREFIX)?;
        Some(
            rest.strip_prefix(' ')
                .or_else(|| rest.strip_prefix('\t'))
                .unwrap_or(rest),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_no_quote() {
        assert_eq!(BlockQuote::depth("hello"), 0);
    }

    #[test]
    fn depth_single_quote() {
        assert_eq!(BlockQuote::depth("> hello"), 1);
    }

    #[test]
    fn depth_double_quote_spaced() {
        assert_eq!(BlockQuote::depth("> > hello"), 2);
    }

    #[test]
    fn depth_nested_quote_no_space() {
        assert_eq!(BlockQuote::depth(">> hello"), 2);
    }

    #[test]
    fn strip_one_keeps_inner_levels() {
        assert_eq!(BlockQuote::strip_one(">> inner"), Some("> inner"));
        assert_eq!(BlockQuote::strip_one("  > outer"), Some("outer"));
        assert_eq!(BlockQuote::strip_one(">tight"), Some("tight"));
        assert_eq!(BlockQuote::strip_one("plain"), None);
    }
}
