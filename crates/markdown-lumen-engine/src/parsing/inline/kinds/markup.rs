use std::sync::OnceLock;

use regex::Regex;

/// Underline and strikethrough delimiters.
pub struct Decoration;

impl Decoration {
    pub const UNDERLINE_OPEN: &'static str = "<u>";
    pub const UNDERLINE_CLOSE: &'static str = "</u>";
    pub const STRIKE: &'static str = "~~";
}

/// The raw passthrough allow-list: `<font color>`, `<up>`, `<down>`.
///
/// Anything else that looks like a tag is plain text.
pub struct RawTags;

impl RawTags {
    pub const FONT_CLOSE: &'static str = "</font>";
    pub const UP_OPEN: &'static str = "<up>";
    pub const UP_CLOSE: &'static str = "</up>";
    pub const DOWN_OPEN: &'static str = "<down>";
    pub const DOWN_CLOSE: &'static str = "</down>";

    fn font_open_regex() -> &'static Regex {
        static FONT: OnceLock<Regex> = OnceLock::new();
        FONT.get_or_init(|| {
            Regex::new(r#"^<font\s+color\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))\s*>"#)
                .expect("Invalid font tag regex")
        })
    }

    /// Parses a `<font color="C">` opener, returning the color and its length.
    pub fn font_open(rest: &str) -> Option<(&str, usize)> {
        let caps = Self::font_open_regex().captures(rest)?;
        let color = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))?
            .as_str();
        Some((color, caps.get(0)?.end()))
    }
}
