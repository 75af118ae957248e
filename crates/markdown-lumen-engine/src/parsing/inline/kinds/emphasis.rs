/// Emphasis and strong delimiter knowledge.
///
/// `*` and `_` open emphasis; doubled they open strong. Underscores follow a
/// word-boundary rule so `snake_case_name` stays plain text.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Whether a delimiter may open here given the char before it.
    pub fn can_open(delim: u8, prev: Option<char>) -> bool {
        delim != Self::UNDERSCORE || !prev.is_some_and(char::is_alphanumeric)
    }

    /// Whether a closing delimiter is valid given the char after it.
    fn can_close(delim: u8, next: Option<char>) -> bool {
        delim != Self::UNDERSCORE || !next.is_some_and(char::is_alphanumeric)
    }

    /// Content between delimiters must be non-empty and must not start or
    /// end with whitespace.
    pub fn valid_content(content: &str) -> bool {
        !content.is_empty()
            && !content.starts_with(char::is_whitespace)
            && !content.ends_with(char::is_whitespace)
    }

    /// Finds the closing `delim delim` pair for strong content `s`.
    ///
    /// Returns the byte offset of the closer within `s`.
    pub fn find_strong_close(s: &str, delim: u8) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0;
        while i + 1 < b.len() {
            if b[i] == delim && b[i + 1] == delim {
                if Self::can_close(delim, s[i + 2..].chars().next()) {
                    return Some(i);
                }
                i += 2;
                continue;
            }
            i += 1;
        }
        None
    }

    /// Finds a single closing `delim` for emphasis content `s`.
    ///
    /// Doubled delimiters inside belong to a nested strong and are stepped
    /// over as a unit.
    pub fn find_emphasis_close(s: &str, delim: u8) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0;
        while i < b.len() {
            if b[i] == delim {
                if b.get(i + 1) == Some(&delim) {
                    i += 2;
                    continue;
                }
                if Self::can_close(delim, s[i + 1..].chars().next()) {
                    return Some(i);
                }
            }
            i += 1;
        }
        None
    }

    /// The closer search restricted to one run of delimiters.
    ///
    /// `run_len` delimiters start the content and `next` follows them. Gives
    /// the same answer `find_strong_close` or `find_emphasis_close` would
    /// for that run alone, without stepping through it.
    pub fn close_within_run(
        delim: u8,
        run_len: usize,
        next: Option<char>,
        strong: bool,
    ) -> Option<usize> {
        if strong {
            match run_len {
                0 | 1 => None,
                2 => Self::can_close(delim, next).then_some(0),
                _ => Some(0),
            }
        } else if run_len % 2 == 1 && Self::can_close(delim, next) {
            Some(run_len - 1)
        } else {
            None
        }
    }
}
