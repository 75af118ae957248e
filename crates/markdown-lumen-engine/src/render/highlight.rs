//! Heuristic code highlighting for a small set of languages.
//!
//! Keywords, quoted strings and numeric literals are wrapped in classed
//! spans. Comments are replaced by an empty `comment` span: their text is
//! dropped and only the line break after a line comment survives.

use super::output::OutputNode;

/// A language the highlighter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Python,
    Rust,
    Css,
}

impl Language {
    /// Resolves a fence language tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "js" | "javascript" | "ts" | "typescript" => Some(Language::JavaScript),
            "py" | "python" => Some(Language::Python),
            "rs" | "rust" => Some(Language::Rust),
            "css" => Some(Language::Css),
            _ => None,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "delete", "do", "else", "export", "extends", "false", "finally",
                "for", "function", "if", "import", "in", "instanceof", "let", "new", "null",
                "of", "return", "static", "super", "switch", "this", "throw", "true", "try",
                "typeof", "undefined", "var", "void", "while", "yield",
            ],
            Language::Python => &[
                "False", "None", "True", "and", "as", "assert", "async", "await", "break",
                "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
                "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
                "or", "pass", "raise", "return", "try", "while", "with", "yield",
            ],
            Language::Rust => &[
                "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
                "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop",
                "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self",
                "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
                "where", "while",
            ],
            Language::Css => &[
                "absolute", "auto", "block", "fixed", "flex", "grid", "important", "inherit",
                "initial", "inline", "none", "relative", "solid", "unset",
            ],
        }
    }

    fn line_comment(self) -> Option<&'static str> {
        match self {
            Language::JavaScript | Language::Rust => Some("//"),
            Language::Python => Some("#"),
            Language::Css => None,
        }
    }

    fn block_comment(self) -> Option<(&'static str, &'static str)> {
        match self {
            Language::JavaScript | Language::Rust | Language::Css => Some(("/*", "*/")),
            Language::Python => None,
        }
    }

    fn quotes(self) -> &'static [char] {
        match self {
            Language::JavaScript => &['"', '\'', '`'],
            Language::Python | Language::Css => &['"', '\''],
            // `'` also starts lifetimes
            Language::Rust => &['"'],
        }
    }
}

/// Splits `code` into text and classed spans.
pub fn highlight(code: &str, language: Language) -> Vec<OutputNode> {
    let mut out = Highlighted::default();
    let mut i = 0;

    while i < code.len() {
        let rest = &code[i..];

        if let Some(marker) = language.line_comment()
            && rest.starts_with(marker)
        {
            out.comment();
            i += rest.find('\n').unwrap_or(rest.len());
            continue;
        }
        if let Some((open, close)) = language.block_comment()
            && rest.starts_with(open)
        {
            out.comment();
            i += rest[open.len()..]
                .find(close)
                .map_or(rest.len(), |end| open.len() + end + close.len());
            continue;
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        let len = if language.quotes().contains(&c) {
            let len = string_len(rest, c);
            out.span("string", &rest[..len]);
            len
        } else if c.is_ascii_digit() && !out.ends_in_word() {
            let len = word_len(rest, |c| c.is_alphanumeric() || c == '.' || c == '_');
            out.span("number", &rest[..len]);
            len
        } else if is_word_start(c) {
            let len = word_len(rest, is_word_char);
            let word = &rest[..len];
            if language.keywords().contains(&word) {
                out.span("keyword", word);
            } else {
                out.text(word);
            }
            len
        } else {
            out.text(&rest[..c.len_utf8()]);
            c.len_utf8()
        };
        i += len;
    }

    out.nodes
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_len(s: &str, keep: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !keep(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Length of a string literal starting with `quote`, honoring backslash
/// escapes. An unterminated literal stops before the end of its line.
fn string_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\n' => return i,
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    s.len()
}

/// Output accumulator that keeps adjacent text merged.
#[derive(Default)]
struct Highlighted {
    nodes: Vec<OutputNode>,
}

impl Highlighted {
    fn text(&mut self, s: &str) {
        match self.nodes.last_mut() {
            Some(OutputNode::Text(prev)) => prev.push_str(s),
            _ => self.nodes.push(OutputNode::text(s)),
        }
    }

    fn span(&mut self, class: &str, s: &str) {
        self.nodes
            .push(OutputNode::element("span").class(class).child(OutputNode::text(s)));
    }

    fn comment(&mut self) {
        self.nodes.push(OutputNode::element("span").class("comment"));
    }

    /// Whether the last emitted text ends inside an identifier, so a digit
    /// here belongs to it (`x1`).
    fn ends_in_word(&self) -> bool {
        matches!(
            self.nodes.last(),
            Some(OutputNode::Text(t)) if t.chars().next_back().is_some_and(is_word_char)
        )
    }
}
