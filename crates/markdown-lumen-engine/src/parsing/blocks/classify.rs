use super::kinds::{
    BlockQuote, CodeFence, Heading, HorizontalRule, ListItem, ListMarker, Table,
};

/// Classification of a single line containing only local facts.
///
/// This is the first step of block tokenizing: each line is classified
/// independently, without reference to the lines around it. Multi-line
/// constructs (fences, tables, paragraphs) are assembled by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// Opens a fenced code block, with its language tag if any.
    FenceOpen { language: Option<String> },
    Heading { level: u8, text: &'a str },
    HorizontalRule,
    /// Begins with `|`; may start a table.
    TableRow,
    /// `>`-prefixed; `content` has one level of quoting removed.
    Quote { depth: usize, content: &'a str },
    ListItem(ListMarker<'a>),
    /// Nothing matched: paragraph text.
    Text,
}

impl LineClass<'_> {
    /// Whether this line continues an open paragraph.
    pub fn is_text(&self) -> bool {
        matches!(self, LineClass::Text)
    }
}

/// Classifies individual lines for block tokenizing.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, applying block rules in precedence order.
    ///
    /// First match wins: blank, fence, heading, rule, table, quote,
    /// unordered item, ordered item, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some(language) = CodeFence::opener(line) {
            return LineClass::FenceOpen { language };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if HorizontalRule::matches(line) {
            return LineClass::HorizontalRule;
        }
        if Table::is_row(line) {
            return LineClass::TableRow;
        }
        if let Some(content) = BlockQuote::strip_one(line) {
            return LineClass::Quote {
                depth: BlockQuote::depth(line),
                content,
            };
        }
        if let Some(marker) = ListItem::unordered(line).or_else(|| ListItem::ordered(line)) {
            return LineClass::ListItem(marker);
        }
        LineClass::Text
    }
}
