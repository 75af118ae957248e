use serde::Serialize;

/// A parsed inline node.
///
/// Container variants own their children, so arbitrary nesting (emphasis
/// inside link text, code inside strong) is just a deeper tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Literal text. Never adjacent to another `Text` sibling.
    Text(String),
    /// `**strong**` or `__strong__`.
    Strong(Vec<InlineNode>),
    /// `*emphasis*` or `_emphasis_`.
    Emphasis(Vec<InlineNode>),
    /// A backtick code span. Raw zone: the content is never parsed.
    CodeSpan(String),
    /// `[text](href "title")`.
    Link {
        href: String,
        title: Option<String>,
        children: Vec<InlineNode>,
    },
    /// `![alt](src)` with an optional `{WxH}` or `=WxH` size.
    Image {
        src: String,
        alt: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    /// `<u>underline</u>`.
    Underline(Vec<InlineNode>),
    /// `~~strikethrough~~`.
    Strikethrough(Vec<InlineNode>),
    /// `$...$` with the macro table already applied.
    Latex(Vec<MathNode>),
    /// One of the allow-listed passthrough tags.
    Raw(RawTag),
}

/// LaTeX span content after macro substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MathNode {
    Text(String),
    /// `\frac{a}{b}`: stacked numerator over denominator.
    Fraction {
        numerator: Vec<MathNode>,
        denominator: Vec<MathNode>,
    },
    /// `\sqrt{x}`: radical sign followed by the radicand.
    Radical(Vec<MathNode>),
}

/// The fixed allow-list of raw passthrough tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RawTag {
    /// `<font color="C">text</font>`.
    Font {
        color: String,
        children: Vec<InlineNode>,
    },
    /// `<up>text</up>`.
    Superscript(Vec<InlineNode>),
    /// `<down>text</down>`.
    Subscript(Vec<InlineNode>),
}

impl InlineNode {
    /// Shorthand for a text node.
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }
}
