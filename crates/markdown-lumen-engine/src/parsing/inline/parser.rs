use super::{
    closers::Closers,
    cursor::Cursor,
    kinds::{CodeSpan, Decoration, Emphasis, ImageSize, Latex, Link, RawTags},
    types::{InlineNode, RawTag},
};

/// How deep containers may nest. Content of a container at this depth is
/// kept as literal text instead of being parsed again.
pub const MAX_NESTING: usize = 32;

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Constructs are tried in precedence order at each position: image, link,
/// code span, strong, emphasis, underline, strikethrough, LaTeX, raw tags.
/// Anything that does not close is kept as literal text. Container contents
/// are parsed recursively, up to [`MAX_NESTING`] levels; code spans are raw
/// zones.
///
/// The result never holds two adjacent `Text` nodes.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    InlineParser::new(s, 0).parse()
}

fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
    if !text.is_empty() {
        out.push(InlineNode::text(text));
    }
}

/// Merges adjacent `Text` siblings and drops empty ones.
pub fn merge_text(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Text(t) if t.is_empty() => {}
            InlineNode::Text(t) => match out.last_mut() {
                Some(InlineNode::Text(prev)) => prev.push_str(&t),
                _ => out.push(InlineNode::Text(t)),
            },
            other => out.push(other),
        }
    }
    out
}

/// One left-to-right pass over a single string.
struct InlineParser<'a> {
    cur: Cursor<'a>,
    closers: Closers<'a>,
    /// Containers enclosing this string.
    nesting: usize,
}

impl<'a> InlineParser<'a> {
    fn new(s: &'a str, nesting: usize) -> Self {
        Self {
            cur: Cursor::new(s),
            closers: Closers::new(s),
            nesting,
        }
    }

    fn parse(mut self) -> Vec<InlineNode> {
        let s = self.cur.s;
        let mut out = vec![];
        let mut text_start = self.cur.pos();

        while !self.cur.eof() {
            let start = self.cur.pos();
            if let Some(node) = self.try_parse_construct() {
                flush_text(&mut out, &s[text_start..start]);
                out.push(node);
                text_start = self.cur.pos();
                continue;
            }
            // An unmatched backtick run is literal as a whole.
            if self.cur.peek() == Some(CodeSpan::TICK) {
                self.cur.bump_n(self.cur.run_length(CodeSpan::TICK));
            } else {
                self.cur.bump_char();
            }
        }

        flush_text(&mut out, &s[text_start..]);
        merge_text(out)
    }

    /// Parses container content one level down.
    fn nested(&self, content: &str) -> Vec<InlineNode> {
        if self.nesting >= MAX_NESTING {
            return merge_text(vec![InlineNode::text(content)]);
        }
        InlineParser::new(content, self.nesting + 1).parse()
    }

    /// Dispatches on the byte under the cursor.
    ///
    /// On failure the cursor is left where it was.
    fn try_parse_construct(&mut self) -> Option<InlineNode> {
        let saved = self.cur.clone();
        let node = match self.cur.peek()? {
            b'!' => self.try_parse_image(),
            Link::OPEN => self.try_parse_link(),
            CodeSpan::TICK => self.try_parse_code_span(),
            b if Emphasis::is_delimiter(b) => self
                .try_parse_strong()
                .or_else(|| self.try_parse_emphasis()),
            b'<' => self
                .try_parse_underline()
                .or_else(|| self.try_parse_raw_tag()),
            b'~' => self.try_parse_strikethrough(),
            Latex::DOLLAR => self.try_parse_latex(),
            _ => None,
        };
        if node.is_none() {
            self.cur = saved;
        }
        node
    }

    /// Finds `close` after an `open` prefix at the cursor, returning the
    /// content between them and the total length consumed.
    fn enclosed(&mut self, open: &str, close: &'static str) -> Option<(&'a str, usize)> {
        if !self.cur.starts_with(open) {
            return None;
        }
        let s = self.cur.s;
        let from = self.cur.pos() + open.len();
        let end = self.closers.literal(from, close)?;
        let content = &s[from..end];
        if content.is_empty() {
            return None;
        }
        Some((content, open.len() + content.len() + close.len()))
    }

    /// Parses `(dest)` at byte `at`, returning the destination and the
    /// length consumed including both parens.
    fn destination(&mut self, at: usize) -> Option<(&'a str, usize)> {
        let s = self.cur.s;
        if s.as_bytes().get(at) != Some(&Link::DEST_OPEN) {
            return None;
        }
        let close = self
            .closers
            .matching(at, Link::DEST_OPEN, Link::DEST_CLOSE)?;
        Some((&s[at + 1..close], close + 1 - at))
    }

    /// `![alt](src)`, `![alt](src =WxH)` or `![alt](src){WxH}`.
    fn try_parse_image(&mut self) -> Option<InlineNode> {
        if !self.cur.starts_with(Link::IMAGE) {
            return None;
        }
        let s = self.cur.s;
        let start = self.cur.pos();
        let alt_open = start + 1;
        let alt_close = self.closers.matching(alt_open, Link::OPEN, Link::CLOSE)?;
        let alt = &s[alt_open + 1..alt_close];
        let (dest, dest_len) = self.destination(alt_close + 1)?;
        let mut end = alt_close + 1 + dest_len;

        let (src, mut width, mut height) = match ImageSize::inline(dest) {
            Some((src, w, h)) => (src.trim(), w, h),
            None => (dest.trim(), None, None),
        };
        if let Some((w, h, len)) = ImageSize::suffix(&s[end..]) {
            width = w;
            height = h;
            end += len;
        }

        self.cur.bump_n(end - start);
        Some(InlineNode::Image {
            src: src.to_string(),
            alt: alt.to_string(),
            width,
            height,
        })
    }

    /// `[text](href "title")`; the text is parsed recursively.
    fn try_parse_link(&mut self) -> Option<InlineNode> {
        let s = self.cur.s;
        let start = self.cur.pos();
        let text_close = self.closers.matching(start, Link::OPEN, Link::CLOSE)?;
        let text = &s[start + 1..text_close];
        let (dest, dest_len) = self.destination(text_close + 1)?;
        let (href, title) = Link::split_title(dest);

        self.cur.bump_n(text_close + 1 + dest_len - start);
        Some(InlineNode::Link {
            href,
            title,
            children: self.nested(text),
        })
    }

    /// A backtick run closed by a run of the same length. Content is literal.
    fn try_parse_code_span(&mut self) -> Option<InlineNode> {
        let s = self.cur.s;
        let start = self.cur.pos();
        let ticks = self.cur.run_length(CodeSpan::TICK);
        let from = start + ticks;
        let close = self.closers.tick_run(from, ticks)?;
        let content = &s[from..close];

        self.cur.bump_n(close + ticks - start);
        Some(InlineNode::CodeSpan(content.to_string()))
    }

    /// `**strong**` or `__strong__`.
    fn try_parse_strong(&mut self) -> Option<InlineNode> {
        let delim = self.cur.peek()?;
        if self.cur.peek_at(1) != Some(delim)
            || !Emphasis::can_open(delim, self.cur.prev_char())
        {
            return None;
        }
        let s = self.cur.s;
        let from = self.cur.pos() + 2;
        let close = self.closers.emphasis(from, delim, true)?;
        let content = &s[from..from + close];
        if !Emphasis::valid_content(content) {
            return None;
        }

        self.cur.bump_n(2 + close + 2);
        Some(InlineNode::Strong(self.nested(content)))
    }

    /// `*emphasis*` or `_emphasis_`.
    fn try_parse_emphasis(&mut self) -> Option<InlineNode> {
        let delim = self.cur.peek()?;
        if !Emphasis::can_open(delim, self.cur.prev_char()) {
            return None;
        }
        let s = self.cur.s;
        let from = self.cur.pos() + 1;
        let close = self.closers.emphasis(from, delim, false)?;
        let content = &s[from..from + close];
        if !Emphasis::valid_content(content) {
            return None;
        }

        self.cur.bump_n(1 + close + 1);
        Some(InlineNode::Emphasis(self.nested(content)))
    }

    fn try_parse_underline(&mut self) -> Option<InlineNode> {
        let (content, len) =
            self.enclosed(Decoration::UNDERLINE_OPEN, Decoration::UNDERLINE_CLOSE)?;
        self.cur.bump_n(len);
        Some(InlineNode::Underline(self.nested(content)))
    }

    fn try_parse_strikethrough(&mut self) -> Option<InlineNode> {
        let (content, len) = self.enclosed(Decoration::STRIKE, Decoration::STRIKE)?;
        self.cur.bump_n(len);
        Some(InlineNode::Strikethrough(self.nested(content)))
    }

    /// `$...$`. Content padded with whitespace is not math, so `$5 and $10`
    /// stays text.
    fn try_parse_latex(&mut self) -> Option<InlineNode> {
        let s = self.cur.s;
        let start = self.cur.pos();
        let from = start + 1;
        let close = self.closers.literal(from, Latex::CLOSE)?;
        let content = &s[from..close];
        if !Emphasis::valid_content(content) {
            return None;
        }

        self.cur.bump_n(close + Latex::CLOSE.len() - start);
        Some(InlineNode::Latex(Latex::expand(content)))
    }

    /// One of the allow-listed raw tags; anything else stays text.
    fn try_parse_raw_tag(&mut self) -> Option<InlineNode> {
        let s = self.cur.s;
        let start = self.cur.pos();
        if let Some((color, open_len)) = RawTags::font_open(self.cur.rest()) {
            let from = start + open_len;
            let end = self.closers.literal(from, RawTags::FONT_CLOSE)?;
            let inner = &s[from..end];
            self.cur.bump_n(end + RawTags::FONT_CLOSE.len() - start);
            return Some(InlineNode::Raw(RawTag::Font {
                color: color.to_string(),
                children: self.nested(inner),
            }));
        }
        if let Some((content, len)) = self.enclosed(RawTags::UP_OPEN, RawTags::UP_CLOSE) {
            self.cur.bump_n(len);
            return Some(InlineNode::Raw(RawTag::Superscript(self.nested(content))));
        }
        if let Some((content, len)) = self.enclosed(RawTags::DOWN_OPEN, RawTags::DOWN_CLOSE) {
            self.cur.bump_n(len);
            return Some(InlineNode::Raw(RawTag::Subscript(self.nested(content))));
        }
        None
    }
}
