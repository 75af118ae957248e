use crate::parsing::inline::types::MathNode;

/// LaTeX span delimiter and the fixed macro table.
pub struct Latex;

impl Latex {
    pub const DOLLAR: u8 = b'$';
    pub const CLOSE: &'static str = "$";

    /// Symbol macros and their replacements.
    pub const SYMBOLS: &'static [(&'static str, &'static str)] = &[
        ("times", "×"),
        ("div", "÷"),
        ("pm", "±"),
        ("leq", "≤"),
        ("geq", "≥"),
        ("neq", "≠"),
        ("approx", "≈"),
        ("infty", "∞"),
    ];

    fn symbol(name: &str) -> Option<&'static str> {
        Self::SYMBOLS
            .iter()
            .find(|(macro_name, _)| *macro_name == name)
            .map(|(_, glyph)| *glyph)
    }

    /// Applies the macro table to span content.
    ///
    /// `\frac{a}{b}` and `\sqrt{x}` become structured nodes (their arguments
    /// are expanded recursively); symbol macros become their glyphs. Unknown
    /// macros and malformed arguments are kept as literal text.
    pub fn expand(src: &str) -> Vec<MathNode> {
        let mut out = vec![];
        let mut text = String::new();
        let mut i = 0;

        while i < src.len() {
            let rest = &src[i..];
            if let Some(after_slash) = rest.strip_prefix('\\') {
                let name_len = after_slash
                    .bytes()
                    .take_while(u8::is_ascii_alphabetic)
                    .count();
                let name = &after_slash[..name_len];
                let after_name = i + 1 + name_len;

                let expanded = match name {
                    "frac" => Self::group(src, after_name).and_then(|(num, next)| {
                        let (den, end) = Self::group(src, next)?;
                        Some((
                            MathNode::Fraction {
                                numerator: Self::expand(num),
                                denominator: Self::expand(den),
                            },
                            end,
                        ))
                    }),
                    "sqrt" => Self::group(src, after_name)
                        .map(|(radicand, end)| (MathNode::Radical(Self::expand(radicand)), end)),
                    _ => None,
                };

                if let Some((node, end)) = expanded {
                    if !text.is_empty() {
                        out.push(MathNode::Text(std::mem::take(&mut text)));
                    }
                    out.push(node);
                    i = end;
                    continue;
                }
                if let Some(glyph) = Self::symbol(name) {
                    text.push_str(glyph);
                    i = after_name;
                    continue;
                }
                text.push('\\');
                text.push_str(name);
                i = after_name;
                continue;
            }

            if let Some(c) = rest.chars().next() {
                text.push(c);
                i += c.len_utf8();
            }
        }

        if !text.is_empty() {
            out.push(MathNode::Text(text));
        }
        out
    }

    /// Reads a `{...}` group starting at `from` (leading whitespace allowed).
    ///
    /// Returns the group's inner text and the offset just past its `}`.
    fn group(src: &str, from: usize) -> Option<(&str, usize)> {
        let rest = src.get(from..)?;
        let skipped = rest.len() - rest.trim_start().len();
        let start = from + skipped;
        if src.as_bytes().get(start) != Some(&b'{') {
            return None;
        }

        let mut depth = 0usize;
        for (offset, b) in src.as_bytes()[start..].iter().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let end = start + offset;
                        return Some((&src[start + 1..end], end + 1));
                    }
                }
                _ => {}
            }
        }
        None
    }
}
