use crate::parsing::inline::{InlineNode, MathNode, RawTag};

use super::output::OutputNode;

/// Renders an inline sequence.
pub fn render_inlines(nodes: &[InlineNode]) -> Vec<OutputNode> {
    nodes.iter().map(render_inline).collect()
}

fn wrap(kind: &str, children: &[InlineNode]) -> OutputNode {
    OutputNode::element(kind).children(render_inlines(children))
}

pub fn render_inline(node: &InlineNode) -> OutputNode {
    match node {
        InlineNode::Text(text) => OutputNode::text(text.as_str()),
        InlineNode::Strong(children) => wrap("strong", children),
        InlineNode::Emphasis(children) => wrap("em", children),
        InlineNode::CodeSpan(code) => {
            OutputNode::element("code").child(OutputNode::text(code.as_str()))
        }
        InlineNode::Link {
            href,
            title,
            children,
        } => {
            let link = wrap("a", children).attr("href", href.as_str());
            match title {
                Some(title) => link.attr("title", title.as_str()),
                None => link,
            }
        }
        InlineNode::Image {
            src,
            alt,
            width,
            height,
        } => {
            let mut img = OutputNode::element("img")
                .attr("src", src.as_str())
                .attr("alt", alt.as_str());
            if let Some(width) = width {
                img = img.attr("width", width.to_string());
            }
            if let Some(height) = height {
                img = img.attr("height", height.to_string());
            }
            img
        }
        InlineNode::Underline(children) => wrap("u", children),
        InlineNode::Strikethrough(children) => wrap("del", children),
        InlineNode::Latex(math) => OutputNode::element("span")
            .class("latex")
            .children(render_math(math)),
        InlineNode::Raw(RawTag::Font { color, children }) => {
            wrap("span", children).attr("style", format!("color: {color}"))
        }
        InlineNode::Raw(RawTag::Superscript(children)) => wrap("sup", children),
        InlineNode::Raw(RawTag::Subscript(children)) => wrap("sub", children),
    }
}

fn render_math(nodes: &[MathNode]) -> Vec<OutputNode> {
    nodes
        .iter()
        .map(|node| match node {
            MathNode::Text(text) => OutputNode::text(text.as_str()),
            MathNode::Fraction {
                numerator,
                denominator,
            } => OutputNode::element("span")
                .class("frac")
                .child(
                    OutputNode::element("span")
                        .class("numerator")
                        .children(render_math(numerator)),
                )
                .child(OutputNode::element("span").class("frac-line"))
                .child(
                    OutputNode::element("span")
                        .class("denominator")
                        .children(render_math(denominator)),
                ),
            MathNode::Radical(radicand) => OutputNode::element("span")
                .class("sqrt")
                .child(
                    OutputNode::element("span")
                        .class("radical")
                        .child(OutputNode::text("√")),
                )
                .child(
                    OutputNode::element("span")
                        .class("radicand")
                        .children(render_math(radicand)),
                ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parsing::inline::parse_inline, render::html::to_html};

    fn html(src: &str) -> String {
        to_html(&render_inlines(&parse_inline(src)))
    }

    #[test]
    fn basic_formatting() {
        assert_eq!(
            html("**b** *i* `c` <u>u</u> ~~s~~"),
            "<strong>b</strong> <em>i</em> <code>c</code> <u>u</u> <del>s</del>"
        );
    }

    #[test]
    fn link_with_title() {
        assert_eq!(
            html(r#"[go](/x "Go there")"#),
            r#"<a href="/x" title="Go there">go</a>"#
        );
    }

    #[test]
    fn sized_image() {
        assert_eq!(
            html("![a cat](cat.png){64x32}"),
            r#"<img alt="a cat" height="32" src="cat.png" width="64">"#
        );
    }

    #[test]
    fn fraction_and_radical() {
        assert_eq!(
            html(r"$\frac{1}{\sqrt{2}}$"),
            concat!(
                r#"<span class="latex"><span class="frac">"#,
                r#"<span class="numerator">1</span><span class="frac-line"></span>"#,
                r#"<span class="denominator"><span class="sqrt"><span class="radical">√</span>"#,
                r#"<span class="radicand">2</span></span></span></span></span>"#
            )
        );
    }

    #[test]
    fn raw_tags() {
        assert_eq!(
            html("<font color=red>r</font><up>u</up><down>d</down>"),
            r#"<span style="color: red">r</span><sup>u</sup><sub>d</sub>"#
        );
    }

    #[test]
    fn code_span_text_is_escaped() {
        assert_eq!(html("`<b>`"), "<code>&lt;b&gt;</code>");
    }
}
