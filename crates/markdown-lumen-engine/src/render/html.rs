use super::output::OutputNode;

/// Element kinds serialized without a closing tag.
pub const VOID_KINDS: &[&str] = &["hr", "img", "input", "br"];

/// Escapes HTML special characters in text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Serializes a node sequence to HTML.
pub fn to_html(nodes: &[OutputNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &OutputNode) {
    match node {
        OutputNode::Text(text) => out.push_str(&escape_html(text)),
        OutputNode::Element {
            kind,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(kind);
            for (name, value) in attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
            out.push('>');

            if VOID_KINDS.contains(&kind.as_str()) {
                return;
            }
            for child in children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(kind);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"say "it's""#), "say &quot;it&#x27;s&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn attributes_are_sorted_and_escaped() {
        let node = OutputNode::element("a")
            .attr("title", "\"q\"")
            .attr("href", "/x?a=1&b=2")
            .child(OutputNode::text("1 < 2"));
        assert_eq!(
            to_html(&[node]),
            r#"<a href="/x?a=1&amp;b=2" title="&quot;q&quot;">1 &lt; 2</a>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let nodes = [
            OutputNode::element("hr"),
            OutputNode::element("img").attr("src", "a.png"),
        ];
        assert_eq!(to_html(&nodes), r#"<hr><img src="a.png">"#);
    }

    #[test]
    fn empty_element_is_closed() {
        assert_eq!(
            to_html(&[OutputNode::element("span").class("comment")]),
            r#"<span class="comment"></span>"#
        );
    }
}
