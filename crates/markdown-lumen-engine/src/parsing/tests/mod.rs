//! Cross-stage tests for the parsing module.
//!
//! Each sample document is run through every stage and checked against the
//! pipeline invariants in `invariants`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, parse_document,
    blocks::{ListKind, kinds::BlockQuote, tokenize},
    inline::{InlineNode, parse_inline},
    tree::{List, ListItem, ListStack},
};

const SAMPLE: &str = "# Notes\n\
\n\
Intro with **bold _and_ em**, `code` and [a link](https://x.y).\n\
second line\n\
\n\
- one\n  - one.a\n    - one.a.i\n- two\n\
1. first\n2. [x] second\n\
\n\
> quoted\n>> deeper\n>>> deepest\n\
\n\
| Left | Mid | Right |\n|:-----|:---:|------:|\n| a | b | c |\n| d |\n\
\n\
```rust\nfn main() {}\n```\n\
***\n\
$\\frac{1}{2}$ and <up>sup</up>\n";

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("`")]
#[case("**")]
#[case("```")]
#[case("```js\nconsole.log(1)")]
#[case("| lone")]
#[case("> ")]
#[case("-")]
#[case("- ")]
#[case("   - [x]")]
#[case("a\r\nb\r\n\r\n- c")]
#[case(SAMPLE)]
fn invariants_hold(#[case] source: &str) {
    let tokens = tokenize(source);
    invariants::check_line_coverage(source, &tokens);
    invariants::check_token_depths(source, &tokens);
    invariants::check_text_merged(&parse_document(source));
}

#[test]
fn sample_nesting_comes_from_depths() {
    let doc = parse_document(SAMPLE);
    assert_eq!(invariants::list_nesting(&doc.blocks), 3);
    assert_eq!(invariants::quote_nesting(&doc.blocks), 3);
}

#[rstest]
#[case("- a", 1)]
#[case("- a\n  - b", 2)]
#[case("- a\n  - b\n    - c", 3)]
#[case("- a\n    - b", 2)]
#[case("- a\n  - b\n- c", 2)]
fn list_depth_follows_indentation(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(invariants::list_nesting(&parse_document(source).blocks), expected);
}

#[rstest]
#[case("> a", 1)]
#[case("> a\n>> b", 2)]
#[case(">>> c", 3)]
#[case("> > spaced", 2)]
fn quote_depth_follows_markers(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(invariants::quote_nesting(&parse_document(source).blocks), expected);
}

#[test]
fn runaway_list_indentation_is_capped() {
    let source: String = (0..100)
        .map(|depth| format!("{}- item {depth}\n", "  ".repeat(depth)))
        .collect();
    let tokens = tokenize(&source);
    invariants::check_token_depths(&source, &tokens);
    let doc = parse_document(&source);
    invariants::check_text_merged(&doc);
    assert_eq!(invariants::list_nesting(&doc.blocks), ListStack::MAX_NESTING);
}

#[test]
fn runaway_quote_markers_are_capped() {
    let source = format!("{} deep\n{} deeper", ">".repeat(20_000), ">".repeat(30_000));
    let tokens = tokenize(&source);
    invariants::check_line_coverage(&source, &tokens);
    let doc = parse_document(&source);
    invariants::check_text_merged(&doc);
    assert_eq!(invariants::quote_nesting(&doc.blocks), BlockQuote::MAX_NESTING);
}

#[test]
fn inline_scenario() {
    assert_eq!(
        parse_inline("**a *b* c**"),
        vec![InlineNode::Strong(vec![
            InlineNode::text("a "),
            InlineNode::Emphasis(vec![InlineNode::text("b")]),
            InlineNode::text(" c"),
        ])]
    );
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").is_empty());
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = parse_document("`[not](a link)`");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            content: vec![InlineNode::CodeSpan("[not](a link)".into())],
        }]
    );
}

#[test]
fn unclosed_constructs_become_text() {
    let doc = parse_document("[unclosed and `also unclosed");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            content: vec![InlineNode::text("[unclosed and `also unclosed")],
        }]
    );
}

#[test]
fn list_item_inline_content_is_parsed() {
    let doc = parse_document("- *em* item");
    assert_eq!(
        doc.blocks,
        vec![Block::List(List {
            kind: ListKind::Unordered,
            start: None,
            items: vec![ListItem {
                checked: None,
                content: vec![
                    InlineNode::Emphasis(vec![InlineNode::text("em")]),
                    InlineNode::text(" item"),
                ],
                children: vec![],
            }],
        })]
    );
}
