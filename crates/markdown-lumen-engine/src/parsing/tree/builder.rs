use std::iter::Peekable;

use crate::parsing::{
    blocks::{BlockToken, TokenKind, kinds::BlockQuote, tokenize},
    inline::parse_inline,
};

use super::{
    lists::ListStack,
    types::{Block, ListItem, Table},
};

/// Assembles block tokens into a nested block tree in one forward pass.
pub struct TreeBuilder {
    lists: ListStack,
    out: Vec<Block>,
    /// Blockquotes enclosing the tokens being built.
    nesting: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::nested(0)
    }

    /// A builder for the interior of `nesting` enclosing blockquotes.
    pub fn nested(nesting: usize) -> Self {
        Self {
            lists: ListStack::default(),
            out: vec![],
            nesting,
        }
    }

    /// Consumes every token and returns the top-level blocks.
    pub fn build(mut self, tokens: Vec<BlockToken>) -> Vec<Block> {
        let mut tokens = tokens.into_iter().peekable();
        while let Some(token) = tokens.next() {
            self.push(token, &mut tokens);
        }
        self.lists.close_all(&mut self.out);
        self.out
    }

    fn push<I>(&mut self, token: BlockToken, rest: &mut Peekable<I>)
    where
        I: Iterator<Item = BlockToken>,
    {
        if let TokenKind::ListItem {
            depth,
            kind,
            number,
            checked,
        } = token.kind
        {
            let item = ListItem {
                checked,
                content: parse_inline(&token.raw),
                children: vec![],
            };
            self.lists
                .push_item(depth, kind, number, item, &mut self.out);
            return;
        }

        self.lists.close_all(&mut self.out);

        let block = match token.kind {
            TokenKind::Blank => return,
            TokenKind::Heading { level } => Block::Heading {
                level,
                content: parse_inline(&token.raw),
            },
            TokenKind::HorizontalRule => Block::HorizontalRule,
            TokenKind::Paragraph => Block::Paragraph {
                content: parse_inline(&token.raw),
            },
            TokenKind::CodeFence { language } => Block::CodeBlock {
                language,
                literal: token.raw,
            },
            TokenKind::Table {
                header_cells,
                rows,
                column_alignment,
            } => Block::Table(Table {
                header_cells: header_cells.iter().map(|c| parse_inline(c)).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|c| parse_inline(c)).collect())
                    .collect(),
                column_alignment,
            }),
            TokenKind::Blockquote { .. } => {
                let mut lines = vec![token.raw];
                while let Some(next) =
                    rest.next_if(|t| matches!(t.kind, TokenKind::Blockquote { .. }))
                {
                    lines.push(next.raw);
                }
                let text = lines.join("\n");
                if self.nesting >= BlockQuote::MAX_NESTING {
                    log::debug!("blockquote nesting limit reached, keeping quote as text");
                    Block::Paragraph {
                        content: parse_inline(&text),
                    }
                } else {
                    Block::Blockquote {
                        children: parse_nested_blocks(&text, self.nesting + 1),
                    }
                }
            }
            TokenKind::ListItem { .. } => return,
        };
        self.out.push(block);
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the block tree for a token sequence.
pub fn build_tree(tokens: Vec<BlockToken>) -> Vec<Block> {
    build_nested_tree(tokens, 0)
}

fn build_nested_tree(tokens: Vec<BlockToken>, nesting: usize) -> Vec<Block> {
    let token_count = tokens.len();
    let blocks = TreeBuilder::nested(nesting).build(tokens);
    log::trace!("built {} blocks from {token_count} tokens", blocks.len());
    blocks
}

/// Runs tokenize and build over `text`.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    parse_nested_blocks(text, 0)
}

/// Quoted content re-enters here with one level of `>` removed, so `>>`
/// lines surface as a nested blockquote. Past [`BlockQuote::MAX_NESTING`]
/// levels the remaining lines stay a paragraph.
fn parse_nested_blocks(text: &str, nesting: usize) -> Vec<Block> {
    build_nested_tree(tokenize(text), nesting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{Alignment, ListKind},
        inline::InlineNode,
        tree::types::List,
    };
    use pretty_assertions::assert_eq;

    fn para(s: &str) -> Block {
        Block::Paragraph {
            content: vec![InlineNode::text(s)],
        }
    }

    fn item(s: &str) -> ListItem {
        ListItem {
            checked: None,
            content: vec![InlineNode::text(s)],
            children: vec![],
        }
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert!(parse_blocks("").is_empty());
    }

    #[test]
    fn heading_paragraph_rule() {
        assert_eq!(
            parse_blocks("# Title\n\nbody *x*\n\n---"),
            vec![
                Block::Heading {
                    level: 1,
                    content: vec![InlineNode::text("Title")],
                },
                Block::Paragraph {
                    content: vec![
                        InlineNode::text("body "),
                        InlineNode::Emphasis(vec![InlineNode::text("x")]),
                    ],
                },
                Block::HorizontalRule,
            ]
        );
    }

    #[test]
    fn nested_list_scenario() {
        let mut a = item("a");
        a.children.push(Block::List(List {
            kind: ListKind::Unordered,
            start: None,
            items: vec![item("b")],
        }));
        assert_eq!(
            parse_blocks("- a\n  - b\n- c"),
            vec![Block::List(List {
                kind: ListKind::Unordered,
                start: None,
                items: vec![a, item("c")],
            })]
        );
    }

    #[test]
    fn blank_line_closes_lists() {
        let blocks = parse_blocks("- a\n\n- b");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn ordered_list_records_start() {
        let blocks = parse_blocks("3. c\n4. d");
        assert_eq!(
            blocks,
            vec![Block::List(List {
                kind: ListKind::Ordered,
                start: Some(3),
                items: vec![item("c"), item("d")],
            })]
        );
    }

    #[test]
    fn task_items_keep_checkbox_state() {
        let blocks = parse_blocks("- [x] done\n- [ ] todo");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {blocks:?}");
        };
        let states: Vec<_> = list.items.iter().map(|i| i.checked).collect();
        assert_eq!(states, vec![Some(true), Some(false)]);
    }

    #[test]
    fn nested_blockquote_scenario() {
        assert_eq!(
            parse_blocks("> outer\n>> inner"),
            vec![Block::Blockquote {
                children: vec![
                    para("outer"),
                    Block::Blockquote {
                        children: vec![para("inner")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn quote_holds_block_structure() {
        assert_eq!(
            parse_blocks("> # Head\n> - x\nafter"),
            vec![
                Block::Blockquote {
                    children: vec![
                        Block::Heading {
                            level: 1,
                            content: vec![InlineNode::text("Head")],
                        },
                        Block::List(List {
                            kind: ListKind::Unordered,
                            start: None,
                            items: vec![item("x")],
                        }),
                    ],
                },
                para("after"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_scenario() {
        assert_eq!(
            parse_blocks("```js\nconsole.log(1)"),
            vec![Block::CodeBlock {
                language: Some("js".into()),
                literal: "console.log(1)".into(),
            }]
        );
    }

    #[test]
    fn table_scenario() {
        assert_eq!(
            parse_blocks("| A | B |\n|---|---|\n| 1 | 2 |"),
            vec![Block::Table(Table {
                header_cells: vec![vec![InlineNode::text("A")], vec![InlineNode::text("B")]],
                rows: vec![vec![vec![InlineNode::text("1")], vec![InlineNode::text("2")]]],
                column_alignment: vec![Alignment::Left, Alignment::Left],
            })]
        );
    }

    fn quote_depth(blocks: &[Block]) -> (usize, Option<&Block>) {
        match blocks {
            [Block::Blockquote { children }] => {
                let (depth, innermost) = quote_depth(children);
                (depth + 1, innermost)
            }
            [only] => (0, Some(only)),
            _ => (0, None),
        }
    }

    #[test]
    fn deep_quote_run_stops_at_the_nesting_limit() {
        let blocks = parse_blocks(&format!("{} x", ">".repeat(50_000)));
        let (depth, innermost) = quote_depth(&blocks);
        assert_eq!(depth, BlockQuote::MAX_NESTING);
        let Some(Block::Paragraph { content }) = innermost else {
            panic!("expected the residue as a paragraph, got {innermost:?}");
        };
        let residue = format!("{} x", ">".repeat(50_000 - BlockQuote::MAX_NESTING - 1));
        assert_eq!(content, &vec![InlineNode::text(&residue)]);
    }

    #[test]
    fn quotes_within_the_limit_nest_fully() {
        let depth = BlockQuote::MAX_NESTING;
        let blocks = parse_blocks(&format!("{} x", ">".repeat(depth)));
        assert_eq!(quote_depth(&blocks), (depth, Some(&para("x"))));
    }
}
