use crate::parsing::{
    blocks::ListKind,
    inline::InlineNode,
    tree::{Block, Document, List, ListItem, Table},
};

use super::{
    highlight::{Language, highlight},
    inline::render_inlines,
    output::{OutputNode, OutputTree},
};

/// Renders a parsed document.
pub fn render_document(doc: &Document) -> OutputTree {
    let nodes = render_blocks(&doc.blocks);
    log::trace!("rendered {} top-level nodes", nodes.len());
    OutputTree { nodes }
}

pub fn render_blocks(blocks: &[Block]) -> Vec<OutputNode> {
    blocks.iter().map(render_block).collect()
}

/// Renders one block. Nesting is taken from the tree as-is.
pub fn render_block(block: &Block) -> OutputNode {
    match block {
        Block::Heading { level, content } => {
            OutputNode::element(&format!("h{level}")).children(render_inlines(content))
        }
        Block::Paragraph { content } => {
            OutputNode::element("p").children(render_inlines(content))
        }
        Block::List(list) => render_list(list),
        Block::Blockquote { children } => {
            OutputNode::element("blockquote").children(render_blocks(children))
        }
        Block::CodeBlock { language, literal } => render_code(language.as_deref(), literal),
        Block::Table(table) => render_table(table),
        Block::HorizontalRule => OutputNode::element("hr"),
    }
}

fn render_code(language: Option<&str>, literal: &str) -> OutputNode {
    let mut code = OutputNode::element("code");
    if let Some(tag) = language {
        code = code.class(&format!("language-{tag}"));
    }
    let body = match language.and_then(Language::from_tag) {
        Some(lang) => highlight(literal, lang),
        None => vec![OutputNode::text(literal)],
    };
    OutputNode::element("pre").child(code.children(body))
}

fn render_list(list: &List) -> OutputNode {
    let element = match list.kind {
        ListKind::Unordered => OutputNode::element("ul"),
        ListKind::Ordered => match list.start {
            Some(start) if start != 1 => {
                OutputNode::element("ol").attr("start", start.to_string())
            }
            _ => OutputNode::element("ol"),
        },
    };
    element.children(list.items.iter().map(render_item))
}

fn render_item(item: &ListItem) -> OutputNode {
    let mut li = OutputNode::element("li");
    if let Some(checked) = item.checked {
        let mut checkbox = OutputNode::element("input")
            .attr("type", "checkbox")
            .attr("disabled", "");
        if checked {
            checkbox = checkbox.attr("checked", "");
        }
        li = li.class("task-list-item").child(checkbox);
    }
    li.children(render_inlines(&item.content))
        .children(render_blocks(&item.children))
}

fn render_table(table: &Table) -> OutputNode {
    let cell = |kind: &str, i: usize, content: &[InlineNode]| {
        OutputNode::element(kind)
            .attr("style", format!("text-align: {}", table.alignment(i).as_css()))
            .children(render_inlines(content))
    };

    let header = OutputNode::element("tr").children(
        table
            .header_cells
            .iter()
            .enumerate()
            .map(|(i, c)| cell("th", i, c)),
    );
    let mut grid =
        OutputNode::element("table").child(OutputNode::element("thead").child(header));

    if !table.rows.is_empty() {
        let rows = table.rows.iter().map(|row| {
            OutputNode::element("tr")
                .children(row.iter().enumerate().map(|(i, c)| cell("td", i, c)))
        });
        grid = grid.child(OutputNode::element("tbody").children(rows));
    }
    grid
}
