use crate::parsing::blocks::ListKind;

use super::types::{Block, List, ListItem};

/// A list still accepting items, keyed by the depth it was opened at.
#[derive(Debug)]
struct OpenList {
    depth: usize,
    list: List,
}

/// The stack of open lists while list item tokens stream past.
///
/// This is the single place list nesting is decided. Closing a nested list
/// attaches it to the last item of its parent; closing a top-level list
/// emits it as a block.
#[derive(Debug, Default)]
pub struct ListStack {
    frames: Vec<OpenList>,
}

impl ListStack {
    /// How many lists may be open at once. An item that would open one more
    /// joins the innermost list instead.
    pub const MAX_NESTING: usize = 32;

    /// Places an item at `depth`, opening and closing lists as needed.
    pub fn push_item(
        &mut self,
        depth: usize,
        kind: ListKind,
        number: Option<u64>,
        item: ListItem,
        out: &mut Vec<Block>,
    ) {
        let depth = match self.frames.last() {
            Some(top) if self.frames.len() >= Self::MAX_NESTING && depth > top.depth => {
                top.depth
            }
            _ => depth,
        };
        while self.frames.last().is_some_and(|top| top.depth > depth) {
            self.pop(out);
        }
        if self
            .frames
            .last()
            .is_some_and(|top| top.depth == depth && top.list.kind != kind)
        {
            self.pop(out);
        }
        if self.frames.last().is_none_or(|top| top.depth < depth) {
            self.frames.push(OpenList {
                depth,
                list: List {
                    kind,
                    start: number.filter(|_| kind == ListKind::Ordered),
                    items: vec![],
                },
            });
        }
        if let Some(top) = self.frames.last_mut() {
            top.list.items.push(item);
        }
    }

    /// Closes every open list.
    pub fn close_all(&mut self, out: &mut Vec<Block>) {
        while !self.frames.is_empty() {
            self.pop(out);
        }
    }

    fn pop(&mut self, out: &mut Vec<Block>) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let parent_item = self
            .frames
            .last_mut()
            .and_then(|parent| parent.list.items.last_mut());
        match parent_item {
            Some(item) => item.children.push(Block::List(frame.list)),
            None => out.push(Block::List(frame.list)),
        }
    }
}
