use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, Paragraph, Table},
    types::{Alignment, BlockToken, TokenKind},
};

/// Forward-only line cursor that turns source lines into [`BlockToken`]s.
///
/// Every line is consumed by exactly one token. Fences and tables look ahead
/// and advance the cursor past every line they swallow.
pub struct BlockTokenizer<'a> {
    classifier: MarkdownLineClassifier,
    lines: Vec<&'a str>,
    pos: usize,
    out: Vec<BlockToken>,
}

impl<'a> BlockTokenizer<'a> {
    /// Creates a tokenizer over already-normalized text (`\n` line endings).
    pub fn new(text: &'a str) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            lines: text.lines().collect(),
            pos: 0,
            out: vec![],
        }
    }

    /// Runs the cursor to the end of input and returns the tokens.
    pub fn finish(mut self) -> Vec<BlockToken> {
        while self.pos < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn step(&mut self) {
        let start = self.pos;
        let line = self.lines[start];

        match self.classifier.classify(line) {
            LineClass::Blank => self.emit(TokenKind::Blank, String::new(), start, 1),
            LineClass::FenceOpen { language } => self.consume_fence(language),
            LineClass::Heading { level, text } => {
                self.emit(TokenKind::Heading { level }, text.to_string(), start, 1)
            }
            LineClass::HorizontalRule => {
                self.emit(TokenKind::HorizontalRule, String::new(), start, 1)
            }
            LineClass::TableRow => self.consume_table(),
            LineClass::Quote { depth, content } => self.emit(
                TokenKind::Blockquote { depth },
                content.to_string(),
                start,
                1,
            ),
            LineClass::ListItem(marker) => self.emit(
                TokenKind::ListItem {
                    depth: marker.depth,
                    kind: marker.kind,
                    number: marker.number,
                    checked: marker.checked,
                },
                marker.content.to_string(),
                start,
                1,
            ),
            LineClass::Text => self.consume_paragraph(),
        }
    }

    fn emit(&mut self, kind: TokenKind, raw: String, line: usize, line_count: usize) {
        self.out.push(BlockToken {
            kind,
            raw,
            line,
            line_count,
        });
        self.pos = line + line_count;
    }

    /// Consumes body lines verbatim until a closing fence or end of input.
    fn consume_fence(&mut self, language: Option<String>) {
        let start = self.pos;
        let mut end = start + 1;
        let mut closed = false;

        while end < self.lines.len() {
            if CodeFence::closes(self.lines[end]) {
                closed = true;
                break;
            }
            end += 1;
        }

        let literal = self.lines[start + 1..end].join("\n");
        let consumed = if closed {
            end + 1 - start
        } else {
            log::debug!("unterminated code fence opened at line {start}; closing at end of input");
            end - start
        };
        self.emit(TokenKind::CodeFence { language }, literal, start, consumed);
    }

    /// Consumes a header row, an optional alignment row and the data rows.
    fn consume_table(&mut self) {
        let start = self.pos;
        let header_cells = Table::split_cells(self.lines[start]);
        let mut end = start + 1;

        let column_alignment = match self.lines.get(end).and_then(|l| Table::alignments(l)) {
            Some(alignment) => {
                end += 1;
                alignment
            }
            None => vec![Alignment::Left; header_cells.len()],
        };

        let mut rows = vec![];
        while let Some(line) = self.lines.get(end) {
            if !Table::is_row(line) {
                break;
            }
            rows.push(Table::split_cells(line));
            end += 1;
        }

        let raw = self.lines[start..end].join("\n");
        self.emit(
            TokenKind::Table {
                header_cells,
                rows,
                column_alignment,
            },
            raw,
            start,
            end - start,
        );
    }

    /// Accumulates text lines until a blank line or any other block opener.
    fn consume_paragraph(&mut self) {
        let start = self.pos;
        let mut end = start + 1;
        while let Some(line) = self.lines.get(end) {
            if !self.classifier.classify(line).is_text() {
                break;
            }
            end += 1;
        }

        let raw = Paragraph::join(self.lines[start..end].iter().copied());
        self.emit(TokenKind::Paragraph, raw, start, end - start);
    }
}

/// Tokenizes markdown text into block tokens.
///
/// `\r\n` line endings are normalized to `\n` first.
pub fn tokenize(text: &str) -> Vec<BlockToken> {
    let normalized = text.replace("\r\n", "\n");
    let tokens = BlockTokenizer::new(&normalized).finish();
    log::trace!("tokenized {} bytes into {} block tokens", text.len(), tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::types::ListKind;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn paragraph_lines_accumulate() {
        let tokens = tokenize("one\ntwo\n\nthree");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].raw, "one\ntwo");
        assert_eq!(tokens[0].line_count, 2);
        assert_eq!(tokens[1].kind, TokenKind::Blank);
        assert_eq!(tokens[2].raw, "three");
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn paragraph_stops_at_other_openers() {
        assert_eq!(
            kinds("text\n# Heading\nmore\n- item"),
            vec![
                TokenKind::Paragraph,
                TokenKind::Heading { level: 1 },
                TokenKind::Paragraph,
                TokenKind::ListItem {
                    depth: 0,
                    kind: ListKind::Unordered,
                    number: None,
                    checked: None
                },
            ]
        );
    }

    #[test]
    fn closed_fence_consumes_both_markers() {
        let tokens = tokenize("```rust\nfn main() {}\n```\nafter");
        assert_eq!(
            tokens[0].kind,
            TokenKind::CodeFence {
                language: Some("rust".to_string())
            }
        );
        assert_eq!(tokens[0].raw, "fn main() {}");
        assert_eq!(tokens[0].line_count, 3);
        assert_eq!(tokens[1].raw, "after");
    }

    #[test]
    fn fence_body_is_not_tokenized() {
        let tokens = tokenize("```\n# not a heading\n- not a list\n```");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw, "# not a heading\n- not a list");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let tokens = tokenize("```js\nconsole.log(1)");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::CodeFence {
                language: Some("js".to_string())
            }
        );
        assert_eq!(tokens[0].raw, "console.log(1)");
        assert_eq!(tokens[0].line_count, 2);
    }

    #[test]
    fn table_with_alignment_row() {
        let tokens = tokenize("| A | B |\n|:-:|--:|\n| 1 | 2 |\n| 3 | 4 |\nafter");
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Table {
                header_cells: vec!["A".into(), "B".into()],
                rows: vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
                column_alignment: vec![Alignment::Center, Alignment::Right],
            }
        );
        assert_eq!(tokens[0].line_count, 4);
    }

    #[test]
    fn table_without_alignment_row_defaults_left() {
        let tokens = tokenize("| A | B | C |\n| 1 | 2 | 3 |");
        match &tokens[0].kind {
            TokenKind::Table {
                rows,
                column_alignment,
                ..
            } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(column_alignment, &vec![Alignment::Left; 3]);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn blockquote_lines_are_separate_tokens() {
        let tokens = tokenize("> outer\n>> inner");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Blockquote { depth: 1 });
        assert_eq!(tokens[0].raw, "outer");
        assert_eq!(tokens[1].kind, TokenKind::Blockquote { depth: 2 });
        assert_eq!(tokens[1].raw, "> inner");
    }

    #[test]
    fn crlf_is_normalized() {
        let tokens = tokenize("# Title\r\nbody\r\n");
        assert_eq!(tokens[0].raw, "Title");
        assert_eq!(tokens[1].raw, "body");
    }
}
