use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::Alignment;

/// Pipe table type: owns row detection, cell splitting and alignment rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    fn separator_cell_regex() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR.get_or_init(|| Regex::new(r"^[-:]+$").expect("Invalid table separator regex"))
    }

    /// A table line begins with `|`.
    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// Splits a row on `|`, trimming cells and dropping the empty cells that
    /// the leading and trailing pipes produce.
    pub fn split_cells(line: &str) -> Vec<String> {
        let mut cells: Vec<&str> = line.trim().split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells.into_iter().map(str::to_string).collect()
    }

    /// Parses an alignment separator row (`|---|:-:|--:|`).
    ///
    /// Returns `None` unless every cell consists only of `-` and `:`.
    pub fn alignments(line: &str) -> Option<Vec<Alignment>> {
        if !Self::is_row(line) {
            return None;
        }
        let cells = Self::split_cells(line);
        if cells.is_empty()
            || !cells
                .iter()
                .all(|c| Self::separator_cell_regex().is_match(c))
        {
            return None;
        }
        Some(cells.iter().map(|c| Self::alignment_of(c)).collect())
    }

    fn alignment_of(cell: &str) -> Alignment {
        let leading = cell.starts_with(':');
        let trailing = cell.ends_with(':');
        if leading && trailing && cell.len() > 1 {
            Alignment::Center
        } else if trailing {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_boundary_cells_only() {
        assert_eq!(Table::split_cells("| A | B |"), vec!["A", "B"]);
        assert_eq!(Table::split_cells("| a || c"), vec!["a", "", "c"]);
    }

    #[test]
    fn rows_start_at_the_first_column() {
        assert!(Table::is_row("| a |"));
        assert!(!Table::is_row("  | a |"));
        assert!(!Table::is_row("a | b"));
    }

    #[test]
    fn lone_pipe_has_no_cells() {
        assert!(Table::split_cells("|").is_empty());
    }

    #[test]
    fn alignment_row() {
        assert_eq!(
            Table::alignments("|:---|:-:|--:|---|"),
            Some(vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::Left
            ])
        );
    }

    #[test]
    fn data_row_is_not_an_alignment_row() {
        assert_eq!(Table::alignments("| 1 | 2 |"), None);
        assert_eq!(Table::alignments("---"), None);
    }
}
