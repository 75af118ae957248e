/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block opener matches a line.
pub struct Paragraph;

impl Paragraph {
    /// Joins accumulated paragraph lines, trimming each one.
    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
