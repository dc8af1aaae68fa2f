//! Tower rendering: joining rows into the final string.

/// Joins centered rows with single line breaks.
///
/// No trailing break after the last row and no leading break before the
/// first. An empty row sequence renders as the empty string.
pub(super) fn render(rows: &[String]) -> String {
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_rows_without_trailing_break() {
        let rows = vec!["  A".to_owned(), "B C D".to_owned()];
        assert_eq!(render(&rows), "  A\nB C D");
    }

    #[test]
    fn single_row_has_no_breaks() {
        assert_eq!(render(&["A".to_owned()]), "A");
    }

    #[test]
    fn empty_sequence_renders_empty_string() {
        assert_eq!(render(&[]), "");
    }
}
