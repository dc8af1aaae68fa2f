//! Row centering: left-padding rows onto a shared axis.

use crate::support::rows::{RowCount, RowIndex};

/// Left-pads every enhanced row with spaces so each row is centered within
/// the width of the final row.
///
/// The final row's enhanced width defines the tower width, so its own
/// padding is zero. Rows are never truncated or right-padded.
///
/// Relies on the extractor's guarantee that row *k* holds exactly `2k - 1`
/// characters, so each enhanced row has a known width.
pub(super) fn center_rows(rows: Vec<String>) -> Vec<String> {
    let count = RowCount::new(rows.len());
    let max_width = count.last_index().map_or(0, RowIndex::enhanced_width);

    count
        .indices()
        .zip(rows)
        .map(|(index, row)| {
            let margin = (max_width - index.enhanced_width()) / 2;
            format!("{}{row}", " ".repeat(margin))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|row| (*row).to_owned()).collect()
    }

    #[test]
    fn centers_rows_on_the_final_row() {
        let rows = owned(&["F", "I R S", "T * M I D"]);

        assert_eq!(
            center_rows(rows),
            ["    F", "  I R S", "T * M I D"]
        );
    }

    #[test]
    fn last_row_gets_no_padding() {
        let rows = owned(&["A", "B * *"]);
        let centered = center_rows(rows);

        assert_eq!(centered.last().unwrap(), "B * *");
    }

    #[test]
    fn single_row_is_unchanged() {
        assert_eq!(center_rows(owned(&["A"])), ["A"]);
    }

    #[test]
    fn empty_sequence_passes_through() {
        assert!(center_rows(Vec::new()).is_empty());
    }

    #[test]
    fn margins_shrink_by_two_per_row() {
        let rows = owned(&["F", "I R S", "T * M I D", "D L E * L A S"]);
        let margins: Vec<usize> = center_rows(rows)
            .iter()
            .map(|row| row.chars().take_while(|&c| c == ' ').count())
            .collect();

        assert_eq!(margins, [6, 4, 2, 0]);
    }
}
