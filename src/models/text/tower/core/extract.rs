//! Row extraction: slicing the name into raw rows.

use crate::support::rows::RowCount;

use super::Name;

/// Slices the name into raw rows of nominal lengths `1, 3, 5, ...`,
/// consuming its characters in order.
///
/// Row *k* takes the next `min(remaining, 2k - 1)` characters. If the name
/// runs out before the last row is full, the last row is lengthened with
/// asterisks to its nominal length. An empty name yields no rows.
///
/// The concatenation of the returned rows' pre-padding characters
/// reproduces the name exactly.
pub(super) fn extract_raw_rows(name: &Name) -> Vec<String> {
    let row_count = RowCount::for_name_len(name.char_count());
    let mut remaining = name.as_str().chars();

    let mut rows: Vec<String> = row_count
        .indices()
        .map(|row| remaining.by_ref().take(row.nominal_len()).collect())
        .collect();

    if let (Some(last_row), Some(last_index)) = (rows.last_mut(), row_count.last_index()) {
        let deficit = last_index.nominal_len() - last_row.chars().count();
        last_row.push_str(&"*".repeat(deficit));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_rows(name: &str) -> Vec<String> {
        extract_raw_rows(&Name::new(Some(name)).unwrap())
    }

    #[test]
    fn slices_name_into_odd_length_rows() {
        let rows = raw_rows("First Middle Last");
        assert_eq!(rows, ["F", "irs", "t Mid", "dle Las", "t********"]);
    }

    #[test]
    fn empty_name_yields_no_rows() {
        assert!(raw_rows("").is_empty());
    }

    #[test]
    fn single_character_fills_one_row() {
        assert_eq!(raw_rows("A"), ["A"]);
    }

    #[test]
    fn exact_square_needs_no_padding() {
        let rows = raw_rows("abcdefghi");
        assert_eq!(rows, ["a", "bcd", "efghi"]);
    }

    #[test]
    fn pads_only_the_last_row() {
        let rows = raw_rows("ab");
        assert_eq!(rows, ["a", "b**"]);
    }

    #[test]
    fn preserves_name_characters_in_order() {
        let name = "First Middle Last";
        let joined = raw_rows(name).concat();

        assert!(joined.starts_with(name));
        assert!(joined[name.len()..].chars().all(|c| c == '*'));
    }
}
