//! Typed row arithmetic for triangular towers.
//!
//! Tower rows are numbered starting at one. Row `k` nominally holds
//! `2k - 1` characters, and after separator insertion spans
//! `2(2k - 1) - 1` display columns. [`RowIndex`] and [`RowCount`] carry
//! that arithmetic so the pipeline stages never repeat it.

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// A 1-based row number within a tower.
///
/// The first row is number one, not zero. This is enforced at the type
/// level via [`Constrained<usize, StrictlyPositive>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowIndex(Constrained<usize, StrictlyPositive>);

impl RowIndex {
    /// Creates a [`RowIndex`] from a 1-based row number.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `number` is zero.
    pub fn new(number: usize) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(number)?))
    }

    /// The 1-based row number.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.into_inner()
    }

    /// The number of characters the row nominally holds (`2k - 1`).
    #[must_use]
    pub fn nominal_len(self) -> usize {
        2 * self.get() - 1
    }

    /// The display width of the row once its characters are separated by
    /// single spaces (`2 * nominal_len - 1`).
    #[must_use]
    pub fn enhanced_width(self) -> usize {
        2 * self.nominal_len() - 1
    }
}

/// The number of rows a name produces.
///
/// A name of `n` characters produces `ceil(sqrt(n))` rows, so the total
/// nominal capacity `sum_{k=1..count}(2k - 1) = count²` is the smallest
/// perfect square that fits the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(usize);

impl RowCount {
    /// Creates a [`RowCount`] from a known number of rows.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    /// Computes the row count for a name of `char_count` characters.
    ///
    /// An empty name yields a count of zero.
    #[must_use]
    pub fn for_name_len(char_count: usize) -> Self {
        Self(ceil_sqrt(char_count))
    }

    /// The number of rows.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Iterates over the row indices `1..=count`, in order.
    pub fn indices(self) -> impl Iterator<Item = RowIndex> {
        (1..=self.0).map(|number| RowIndex::new(number).expect("row numbering starts at one"))
    }

    /// The index of the last row, or `None` for an empty tower.
    #[must_use]
    pub fn last_index(self) -> Option<RowIndex> {
        RowIndex::new(self.0).ok()
    }
}

/// Integer `ceil(sqrt(n))`.
fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}
