//! Name tower rendering.
//!
//! A name tower renders a name as a triangle: row *k* (1-indexed) holds the
//! next `2k - 1` characters of the name, uppercased, with internal spaces
//! shown as asterisks, characters separated by single spaces, every row
//! centered on the final row, and the final row padded with asterisks when
//! the name runs out of characters.
//!
//! The computational core is in the internal [`core`] module; [`generate`]
//! is a thin adapter over it.
//!
//! # Example
//!
//! ```
//! use name_tower::models::text::tower;
//!
//! let tower = tower::generate(Some("First Middle Last")).unwrap();
//! assert_eq!(tower.lines().count(), 5);
//! assert!(tower.ends_with("T * * * * * * * *"));
//! ```

mod core;

pub use self::core::{Name, TowerError};

/// Generates the tower rendering of `name`.
///
/// Absence is the only invalid input; any present string, including the
/// empty string, renders successfully. The empty string yields an empty
/// tower (zero rows, empty output).
///
/// Rows are joined with `\n` and there is no trailing line break.
///
/// # Errors
///
/// Returns [`TowerError::MissingName`] if `name` is `None`.
pub fn generate(name: Option<&str>) -> Result<String, TowerError> {
    let name = Name::new(name)?;
    Ok(self::core::generate(&name))
}
