use super::TowerError;

/// A validated tower input name.
///
/// Constructing a `Name` is the boundary check for the pipeline: absence is
/// the only invalid input. Any present string, including the empty string,
/// is a valid name. The pipeline stages accept only `Name`, so the check
/// cannot be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Creates a [`Name`] from an optional input string.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::MissingName`] if `name` is `None`.
    pub fn new(name: Option<&str>) -> Result<Self, TowerError> {
        name.map(|value| Self(value.to_owned()))
            .ok_or(TowerError::MissingName)
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number of characters in the name.
    ///
    /// Counted in `char`s, not bytes, so non-ASCII names still produce the
    /// right row count.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
