use thiserror::Error;

/// Errors that can occur while generating a name tower.
///
/// This enum is marked `#[non_exhaustive]` and may include additional
/// variants in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TowerError {
    /// No name was provided.
    ///
    /// This is the only failure mode: it is raised at the boundary, before
    /// any pipeline stage runs. All row arithmetic downstream is derived
    /// from the row count and cannot fail for a present name.
    #[error("name must not be absent")]
    MissingName,
}
