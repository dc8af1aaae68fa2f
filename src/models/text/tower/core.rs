//! Core name tower pipeline.
//!
//! The pipeline is four pure stages composed in sequence:
//!
//! 1. [`extract`]: slice the name into raw rows, padding the last row.
//! 2. [`enhance`]: uppercase, substitute spaces, insert separators.
//! 3. [`center`]: left-pad rows so each is centered on the final row.
//! 4. [`render`]: join rows with line breaks.
//!
//! Data flows strictly forward; no stage revisits another's output. An
//! empty name produces an empty row sequence, which every stage passes
//! through unchanged, rendering as the empty string.

mod center;
mod enhance;
mod error;
mod extract;
mod input;
mod render;

pub use error::TowerError;
pub use input::Name;

use center::center_rows;
use enhance::enhance_rows;
use extract::extract_raw_rows;
use render::render;

/// Runs the full tower pipeline on a validated name.
pub(super) fn generate(name: &Name) -> String {
    let raw = extract_raw_rows(name);
    let enhanced = enhance_rows(raw);
    let centered = center_rows(enhanced);
    render(&centered)
}
