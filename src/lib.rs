//! # Name Tower
//!
//! A small library for rendering a name as a triangular text "tower".
//!
//! Given the name `"First Middle Last"`, [`models::text::tower::generate`]
//! produces:
//!
//! ```text
//!         F
//!       I R S
//!     T * M I D
//!   D L E * L A S
//! T * * * * * * * *
//! ```
//!
//! Row *k* (1-indexed) holds `2k - 1` characters taken in order from the
//! name, uppercased, with internal spaces shown as asterisks, characters
//! separated by single spaces, rows centered on the final row, and the
//! final row padded with asterisks when the name runs out.
//!
//! ## Crate layout
//!
//! - [`models`]: The public rendering models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the
//! public API. Model-specific utility code remains private.

pub mod models;
pub mod support;
