//! Text-rendering models.
//!
//! This module contains models that turn plain strings into formatted
//! multi-line text renderings.

pub mod tower;
