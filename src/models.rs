//! Public rendering models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`text`]) based on an opinionated taxonomy. This organization may evolve
//! as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public
//! API. The public functions and types in the model module are thin
//! adapters that delegate to the model-specific core API.

pub mod text;
