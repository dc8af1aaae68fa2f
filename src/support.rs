//! Supporting utilities used by models.
//!
//! These modules are public because they're useful, but their APIs are not
//! stable and may change as models evolve.

pub mod constraint;
pub mod rows;
