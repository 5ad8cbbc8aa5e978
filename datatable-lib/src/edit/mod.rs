//! Inline cell editing.
//!
//! At most one cell is edited at a time. The session is a single sum-typed
//! value, so a half-identified session cannot exist.

mod session;
mod tracker;

pub use session::*;
pub use tracker::*;
