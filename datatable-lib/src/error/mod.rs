//! Error types

mod dataset;
mod edit;
mod field;

pub use dataset::*;
pub use edit::*;
pub use field::*;
