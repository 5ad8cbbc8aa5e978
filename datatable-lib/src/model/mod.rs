//! Table data model

mod athlete;
mod column;
mod row;
mod value;

pub use athlete::*;
pub use column::*;
pub use row::*;
pub use value::*;
