//! Data table core library
//!
//! Column model, a pluggable sort/filter/pagination engine with an in-memory
//! default, and the single-cell edit session tracker used by the table views.

pub mod dataset;
pub mod edit;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;

pub use edit::{AbandonPolicy, CellEdit, EditSession, EditTracker};
pub use engine::{ClientEngine, ColumnSort, Header, HeaderGroup, SortDirection, TableEngine};
pub use model::{Athlete, Column, TableRow, Value};
