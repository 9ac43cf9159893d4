//! CSV reports of thumbnail inspection outcomes.
//!
//! The writer emits the header up front and flushes after every row, so a
//! reader tailing the file mid-run always sees a valid CSV prefix.

pub use error::{Error, Result};
pub use row::ReportRow;
pub use schema::{NOT_AVAILABLE, Schema};
pub use summary::Summary;
pub use writer::ReportWriter;

mod error;
pub mod row;
pub mod schema;
pub mod summary;
pub mod writer;
