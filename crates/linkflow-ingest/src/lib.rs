//! Linkflow Ingest — delimited-text roster parsing.
//!
//! The admin page pastes a spreadsheet export as comma-delimited text; this
//! crate turns that blob into `Member` records, tagging each one as it goes.

pub mod roster;
pub mod scan;

pub use roster::{parse_roster, IngestReport};
pub use scan::split_line;
