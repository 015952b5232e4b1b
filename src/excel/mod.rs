//! Excel import/export
//!
//! - Import: spreadsheet bytes → row table of the first worksheet
//! - Export: grouped data → one worksheet per group

mod exporter;
mod importer;

pub use exporter::{sanitize_sheet_name, SpreadsheetExporter, MAX_SHEET_NAME_CHARS};
pub use importer::SpreadsheetParser;
