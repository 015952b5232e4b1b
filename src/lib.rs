//! Sample Grouper - groups delivery task exports by sample description
//!
//! Reads the first worksheet of a task export, validates its header row,
//! splits every task's collo description into sample items and groups the
//! tasks per sample. The grouped result can be written back to Excel with one
//! worksheet per sample.
//!
//! # Example
//!
//! ```no_run
//! use sample_grouper::excel::SpreadsheetExporter;
//! use sample_grouper::pipeline::process_file;
//! use sample_grouper::types::HeaderLabels;
//! use std::path::Path;
//!
//! let labels = HeaderLabels::english();
//! let outcome = process_file(Path::new("tasks.xlsx"), &labels)?;
//!
//! println!("Samples: {}", outcome.summary.total);
//! println!("Orders: {}", outcome.summary.orders_joined());
//!
//! SpreadsheetExporter::new(&outcome.summary.data, labels)
//!     .export(Path::new(labels.export_filename))?;
//! # Ok::<(), sample_grouper::error::GrouperError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{GrouperError, GrouperResult};
pub use types::{GroupEntry, GroupSummary, GroupedData, HeaderLabels, OrderSet, Record};
