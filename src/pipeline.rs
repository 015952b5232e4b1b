//! File → grouped summary
//!
//! Decoding failures are the only hard error. An empty first sheet and a
//! header row missing required columns both produce an empty summary; the
//! latter also reports which headers were missing so callers can show them.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::{GroupAggregator, RecordExtractor};
use crate::error::{GrouperError, GrouperResult};
use crate::excel::SpreadsheetParser;
use crate::types::{GroupSummary, HeaderLabels, SheetTable};

/// Grouping result plus any headers that prevented grouping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessOutcome {
    pub summary: GroupSummary,
    pub missing_headers: Vec<String>,
}

impl ProcessOutcome {
    /// User-facing notice when required headers were missing
    pub fn notice(&self) -> Option<String> {
        if self.missing_headers.is_empty() {
            None
        } else {
            Some(GrouperError::MissingHeaders(self.missing_headers.clone()).to_string())
        }
    }
}

/// Decode and group spreadsheet bytes
pub fn process_bytes(bytes: &[u8], labels: &HeaderLabels) -> GrouperResult<ProcessOutcome> {
    let table = SpreadsheetParser::parse(bytes)?;
    Ok(process_table(&table, labels))
}

/// Read a spreadsheet file from disk and group it
pub fn process_file(path: &Path, labels: &HeaderLabels) -> GrouperResult<ProcessOutcome> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    process_bytes(&bytes, labels)
}

/// Group an already decoded table
pub fn process_table(table: &SheetTable, labels: &HeaderLabels) -> ProcessOutcome {
    let Some(header) = table.header() else {
        debug!("first sheet has no rows");
        return ProcessOutcome::default();
    };

    let extractor = match RecordExtractor::from_header(header, labels) {
        Ok(extractor) => extractor,
        Err(GrouperError::MissingHeaders(missing)) => {
            return ProcessOutcome {
                summary: GroupSummary::empty(),
                missing_headers: missing,
            };
        }
        Err(e) => {
            warn!(error = %e, "header validation failed");
            return ProcessOutcome::default();
        }
    };

    let records = extractor.extract_all(table.data_rows());
    let summary = GroupAggregator::aggregate(&records);
    info!(
        records = records.len(),
        groups = summary.data.len(),
        total = summary.total,
        orders = summary.orders.len(),
        "grouped records"
    );

    ProcessOutcome {
        summary,
        missing_headers: Vec::new(),
    }
}
