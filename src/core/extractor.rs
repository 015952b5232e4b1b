//! Header validation and row → [`Record`] conversion

use tracing::{debug, warn};

use super::dates::render_date_cell;
use crate::error::{GrouperError, GrouperResult};
use crate::types::{CellValue, HeaderLabels, Record, Row};

/// Column positions of the fields read from each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndexes {
    pub order_key: usize,
    pub rounding_date: usize,
    pub name: usize,
    pub street: usize,
    pub place: usize,
    pub description: usize,
}

/// Converts data rows into records once the header row has been validated
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    columns: ColumnIndexes,
    sentinel: &'static str,
}

impl RecordExtractor {
    /// Resolve the required headers.
    ///
    /// Fails with [`GrouperError::MissingHeaders`] naming every absent header.
    pub fn from_header(header: &[CellValue], labels: &HeaderLabels) -> GrouperResult<Self> {
        let missing = missing_headers(header, labels);
        if !missing.is_empty() {
            warn!(missing = ?missing, "required headers missing");
            return Err(GrouperError::MissingHeaders(missing));
        }

        let position = |name: &str| find_header(header, name).unwrap_or_default();
        let columns = ColumnIndexes {
            order_key: position(labels.order_key),
            rounding_date: position(labels.rounding_date),
            name: position(labels.name),
            street: position(labels.street),
            place: position(labels.place),
            description: position(labels.description),
        };
        debug!(?columns, "resolved header columns");

        Ok(Self {
            columns,
            sentinel: labels.sentinel,
        })
    }

    pub fn columns(&self) -> ColumnIndexes {
        self.columns
    }

    /// Convert one data row
    pub fn extract(&self, row: &[CellValue]) -> Record {
        let cell = |idx: usize| row.get(idx).unwrap_or(&CellValue::Empty);
        let sentinel = self.sentinel;

        let name = cell(self.columns.name).or_sentinel(sentinel);
        let place = cell(self.columns.place).or_sentinel(sentinel);

        Record {
            order_key: cell(self.columns.order_key).or_sentinel(sentinel),
            rounding_date: render_date_cell(cell(self.columns.rounding_date), sentinel),
            location: format!("{} ({})", name, place),
            street: cell(self.columns.street).or_sentinel(sentinel),
            raw_descriptions: split_descriptions(cell(self.columns.description)),
        }
    }

    pub fn extract_all(&self, rows: &[Row]) -> Vec<Record> {
        rows.iter().map(|row| self.extract(row)).collect()
    }
}

/// Required headers absent from `header`, in required order
pub fn missing_headers(header: &[CellValue], labels: &HeaderLabels) -> Vec<String> {
    labels
        .required()
        .iter()
        .filter(|name| find_header(header, name).is_none())
        .map(|name| name.to_string())
        .collect()
}

/// Index of the first header cell exactly equal to `name`
fn find_header(header: &[CellValue], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, CellValue::Text(s) if s == name))
}

/// Split a description cell on commas. Blank cells yield no items.
fn split_descriptions(cell: &CellValue) -> Vec<String> {
    if cell.is_blank() {
        return Vec::new();
    }
    cell.to_display()
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}
