//! Spreadsheet decoding: raw bytes → row table of the first worksheet

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use tracing::debug;

use crate::error::{GrouperError, GrouperResult};
use crate::types::{CellValue, Row, SheetTable};

/// Decodes xlsx/xls/xlsb/ods content held in memory
pub struct SpreadsheetParser;

impl SpreadsheetParser {
    /// Decode the first worksheet.
    ///
    /// A workbook without sheets, or whose first sheet has no rows, yields an
    /// empty table. Only undecodable content is an error.
    pub fn parse(bytes: &[u8]) -> GrouperResult<SheetTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| GrouperError::Decode(e.to_string()))?;

        let Some(first) = workbook.sheet_names().first().cloned() else {
            debug!("workbook has no sheets");
            return Ok(SheetTable::default());
        };

        let range = workbook
            .worksheet_range(&first)
            .map_err(|e| GrouperError::Decode(format!("sheet '{}': {}", first, e)))?;

        let table = Self::range_to_table(&range);
        debug!(sheet = %first, rows = table.rows.len(), "decoded first worksheet");
        Ok(table)
    }

    /// Decode every worksheet as `(sheet name, table)` in workbook order
    pub fn parse_workbook(bytes: &[u8]) -> GrouperResult<Vec<(String, SheetTable)>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| GrouperError::Decode(e.to_string()))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| GrouperError::Decode(format!("sheet '{}': {}", name, e)))?;
            let table = Self::range_to_table(&range);
            sheets.push((name, table));
        }
        Ok(sheets)
    }

    fn range_to_table(range: &Range<Data>) -> SheetTable {
        if range.is_empty() {
            return SheetTable::default();
        }
        let rows: Vec<Row> = range
            .rows()
            .map(|row| row.iter().map(Self::convert_cell).collect())
            .collect();
        SheetTable::new(rows)
    }

    /// Date cells keep their serial number so they go through the same
    /// conversion as plain numeric cells.
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Empty,
        }
    }
}
