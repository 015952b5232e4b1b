//! Grouped data → one worksheet per group

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::error::{GrouperError, GrouperResult};
use crate::types::{Group, GroupedData, HeaderLabels};

/// Longest sheet name Excel accepts
pub const MAX_SHEET_NAME_CHARS: usize = 31;

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Writes each group to its own worksheet
pub struct SpreadsheetExporter<'a> {
    data: &'a GroupedData,
    labels: HeaderLabels,
}

impl<'a> SpreadsheetExporter<'a> {
    pub fn new(data: &'a GroupedData, labels: HeaderLabels) -> Self {
        Self { data, labels }
    }

    /// Worksheet names in group order, sanitized and unique
    pub fn sheet_names(&self) -> Vec<String> {
        let mut taken = HashSet::new();
        self.data
            .iter()
            .map(|group| unique_sheet_name(&sanitize_sheet_name(&group.label), &mut taken))
            .collect()
    }

    /// Build the workbook in memory.
    ///
    /// Fails with [`GrouperError::EmptyData`] when there are no groups.
    pub fn to_buffer(&self) -> GrouperResult<Vec<u8>> {
        if self.data.is_empty() {
            return Err(GrouperError::EmptyData);
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for (group, sheet_name) in self.data.iter().zip(self.sheet_names()) {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_name).map_err(|e| {
                GrouperError::Export(format!("Failed to set worksheet name '{}': {}", sheet_name, e))
            })?;
            self.write_group(worksheet, group, &header_format)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| GrouperError::Export(format!("Failed to build Excel file: {}", e)))
    }

    /// Write the workbook to `output_path`; nothing is written on error
    pub fn export(&self, output_path: &Path) -> GrouperResult<()> {
        let buffer = self.to_buffer()?;
        std::fs::write(output_path, buffer)?;
        info!(
            path = %output_path.display(),
            sheets = self.data.len(),
            "exported grouped workbook"
        );
        Ok(())
    }

    fn write_group(
        &self,
        worksheet: &mut Worksheet,
        group: &Group,
        header_format: &Format,
    ) -> GrouperResult<()> {
        for (col, header) in self.labels.export_headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, header_format)
                .map_err(|e| GrouperError::Export(format!("Failed to write header: {}", e)))?;
        }

        for (idx, entry) in group.entries.iter().enumerate() {
            let row = (idx + 1) as u32;
            let cells = [
                &entry.rounding_date,
                &entry.location,
                &entry.street,
                &entry.order_key,
            ];
            for (col, value) in cells.iter().enumerate() {
                worksheet
                    .write_string(row, col as u16, value.as_str())
                    .map_err(|e| GrouperError::Export(format!("Failed to write cell: {}", e)))?;
            }
        }

        worksheet.autofit();
        Ok(())
    }
}

/// Make a label acceptable as an Excel sheet name
pub fn sanitize_sheet_name(label: &str) -> String {
    let replaced: String = label
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let truncated: String = replaced
        .trim_start_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    let mut name = truncated.trim_end_matches('\'').to_string();
    if name.trim().is_empty() {
        name = "Sheet".to_string();
    }
    // Reserved by Excel
    if name.eq_ignore_ascii_case("history") {
        name.push('_');
    }
    name
}

/// Suffix " (n)" until the name is unused (case-insensitive)
fn unique_sheet_name(base: &str, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut n = 2;
    while taken.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_CHARS - suffix.chars().count();
        let stem: String = base.chars().take(keep).collect();
        candidate = format!("{}{}", stem.trim_end_matches('\''), suffix);
        n += 1;
    }
    taken.insert(candidate.to_lowercase());
    candidate
}
