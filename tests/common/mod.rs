//! Fixture workbooks for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use sample_grouper::types::HeaderLabels;

/// A fixture cell
#[derive(Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// Build an xlsx workbook whose first sheet holds `rows`
pub fn workbook_bytes(rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

pub fn header_row(labels: &HeaderLabels) -> Vec<Cell> {
    labels.required().into_iter().map(Cell::Text).collect()
}

/// A data row in the column order of [`header_row`]
pub fn task_row(
    order: Cell,
    date: Cell,
    name: Cell,
    street: Cell,
    place: Cell,
    description: Cell,
) -> Vec<Cell> {
    vec![order, date, name, street, place, description, Number(19.95)]
}

/// Four tasks; the third has no description.
///
/// Groups: Sample B (ORD1, ORD2), Sample A (ORD1), Sample C (ORD4)
pub fn sample_export() -> Vec<u8> {
    let labels = HeaderLabels::english();
    workbook_bytes(&[
        header_row(&labels),
        task_row(
            Text("ORD1"),
            Number(44197.0),
            Text("De Hoeve"),
            Text("Dorpsweg 1"),
            Text("Ede"),
            Text("• 3x Mo Sample A, 1x Mo Sample B"),
        ),
        task_row(
            Text("ORD2"),
            Text("15-02-2021"),
            Text("Melkveebedrijf"),
            Text("Kerkstraat 3"),
            Text("Putten"),
            Text("2x Mo Sample B"),
        ),
        task_row(
            Text("ORD3"),
            Number(44200.0),
            Blank,
            Blank,
            Text("Barneveld"),
            Blank,
        ),
        task_row(
            Text("ORD4"),
            Blank,
            Text("Akkerbouw"),
            Text("Akkerweg 9"),
            Text("Lunteren"),
            Text("1x Mo Sample C"),
        ),
    ])
}
