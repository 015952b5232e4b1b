use crate::error::GrouperError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

//==============================================================================
// Spreadsheet cells
//==============================================================================

/// A single decoded cell from the first worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// True for cells that count as "no value": empty, "", 0, NaN or false
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Bool(b) => !*b,
        }
    }

    /// Numeric value of the cell, including text that parses fully as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Display form of the cell (integral numbers without a fraction)
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Display form, or `sentinel` when the cell is blank
    pub fn or_sentinel(&self, sentinel: &str) -> String {
        if self.is_blank() {
            sentinel.to_string()
        } else {
            self.to_display()
        }
    }
}

pub type Row = Vec<CellValue>;

/// Row table decoded from the first worksheet; row 0 is the header row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    pub rows: Vec<Row>,
}

impl SheetTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// All rows after the header row
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

//==============================================================================
// Records and groups
//==============================================================================

/// One normalized input row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub order_key: String,
    pub rounding_date: String,
    pub location: String,
    pub street: String,
    /// Trimmed comma-separated items of the description cell
    pub raw_descriptions: Vec<String>,
}

impl Record {
    pub fn entry(&self) -> GroupEntry {
        GroupEntry {
            order_key: self.order_key.clone(),
            rounding_date: self.rounding_date.clone(),
            location: self.location.clone(),
            street: self.street.clone(),
        }
    }
}

/// A record as stored under one group label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub order_key: String,
    pub rounding_date: String,
    pub location: String,
    pub street: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub entries: Vec<GroupEntry>,
}

impl Group {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups keyed by label, in display order (largest group first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedData {
    groups: Vec<Group>,
}

impl GroupedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from groups that are already in display order
    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn get(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Sum of entry counts across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupedData {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Unique order keys in first-seen order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct OrderSet {
    keys: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl OrderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the key was already present
    pub fn insert(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        self.keys.push(key.to_string());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Order keys joined with ", " for pasting elsewhere
    pub fn joined(&self) -> String {
        self.keys.join(", ")
    }
}

impl PartialEq for OrderSet {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

/// Result of grouping one uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupSummary {
    pub data: GroupedData,
    pub orders: OrderSet,
    pub total: usize,
}

impl GroupSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn orders_joined(&self) -> String {
        self.orders.joined()
    }
}

//==============================================================================
// Header labels
//==============================================================================

/// Fixed column names of the input export and labels used on output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLabels {
    pub order_key: &'static str,
    pub rounding_date: &'static str,
    pub name: &'static str,
    pub street: &'static str,
    pub place: &'static str,
    pub description: &'static str,
    pub excl_vat: &'static str,
    /// Substituted for blank cells
    pub sentinel: &'static str,
    /// Date, Location, Address, Order number
    pub export_headers: [&'static str; 4],
    pub export_filename: &'static str,
    pub count_label: &'static str,
}

impl HeaderLabels {
    pub const fn english() -> Self {
        Self {
            order_key: "Order key",
            rounding_date: "Rounding-to-date of first task",
            name: "Name of first task",
            street: "Street of first task",
            place: "Place of first task",
            description: "Collo description of first task",
            excl_vat: "Excl. VAT",
            sentinel: "Unknown",
            export_headers: ["Date", "Location", "Address", "Order number"],
            export_filename: "Samples_Export.xlsx",
            count_label: "Count",
        }
    }

    pub const fn dutch() -> Self {
        Self {
            order_key: "Order, sleutel",
            rounding_date: "Afronding (tot), eerste taak",
            name: "Naam, eerste taak",
            street: "Straat, eerste taak",
            place: "Plaats, eerste taak",
            description: "Colliomschrijving, eerste taak",
            excl_vat: "Excl BTW",
            sentinel: "Onbekend",
            export_headers: ["Datum", "Locatie", "Adres", "Ordernummer"],
            export_filename: "Monsters_Export.xlsx",
            count_label: "Aantal",
        }
    }

    /// Headers that must all be present, in reporting order
    pub fn required(&self) -> [&'static str; 7] {
        [
            self.order_key,
            self.rounding_date,
            self.name,
            self.street,
            self.place,
            self.description,
            self.excl_vat,
        ]
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Label preset selector for the CLI and API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub fn labels(self) -> HeaderLabels {
        match self {
            Language::En => HeaderLabels::english(),
            Language::Nl => HeaderLabels::dutch(),
        }
    }
}

impl FromStr for Language {
    type Err = GrouperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "nl" | "dutch" => Ok(Language::Nl),
            other => Err(GrouperError::Decode(format!(
                "unknown label set '{}' (expected en or nl)",
                other
            ))),
        }
    }
}
