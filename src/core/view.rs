//! Sorted views over a group's entries
//!
//! Sorting never touches [`GroupedData`](crate::types::GroupedData); a
//! [`SortState`] is kept per displayed group and applied on read.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dates::parse_display_date;
use crate::error::GrouperError;
use crate::types::GroupEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Date,
    Location,
    Address,
    OrderNumber,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort selection of one displayed group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Clicking the active column flips direction; another column starts ascending
    pub fn toggle(self, column: SortColumn) -> Self {
        match self.column {
            Some(active) if active == column => Self::by(column, self.direction.reversed()),
            _ => Self::by(column, SortDirection::Ascending),
        }
    }
}

/// Entries of a group in the order selected by `state`
pub fn sorted_view<'a>(entries: &'a [GroupEntry], state: &SortState) -> Vec<&'a GroupEntry> {
    let mut view: Vec<&GroupEntry> = entries.iter().collect();
    if let Some(column) = state.column {
        view.sort_by(|a, b| {
            let ord = compare(column, a, b);
            match state.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    view
}

fn compare(column: SortColumn, a: &GroupEntry, b: &GroupEntry) -> Ordering {
    match column {
        SortColumn::Date => compare_dates(&a.rounding_date, &b.rounding_date),
        SortColumn::Location => a.location.cmp(&b.location),
        SortColumn::Address => a.street.cmp(&b.street),
        SortColumn::OrderNumber => a.order_key.cmp(&b.order_key),
    }
}

/// Calendar order for rendered dates; unparseable values sort after dates
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_display_date(a), parse_display_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

impl FromStr for SortColumn {
    type Err = GrouperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(|c: char| c == '-' || c == ' ', "_").as_str() {
            "date" => Ok(SortColumn::Date),
            "location" => Ok(SortColumn::Location),
            "address" | "street" => Ok(SortColumn::Address),
            "order" | "order_number" | "order_key" => Ok(SortColumn::OrderNumber),
            other => Err(GrouperError::InvalidSort(format!(
                "unknown column '{}' (expected date, location, address or order)",
                other
            ))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = GrouperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(GrouperError::InvalidSort(format!(
                "unknown direction '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortColumn::Date => "date",
            SortColumn::Location => "location",
            SortColumn::Address => "address",
            SortColumn::OrderNumber => "order",
        };
        write!(f, "{}", name)
    }
}
