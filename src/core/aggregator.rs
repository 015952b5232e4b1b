//! Grouping of records by cleaned description label

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Group, GroupSummary, GroupedData, OrderSet, Record};

/// Quantity prefix in front of a description item, e.g. "• 3x Mo "
const QUANTITY_PREFIX: &str = r"^•? *\d+x\s*Mo\s*";

fn quantity_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(QUANTITY_PREFIX).expect("quantity prefix pattern is valid"))
}

/// Buckets description items into groups
pub struct GroupAggregator;

impl GroupAggregator {
    /// Trim a description item and strip its quantity prefix
    pub fn clean_label(item: &str) -> String {
        quantity_prefix().replace(item.trim(), "").into_owned()
    }

    /// Group all description items of `records`.
    ///
    /// Every item adds one entry and counts once towards `total`. Groups are
    /// returned largest first; equal sizes keep first-seen order.
    pub fn aggregate(records: &[Record]) -> GroupSummary {
        records
            .iter()
            .flat_map(|record| record.raw_descriptions.iter().map(move |item| (record, item)))
            .fold(Accumulator::default(), |mut acc, (record, item)| {
                acc.push(Self::clean_label(item), record);
                acc
            })
            .finish()
    }
}

#[derive(Default)]
struct Accumulator {
    positions: HashMap<String, usize>,
    groups: Vec<Group>,
    orders: OrderSet,
    total: usize,
}

impl Accumulator {
    fn push(&mut self, label: String, record: &Record) {
        let idx = match self.positions.get(&label) {
            Some(&idx) => idx,
            None => {
                self.groups.push(Group::new(label.clone()));
                self.positions.insert(label, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].entries.push(record.entry());
        self.orders.insert(&record.order_key);
        self.total += 1;
    }

    fn finish(mut self) -> GroupSummary {
        // sort_by is stable
        self.groups.sort_by(|a, b| b.len().cmp(&a.len()));
        GroupSummary {
            data: GroupedData::from_groups(self.groups),
            orders: self.orders,
            total: self.total,
        }
    }
}
