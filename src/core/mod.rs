//! Record extraction and grouping

pub mod aggregator;
pub mod dates;
pub mod extractor;
pub mod view;

pub use aggregator::GroupAggregator;
pub use extractor::{missing_headers, ColumnIndexes, RecordExtractor};
pub use view::{sorted_view, SortColumn, SortDirection, SortState};
