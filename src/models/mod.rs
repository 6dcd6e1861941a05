// Wire and domain models

mod response;
mod samples;

pub use response::{LabelValuesResponse, RangeData, RangeQueryResponse, RangeSeries};
pub use samples::WideTable;
