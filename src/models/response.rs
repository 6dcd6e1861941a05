// Prometheus HTTP API response models

use serde::Deserialize;
use std::collections::HashMap;

/// GET /api/v1/label/__name__/values
#[derive(Debug, Clone, Deserialize)]
pub struct LabelValuesResponse {
    pub status: String,
    pub data: Vec<String>,
}

/// GET /api/v1/query_range
#[derive(Debug, Clone, Deserialize)]
pub struct RangeQueryResponse {
    pub status: String,
    pub data: RangeData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeData {
    #[serde(default)]
    pub result_type: String,
    pub result: Vec<RangeSeries>,
}

/// One matrix series: its label set and the (timestamp, value) samples.
/// Timestamps arrive as JSON numbers (possibly fractional seconds), values as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeSeries {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    pub values: Vec<(f64, String)>,
}
