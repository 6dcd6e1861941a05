// Shared test helpers

use promwide::models::RangeSeries;
use std::collections::HashMap;

pub fn series(values: &[(f64, &str)]) -> RangeSeries {
    RangeSeries {
        metric: HashMap::new(),
        values: values
            .iter()
            .map(|(ts, v)| (*ts, (*v).to_string()))
            .collect(),
    }
}
