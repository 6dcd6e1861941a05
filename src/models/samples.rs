// Wide sample table: timestamp rows, one column per observed series alias

use super::RangeSeries;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Timestamp-keyed sample table accumulated over a collection run.
///
/// Rows are keyed by integer epoch seconds (BTreeMap keeps them ascending for
/// serialization). Columns are series aliases `{metric}_{index}`, ordered by
/// first observation. Duplicate `(timestamp, alias)` writes are
/// last-write-wins; adjacent windows share a boundary timestamp, so the shared
/// sample is written twice with the same value.
///
/// The per-response index is only stable across windows if the upstream
/// result ordering is stable for that metric. That is not enforced here; if
/// Prometheus reorders series between windows, positional aliases will mix
/// their values.
#[derive(Debug, Default)]
pub struct WideTable {
    rows: BTreeMap<i64, HashMap<String, String>>,
    aliases: Vec<String>,
    seen: HashSet<String>,
}

impl WideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one query_range result into the table. Series are aliased by
    /// position in the response; sample timestamps are truncated to whole
    /// seconds.
    pub fn ingest_series(&mut self, metric: &str, result: &[RangeSeries]) {
        for (index, series) in result.iter().enumerate() {
            let alias = format!("{}_{}", metric, index);
            if self.seen.insert(alias.clone()) {
                self.aliases.push(alias.clone());
            }
            for (timestamp, value) in &series.values {
                self.rows
                    .entry(*timestamp as i64)
                    .or_default()
                    .insert(alias.clone(), value.clone());
            }
        }
    }

    /// Aliases in first-seen order; determines CSV column order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Rows in ascending timestamp order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, &HashMap<String, String>)> {
        self.rows.iter().map(|(ts, cells)| (*ts, cells))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, timestamp: i64, alias: &str) -> Option<&str> {
        self.rows
            .get(&timestamp)
            .and_then(|cells| cells.get(alias))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
