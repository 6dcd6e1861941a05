// Windowed collection loop: one range query per metric/window pair.
// Fully sequential; one request in flight at a time.

use crate::config::ExportConfig;
use crate::models::WideTable;
use crate::prom_repo::PromRepo;
use crate::queries::QueryCatalog;
use crate::window::Windows;

/// Walks the configured range window by window and folds every non-empty
/// query_range result into a WideTable. Any transport or decode failure
/// aborts the run; an aborted run keeps nothing.
pub async fn collect(
    repo: &PromRepo,
    catalog: &QueryCatalog,
    config: &ExportConfig,
) -> anyhow::Result<WideTable> {
    let mut metrics = repo.list_metric_names().await?;
    metrics.extend(catalog.derived_names().map(String::from));
    tracing::info!(metrics = metrics.len(), "metric name list resolved");

    let mut table = WideTable::new();
    let mut queries_issued: u64 = 0;

    for window in Windows::new(config.start, config.end, config.window_secs) {
        tracing::info!(start = window.start, end = window.end, "collection window");
        for metric in &metrics {
            let Some(query) = catalog.resolve(metric) else {
                continue;
            };
            let result = repo
                .query_range(&query, window.start, window.end, &config.step)
                .await?;
            queries_issued += 1;
            if result.is_empty() {
                continue;
            }
            table.ingest_series(metric, &result);
        }
    }

    tracing::info!(
        aliases = table.aliases().len(),
        rows = table.row_count(),
        queries_issued,
        "collection finished"
    );
    Ok(table)
}
