// Metric identifier -> PromQL query resolution

/// Label filter appended to raw container_* metrics: only series belonging to
/// a docker stack.
const CONTAINER_FILTER: &str = "{container_label_com_docker_stack_namespace!=\"\"}";

/// Label filter appended to raw node_* metrics.
const NODE_FILTER: &str = "{mode=\"user\"}";

/// Derived metric identifiers and their aggregation expressions. These are
/// not metric names known to Prometheus; they are computed per query.
const DERIVED_QUERIES: &[(&str, &str)] = &[
    (
        "node_cpu_usage",
        "(sum(irate(container_cpu_usage_seconds_total{container_label_com_docker_stack_namespace!=\"\"}[5s])) by (instance)) * 100",
    ),
    (
        "user_cpu_usage",
        "sum(rate(container_cpu_user_seconds_total{container_label_com_docker_stack_namespace!=\"\"}[5s])) by (name) * 100",
    ),
    (
        "system_cpu_usage",
        "sum(rate(container_cpu_system_seconds_total{container_label_com_docker_stack_namespace!=\"\"}[5s])) by (name) * 100",
    ),
    (
        "memory_usage_per_container",
        "(container_memory_working_set_bytes{container_label_com_docker_stack_namespace!=\"\"} / ignoring(container_spec_memory_limit_bytes) (container_spec_memory_limit_bytes{container_label_com_docker_stack_namespace!=\"\"} > 0)) * 100",
    ),
    (
        "network_receive_bytes_per_container",
        "rate(container_network_receive_bytes_total{container_label_com_docker_stack_namespace!=\"\"}[5s])",
    ),
    (
        "network_transmit_bytes_per_container",
        "rate(container_network_transmit_bytes_total{container_label_com_docker_stack_namespace!=\"\"}[5s])",
    ),
];

/// Lookup table from metric identifier to the concrete query string sent to
/// query_range. Derived identifiers resolve by exact match before the prefix
/// rules so their expressions are never shadowed by the node_ filter.
#[derive(Debug, Default)]
pub struct QueryCatalog;

impl QueryCatalog {
    pub fn new() -> Self {
        QueryCatalog
    }

    /// Identifiers the catalog computes via aggregation expressions; appended
    /// to the fetched metric name list before collection.
    pub fn derived_names(&self) -> impl Iterator<Item = &'static str> {
        DERIVED_QUERIES.iter().map(|(name, _)| *name)
    }

    /// Resolves an identifier to a query string, or None when the metric is
    /// out of collection scope and must be skipped.
    pub fn resolve(&self, metric: &str) -> Option<String> {
        if let Some((_, expr)) = DERIVED_QUERIES.iter().find(|(name, _)| *name == metric) {
            return Some((*expr).to_string());
        }
        if metric.starts_with("container_") {
            return Some(format!("{}{}", metric, CONTAINER_FILTER));
        }
        if metric.starts_with("node_") {
            return Some(format!("{}{}", metric, NODE_FILTER));
        }
        None
    }
}
