use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub prometheus: PrometheusConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrometheusConfig {
    /// Base URL of the Prometheus query API, e.g. "http://prometheus.cassandracluster.com".
    pub endpoint: String,
    /// SOCKS5 proxy all requests are routed through, e.g. "socks5://localhost:1337".
    pub socks_proxy: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Global collection range start, epoch seconds.
    pub start: i64,
    /// Global collection range end, epoch seconds.
    pub end: i64,
    /// Query resolution step passed to query_range (Prometheus duration, e.g. "1s").
    #[serde(default = "default_step")]
    pub step: String,
    /// Width of one collection window in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: i64,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_step() -> String {
    "1s".into()
}

fn default_window_secs() -> i64 {
    300
}

fn default_output_path() -> String {
    "prometheus_metrics_wide.csv".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.prometheus.endpoint.is_empty(),
            "prometheus.endpoint must be non-empty"
        );
        anyhow::ensure!(
            self.prometheus.timeout_secs > 0,
            "prometheus.timeout_secs must be > 0, got {}",
            self.prometheus.timeout_secs
        );
        anyhow::ensure!(
            self.export.end >= self.export.start,
            "export.end must be >= export.start, got start={} end={}",
            self.export.start,
            self.export.end
        );
        anyhow::ensure!(!self.export.step.is_empty(), "export.step must be non-empty");
        anyhow::ensure!(
            self.export.window_secs > 0,
            "export.window_secs must be > 0, got {}",
            self.export.window_secs
        );
        anyhow::ensure!(
            !self.export.output_path.is_empty(),
            "export.output_path must be non-empty"
        );
        Ok(())
    }
}
