// Prometheus query API client via reqwest

use crate::config::PrometheusConfig;
use crate::models::{LabelValuesResponse, RangeQueryResponse, RangeSeries};
use std::time::Duration;
use tracing::instrument;

pub struct PromRepo {
    client: reqwest::Client,
    endpoint: String,
}

impl PromRepo {
    pub fn connect(config: &PrometheusConfig) -> anyhow::Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(proxy) = &config.socks_proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// All metric names known to the server (GET /api/v1/label/__name__/values).
    #[instrument(skip(self), fields(repo = "prometheus", operation = "list_metric_names"))]
    pub async fn list_metric_names(&self) -> anyhow::Result<Vec<String>> {
        let url = format!("{}/api/v1/label/__name__/values", self.endpoint);
        let resp: LabelValuesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        anyhow::ensure!(
            resp.status == "success",
            "label values query returned status {:?}",
            resp.status
        );
        Ok(resp.data)
    }

    /// One range query over [start, end] at the given resolution step
    /// (GET /api/v1/query_range). An empty result set is not an error.
    #[instrument(skip(self, query), fields(repo = "prometheus", operation = "query_range"))]
    pub async fn query_range(
        &self,
        query: &str,
        start: i64,
        end: i64,
        step: &str,
    ) -> anyhow::Result<Vec<RangeSeries>> {
        let url = format!("{}/api/v1/query_range", self.endpoint);
        let start_param = start.to_string();
        let end_param = end.to_string();
        let resp: RangeQueryResponse = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("start", start_param.as_str()),
                ("end", end_param.as_str()),
                ("step", step),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        anyhow::ensure!(
            resp.status == "success",
            "range query returned status {:?}",
            resp.status
        );
        Ok(resp.data.result)
    }
}
