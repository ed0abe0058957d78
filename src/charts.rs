// src/charts.rs
use crate::config::DashboardConfig;
use crate::errors::ServerError;
use crate::filters::EncodedFilter;
use url::Url;

pub const CHART_WIDTH: &str = "800px";
pub const CHART_HEIGHT: &str = "600px";

/// Embed URL for every configured chart, with `filter` applied when non-empty.
pub fn chart_urls(
    cfg: &DashboardConfig,
    filter: Option<&EncodedFilter>,
) -> Result<Vec<String>, ServerError> {
    let base = format!("{}/embed/charts", cfg.charts_base_url);

    cfg.chart_ids
        .iter()
        .map(|id| {
            let mut url = Url::parse(&base).map_err(|e| {
                tracing::error!("chart base url rejected: {e}");
                ServerError::InternalError
            })?;

            {
                let mut q = url.query_pairs_mut();
                q.append_pair("id", id)
                    .append_pair("maxDataAge", "3600")
                    .append_pair("theme", "dark")
                    .append_pair("autoRefresh", "true");
                if let Some(f) = filter.filter(|f| !f.is_empty()) {
                    q.append_pair("filter", &f.to_json());
                }
            }

            Ok(url.into())
        })
        .collect()
}
