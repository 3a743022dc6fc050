//! HTTP client for the league's schedule service

use anyhow::{Context, Result};
use kbo_core::crawl::ScheduleSource;
use kbo_core::protocol::{RawRow, ScheduleQuery, ScheduleResponse};
use kbo_core::{ScheduleConfig, ScheduleError, ScheduleResult};

use crate::utils::tui::create_spinner;

/// The service rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct HttpSource {
    http: reqwest::Client,
    endpoint: String,
    league_id: String,
    series_ids: String,
}

impl HttpSource {
    pub fn new(config: &ScheduleConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            league_id: config.league_id.clone(),
            series_ids: config.series_ids.clone(),
        })
    }

    async fn post_month(&self, year: i32, month: u32) -> ScheduleResult<String> {
        let query = ScheduleQuery::new(&self.league_id, &self.series_ids, year, month);
        let fetch_error = |reason: String| ScheduleError::Fetch { year, month, reason };

        let resp = self
            .http
            .post(&self.endpoint)
            .form(&query)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", resp.status())));
        }

        resp.text().await.map_err(|e| fetch_error(e.to_string()))
    }
}

impl ScheduleSource for HttpSource {
    async fn fetch_month(&self, year: i32, month: u32) -> ScheduleResult<Vec<RawRow>> {
        let spinner = create_spinner(format!("Fetching {year}.{month:02}"));
        let body = self.post_month(year, month).await;
        spinner.finish_and_clear();

        let response: ScheduleResponse =
            serde_json::from_str(&body?).map_err(|e| ScheduleError::Decode {
                year,
                month,
                reason: e.to_string(),
            })?;

        Ok(response.rows)
    }
}
