//! HTTP access to the published exports and the backing scripts

use anyhow::{Context, Result};
use chrono::Utc;
use lunch_sheet::requests::{parse_store_options, store_options_url, with_cache_buster};
use lunch_sheet::{DeleteRequest, LookupSheet, OrderBook, ScriptResponse};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

use crate::config::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SheetClient {
    http: reqwest::Client,
    config: Config,
}

impl SheetClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("lunch-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    /// Lookup sheet, or `None` when the export has no header row yet
    pub async fn fetch_lookup(&self) -> Result<Option<LookupSheet>> {
        let text = self.get_export(&self.config.lookup_csv).await?;
        Ok(LookupSheet::from_text(&text, &self.config.lookup_layout))
    }

    pub async fn fetch_orders(&self) -> Result<OrderBook> {
        let text = self.get_export(&self.config.management_csv).await?;
        Ok(OrderBook::from_text(&text, &self.config.management_layout))
    }

    /// Post a delete request; the script answers with a status and message
    pub async fn delete(&self, request: &DeleteRequest) -> Result<ScriptResponse> {
        tracing::debug!(row = ?request.row, "sending delete request");

        // Plain-text body, matching what the browser front end sends.
        let reply = self
            .http
            .post(&self.config.management_script)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(request.to_body()?)
            .send()
            .await
            .context("Failed to reach management script")?
            .error_for_status()
            .context("Management script returned an error status")?
            .text()
            .await?;

        ScriptResponse::parse(&reply).with_context(|| format!("Unexpected management script reply: {}", reply))
    }

    pub async fn store_options(&self) -> Result<Vec<String>> {
        let url = store_options_url(&self.config.settings_script)?;
        let reply = self.get_text(url.as_str()).await?;
        parse_store_options(&reply).with_context(|| format!("Unexpected store list: {}", reply))
    }

    /// Apply daily settings from a validated submit URL; returns the reply text
    pub async fn submit_settings(&self, url: &Url) -> Result<String> {
        self.get_text(url.as_str()).await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get_export(&self, url: &str) -> Result<String> {
        let url = with_cache_buster(url, Utc::now().timestamp_millis());
        let text = self.get_text(&url).await?;
        tracing::debug!(bytes = text.len(), "fetched export");
        Ok(text)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error {} from {}", status, url);
        }

        response.text().await.context("Failed to read response body")
    }
}
