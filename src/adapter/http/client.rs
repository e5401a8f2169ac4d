//! HTTP Client Abstractions
//!
//! ページ取得の抽象化とreqwestによる実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use super::error::FetchError;
use super::retry::calculate_retry_delay;
use crate::adapter::config::Config;

/// Trait for fetching raw HTML pages
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET the page once and return its body as text
    async fn fetch(&self, url: &str) -> Result<String>;

    /// GET the page, retrying transient failures when the implementation supports it
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        self.fetch(url).await
    }
}

/// reqwest-backed fetcher
///
/// `fetch` は1回だけ試行する。`fetch_with_retry` は一時的な失敗を
/// `max_retries` 回までバックオフ付きで再試行する
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
    max_retries: u32,
}

impl ReqwestPageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let body = self.fetch_once(url).await?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut retry_count = 0;

        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    debug!("Fetched {} ({} bytes)", url, body.len());
                    return Ok(body);
                }
                Err(e) if e.is_retryable() && retry_count < self.max_retries => {
                    retry_count += 1;
                    let delay = calculate_retry_delay(retry_count);
                    warn!(
                        "{} (retry {}/{} in {}ms)",
                        e, retry_count, self.max_retries, delay
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
