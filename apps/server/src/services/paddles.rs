//! Client for the Paddles results service.
//!
//! Every list or detail request goes through the injected [`QueryCache`],
//! keyed by the full request URL.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{NodeJobs, QueryState, Run};

use super::query_cache::QueryCache;

/// Decoded response plus whether a background refresh is running.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub refreshing: bool,
}

/// Paddles HTTP client.
#[derive(Clone)]
pub struct PaddlesClient {
    base_url: String,
    http: reqwest::Client,
    cache: QueryCache,
}

impl PaddlesClient {
    /// Create a client whose requests fail after `timeout`.
    pub fn new(base_url: &str, timeout: Duration, cache: QueryCache) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        info!(
            "Paddles client initialized (base_url={}, timeout_ms={})",
            base_url,
            timeout.as_millis()
        );

        Ok(Self {
            base_url,
            http,
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one page of runs. Paddles pages are one-based.
    pub fn runs_url(&self, query: &QueryState) -> String {
        let mut url = format!("{}/runs/", self.base_url);
        if let Some(ref status) = query.status {
            url.push_str(&format!("status/{}/", urlencoding::encode(status)));
        }
        url.push_str(&format!(
            "?page={}&count={}",
            query.page.saturating_add(1),
            query.page_size
        ));
        url
    }

    /// URL of a single run, including its jobs.
    pub fn run_url(&self, name: &str) -> String {
        format!("{}/runs/{}/", self.base_url, urlencoding::encode(name))
    }

    /// URL of one page of the jobs that ran on a node.
    pub fn node_jobs_url(&self, node: &str, query: &QueryState) -> String {
        format!(
            "{}/nodes/{}/jobs/?page={}&count={}",
            self.base_url,
            urlencoding::encode(node),
            query.page.saturating_add(1),
            query.page_size
        )
    }

    /// One page of runs.
    pub async fn runs(&self, query: &QueryState) -> Result<Fetched<Vec<Run>>, FetchError> {
        self.get_cached(self.runs_url(query)).await
    }

    /// A run with all of its jobs.
    pub async fn run(&self, name: &str) -> Result<Fetched<Run>, FetchError> {
        self.get_cached(self.run_url(name)).await
    }

    /// One page of a node's jobs.
    pub async fn node_jobs(
        &self,
        node: &str,
        query: &QueryState,
    ) -> Result<Fetched<NodeJobs>, FetchError> {
        self.get_cached(self.node_jobs_url(node, query)).await
    }

    /// Uncached reachability probe of the base URL.
    pub async fn ping(&self) -> Result<(), FetchError> {
        self.http
            .get(format!("{}/", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn get_cached<T: DeserializeOwned>(&self, url: String) -> Result<Fetched<T>, FetchError> {
        let http = self.http.clone();
        let request_url = url.clone();
        let lookup = self
            .cache
            .get_or_fetch(&url, move || fetch_json(http, request_url))
            .await?;

        let data = T::deserialize(lookup.value.as_ref())?;
        Ok(Fetched {
            data,
            refreshing: lookup.refreshing,
        })
    }
}

async fn fetch_json(http: reqwest::Client, url: String) -> Result<JsonValue, FetchError> {
    debug!(url = %url, "Fetching from Paddles");
    let response = http.get(&url).send().await?.error_for_status()?;
    Ok(response.json::<JsonValue>().await?)
}
