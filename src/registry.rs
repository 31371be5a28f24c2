use crate::config::Config;
use crate::types::{TagRecord, TagsPage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Anything that can list the published tags of the tracked image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagSource: Send + Sync {
    async fn fetch_tags(&self) -> Result<Vec<TagRecord>>;
}

/// Docker Hub's `v2/repositories/{namespace}/{repository}/tags` listing.
///
/// Only the first page is read.
pub struct DockerHubClient {
    client: reqwest::Client,
    url: String,
    page_size: u32,
}

impl DockerHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.tags_url(),
            page_size: config.page_size,
        })
    }
}

#[async_trait]
impl TagSource for DockerHubClient {
    async fn fetch_tags(&self) -> Result<Vec<TagRecord>> {
        debug!(url = %self.url, page_size = self.page_size, "listing tags");
        let page: TagsPage = self
            .client
            .get(&self.url)
            .query(&[("page_size", self.page_size)])
            .send()
            .await
            .with_context(|| format!("Failed to fetch tags from {}", self.url))?
            .error_for_status()
            .with_context(|| format!("Registry rejected tag listing at {}", self.url))?
            .json()
            .await
            .with_context(|| format!("Failed to decode tag listing from {}", self.url))?;

        debug!(count = page.results.len(), "received tags");
        Ok(page.results.into_iter().map(TagRecord::from).collect())
    }
}
