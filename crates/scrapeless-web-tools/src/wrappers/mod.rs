//! Per-capability adapters over the Scrapeless API
//!
//! A wrapper turns fully resolved parameters into the vendor request object
//! and performs exactly one [`ScrapelessApi`] call. It never retries and
//! never catches errors; the tool layer adds context.

mod crawler;
mod deepserp;
mod universal;

pub use crawler::{CrawlOptions, CrawlerCrawlApiWrapper, CrawlerScrapeApiWrapper, ScrapeOptions};
pub use deepserp::{DeepSerpApiWrapper, GoogleSearchParams, GoogleTrendsParams};
pub use universal::{PageContentParams, UniversalScrapingApiWrapper};

use async_trait::async_trait;
use scrapeless_client::{
    ClientError, CrawlParams, ScrapeParams, ScrapelessApi, ScrapelessClient, ScrapingTaskRequest,
    UniversalScrapingRequest,
};
use scrapeless_core::{ApiToken, SCRAPELESS_API_KEY_ENV, ScrapelessConfig};
use serde_json::Value;
use std::sync::Arc;

/// Shared client handle behind every wrapper.
///
/// The handle is created once, after the credential is resolved, and is
/// immutable afterwards. Cloning shares the same client.
#[derive(Clone)]
pub struct ScrapelessApiWrapper {
    client: Arc<dyn ScrapelessApi>,
}

impl ScrapelessApiWrapper {
    /// Connect with an explicit API key, falling back to `SCRAPELESS_API_KEY`.
    ///
    /// Fails with [`scrapeless_core::Error::Config`] when neither is set;
    /// nothing is sent over the network in that case.
    pub fn new(api_key: Option<&str>) -> scrapeless_core::Result<Self> {
        let token = ApiToken::resolve(api_key, SCRAPELESS_API_KEY_ENV)?;
        let client = ScrapelessClient::new(token)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn from_env() -> scrapeless_core::Result<Self> {
        Self::new(None)
    }

    /// Connect using a loaded configuration (token, base URL, poll interval)
    pub fn from_config(config: &ScrapelessConfig) -> scrapeless_core::Result<Self> {
        let client = ScrapelessClient::from_config(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<dyn ScrapelessApi>) -> Self {
        Self { client }
    }

    /// A handle with no credential, for listing tools and their schemas.
    ///
    /// Every call through it fails with [`ClientError::NotConnected`].
    pub fn detached() -> Self {
        Self::with_client(Arc::new(Detached))
    }

    pub fn client(&self) -> &Arc<dyn ScrapelessApi> {
        &self.client
    }
}

impl std::fmt::Debug for ScrapelessApiWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapelessApiWrapper").finish_non_exhaustive()
    }
}

struct Detached;

#[async_trait]
impl ScrapelessApi for Detached {
    async fn universal_scrape(
        &self,
        _request: &UniversalScrapingRequest,
    ) -> scrapeless_client::Result<Value> {
        Err(ClientError::NotConnected)
    }

    async fn scraping_scrape(&self, _request: &ScrapingTaskRequest) -> scrapeless_client::Result<Value> {
        Err(ClientError::NotConnected)
    }

    async fn batch_scrape_urls(
        &self,
        _urls: &[String],
        _params: &ScrapeParams,
    ) -> scrapeless_client::Result<Value> {
        Err(ClientError::NotConnected)
    }

    async fn crawl_url(&self, _url: &str, _params: &CrawlParams) -> scrapeless_client::Result<Value> {
        Err(ClientError::NotConnected)
    }
}
