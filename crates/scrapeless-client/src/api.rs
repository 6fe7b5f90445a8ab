use crate::error::Result;
use crate::types::{CrawlParams, ScrapeParams, ScrapingTaskRequest, UniversalScrapingRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Capabilities of the Scrapeless service used by the tool adapters.
///
/// Every method performs one logical remote operation and returns the
/// service's JSON response as-is.
#[async_trait]
pub trait ScrapelessApi: Send + Sync {
    /// Universal scraping (web unlocker)
    async fn universal_scrape(&self, request: &UniversalScrapingRequest) -> Result<Value>;

    /// Scraping API task (SERP, trends, ...)
    async fn scraping_scrape(&self, request: &ScrapingTaskRequest) -> Result<Value>;

    /// Crawler batch scrape; resolves once the batch job finishes
    async fn batch_scrape_urls(&self, urls: &[String], params: &ScrapeParams) -> Result<Value>;

    /// Crawler crawl; resolves once the crawl job finishes
    async fn crawl_url(&self, url: &str, params: &CrawlParams) -> Result<Value>;
}
