use super::ScrapelessApiWrapper;
use crate::options::ScrapeFormat;
use scrapeless_client::{BrowserOptions, CrawlParams, Result, ScrapeParams, ScrapelessApi};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Page scrape options shared by batch scrapes and crawls
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOptions {
    pub formats: Vec<ScrapeFormat>,
    pub only_main_content: bool,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub headers: BTreeMap<String, String>,
    /// Milliseconds
    pub wait_for: u64,
    /// Milliseconds
    pub timeout: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            formats: vec![ScrapeFormat::Markdown],
            only_main_content: true,
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            headers: BTreeMap::new(),
            wait_for: 0,
            timeout: 30_000,
        }
    }
}

impl ScrapeOptions {
    fn to_params(&self, browser_options: Option<BrowserOptions>) -> ScrapeParams {
        ScrapeParams {
            formats: self.formats.iter().map(|f| f.as_str().to_string()).collect(),
            only_main_content: self.only_main_content,
            include_tags: self.include_tags.clone(),
            exclude_tags: self.exclude_tags.clone(),
            headers: self.headers.clone(),
            wait_for: self.wait_for,
            timeout: self.timeout,
            browser_options,
        }
    }
}

/// Browser session used for every batch scrape
fn batch_browser_options() -> BrowserOptions {
    BrowserOptions {
        proxy_country: "ANY".to_string(),
        session_name: "Crawl".to_string(),
        session_recording: true,
        session_ttl: 900,
    }
}

/// Adapter for the crawler batch-scrape endpoint
#[derive(Debug, Clone)]
pub struct CrawlerScrapeApiWrapper {
    api: ScrapelessApiWrapper,
}

impl CrawlerScrapeApiWrapper {
    /// Connect with an explicit API key or `SCRAPELESS_API_KEY`
    pub fn new(api_key: Option<&str>) -> scrapeless_core::Result<Self> {
        Ok(Self::from_api(ScrapelessApiWrapper::new(api_key)?))
    }

    pub fn from_env() -> scrapeless_core::Result<Self> {
        Self::new(None)
    }

    pub fn with_client(client: Arc<dyn ScrapelessApi>) -> Self {
        Self::from_api(ScrapelessApiWrapper::with_client(client))
    }

    pub fn from_api(api: ScrapelessApiWrapper) -> Self {
        Self { api }
    }

    pub fn build_params(options: &ScrapeOptions) -> ScrapeParams {
        options.to_params(Some(batch_browser_options()))
    }

    /// Scrape every URL in `urls`, waiting for the batch job to finish
    pub async fn scrape_results(&self, urls: &[String], options: &ScrapeOptions) -> Result<Value> {
        let params = Self::build_params(options);
        debug!(urls = urls.len(), "Submitting crawler batch scrape");
        self.api.client().batch_scrape_urls(urls, &params).await
    }
}

/// Fully resolved crawl options
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlOptions {
    pub limit: u64,
    pub include_paths: Option<Vec<String>>,
    pub exclude_paths: Option<Vec<String>>,
    pub max_depth: u64,
    pub max_discovery_depth: Option<u64>,
    pub ignore_sitemap: bool,
    pub ignore_query_params: bool,
    pub deduplicate_similar_urls: Option<bool>,
    pub regex_on_full_url: Option<bool>,
    pub allow_backward_links: bool,
    pub allow_external_links: bool,
    /// Seconds between scrapes
    pub delay: Option<u64>,
    pub scrape: ScrapeOptions,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            limit: 10_000,
            include_paths: None,
            exclude_paths: None,
            max_depth: 10,
            max_discovery_depth: None,
            ignore_sitemap: false,
            ignore_query_params: false,
            deduplicate_similar_urls: None,
            regex_on_full_url: None,
            allow_backward_links: false,
            allow_external_links: false,
            delay: None,
            scrape: ScrapeOptions::default(),
        }
    }
}

/// Adapter for the crawler crawl endpoint
#[derive(Debug, Clone)]
pub struct CrawlerCrawlApiWrapper {
    api: ScrapelessApiWrapper,
}

impl CrawlerCrawlApiWrapper {
    /// Connect with an explicit API key or `SCRAPELESS_API_KEY`
    pub fn new(api_key: Option<&str>) -> scrapeless_core::Result<Self> {
        Ok(Self::from_api(ScrapelessApiWrapper::new(api_key)?))
    }

    pub fn from_env() -> scrapeless_core::Result<Self> {
        Self::new(None)
    }

    pub fn with_client(client: Arc<dyn ScrapelessApi>) -> Self {
        Self::from_api(ScrapelessApiWrapper::with_client(client))
    }

    pub fn from_api(api: ScrapelessApiWrapper) -> Self {
        Self { api }
    }

    pub fn build_params(options: &CrawlOptions) -> CrawlParams {
        CrawlParams {
            limit: options.limit,
            delay: options.delay,
            max_depth: options.max_depth,
            max_discovery_depth: options.max_discovery_depth,
            ignore_sitemap: options.ignore_sitemap,
            ignore_query_parameters: options.ignore_query_params,
            deduplicate_similar_urls: options.deduplicate_similar_urls,
            regex_on_full_url: options.regex_on_full_url,
            allow_backward_links: options.allow_backward_links,
            allow_external_links: options.allow_external_links,
            include_paths: options.include_paths.clone(),
            exclude_paths: options.exclude_paths.clone(),
            scrape_options: options.scrape.to_params(None),
        }
    }

    /// Crawl from `url`, waiting for the crawl job to finish
    pub async fn crawl_results(&self, url: &str, options: &CrawlOptions) -> Result<Value> {
        let params = Self::build_params(options);
        debug!(url, limit = params.limit, max_depth = params.max_depth, "Submitting crawl");
        self.api.client().crawl_url(url, &params).await
    }
}
