//! # Scrapeless tools for LLM agents
//!
//! Exposes the Scrapeless scraping and search service as agent tools:
//!
//! - `scrapeless_universal_scraping`: fetch any page through the web unlocker
//! - `scrapeless_deepserp_google_search`: Google search results
//! - `scrapeless_deepserp_google_trends`: Google Trends data
//! - `scrapeless_crawler_scrape`: batch scrape a list of URLs
//! - `scrapeless_crawler_crawl`: crawl a site from a base URL (long-running)
//!
//! Each tool validates its arguments against a declared schema, fills unset
//! parameters with documented defaults and forwards a single request through
//! a wrapper. Responses are returned exactly as the service sends them.
//!
//! ## API key
//!
//! Pass a key explicitly or set `SCRAPELESS_API_KEY`. Construction fails with
//! a configuration error when neither is available.
//!
//! ## Example
//!
//! ```no_run
//! use scrapeless_core::Tool;
//! use scrapeless_tool::DefaultToolContext;
//! use scrapeless_web_tools::ScrapelessToolset;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), scrapeless_core::Error> {
//! let toolset = ScrapelessToolset::from_env()?;
//! let tool = toolset.get_tool("scrapeless_universal_scraping").unwrap();
//! let ctx = Arc::new(DefaultToolContext::new("call-1".into(), "inv-1".into()));
//! let page = tool.execute(ctx, json!({"url": "https://www.scrapeless.com/en"})).await?;
//! println!("{}", page.result);
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod tools;
pub mod toolset;
pub mod wrappers;

#[cfg(test)]
mod testing;

pub use tools::{
    CRAWLER_CRAWL_TOOL_NAME, CRAWLER_SCRAPE_TOOL_NAME, GOOGLE_SEARCH_TOOL_NAME,
    GOOGLE_TRENDS_TOOL_NAME, ScrapelessCrawlerCrawlTool, ScrapelessCrawlerScrapeTool,
    ScrapelessDeepSerpGoogleSearchTool, ScrapelessDeepSerpGoogleTrendsTool,
    ScrapelessUniversalScrapingTool, UNIVERSAL_SCRAPING_TOOL_NAME, UniversalScrapingDefaults,
};
pub use toolset::{ScrapelessToolset, TOOLSET_NAME};
pub use wrappers::{
    CrawlOptions, CrawlerCrawlApiWrapper, CrawlerScrapeApiWrapper, DeepSerpApiWrapper,
    GoogleSearchParams, GoogleTrendsParams, PageContentParams, ScrapeOptions, ScrapelessApiWrapper,
    UniversalScrapingApiWrapper,
};
