//! # Scrapeless API client
//!
//! The boundary between the tool adapters and the remote Scrapeless service.
//!
//! - [`ScrapelessApi`] is the capability surface the adapters depend on
//!   (universal scraping, scraping tasks, crawler batch scrape, crawler crawl)
//! - [`ScrapelessClient`] implements it over HTTPS with `reqwest`
//! - Request objects mirror the vendor's JSON schema
//!
//! ## Example
//!
//! ```no_run
//! use scrapeless_client::{ScrapelessApi, ScrapelessClient, ScrapingTaskRequest};
//! use scrapeless_core::ApiToken;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = ScrapelessClient::new(ApiToken::from_env()?)?;
//! let request = ScrapingTaskRequest::new(
//!     "scraper.google.search",
//!     serde_json::json!({ "q": "rust async" }),
//! );
//! let results = client.scraping_scrape(&request).await?;
//! println!("{results}");
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
mod types;

pub use api::ScrapelessApi;
pub use client::{ScrapelessClient, ScrapelessClientBuilder, TOKEN_HEADER};
pub use error::{ClientError, Result};
pub use types::{
    BrowserOptions, CrawlParams, GOOGLE_SEARCH_ACTOR, GOOGLE_TRENDS_ACTOR, ProxyOptions,
    ScrapeParams, ScrapingTaskRequest, UNIVERSAL_SCRAPING_ACTOR, UniversalScrapingRequest,
    UnlockerInput,
};
