//! Crawler crawl tool
//!
//! Starts a crawl job from a base URL and waits until the vendor reports it
//! finished, so a single call may take minutes.

use super::{ScrapeOptionsInput, with_scrape_option_fields};
use crate::wrappers::{CrawlOptions, CrawlerCrawlApiWrapper};
use async_trait::async_trait;
use scrapeless_core::{Result, Tool, ToolContext, ToolResponse};
use scrapeless_tool::{Field, ToolSchema, or_default, parse_input, record_tool_call, wrap_invocation_error};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const CRAWLER_CRAWL_TOOL_NAME: &str = "scrapeless_crawler_crawl";

const DESCRIPTION: &str = "The tool can be used to crawl a website. \
It allows you to get the data you want from web pages with a single call. \
You can scrape page content and capture its data in various formats. \
It can be used to crawl the content of a single website or a list of websites.";

#[derive(Debug, Deserialize)]
struct CrawlerCrawlInput {
    url: String,
    limit: Option<u64>,
    include_paths: Option<Vec<String>>,
    exclude_paths: Option<Vec<String>>,
    max_depth: Option<u64>,
    max_discovery_depth: Option<u64>,
    ignore_sitemap: Option<bool>,
    ignore_query_params: Option<bool>,
    deduplicate_similar_urls: Option<bool>,
    regex_on_full_url: Option<bool>,
    allow_backward_links: Option<bool>,
    allow_external_links: Option<bool>,
    delay: Option<u64>,
    #[serde(flatten)]
    scrape: ScrapeOptionsInput,
}

impl CrawlerCrawlInput {
    fn resolve(self) -> (String, CrawlOptions) {
        let stock = CrawlOptions::default();
        let options = CrawlOptions {
            limit: or_default(self.limit, stock.limit),
            include_paths: self.include_paths,
            exclude_paths: self.exclude_paths,
            max_depth: or_default(self.max_depth, stock.max_depth),
            max_discovery_depth: self.max_discovery_depth,
            ignore_sitemap: or_default(self.ignore_sitemap, stock.ignore_sitemap),
            ignore_query_params: or_default(self.ignore_query_params, stock.ignore_query_params),
            deduplicate_similar_urls: self.deduplicate_similar_urls,
            regex_on_full_url: self.regex_on_full_url,
            allow_backward_links: or_default(self.allow_backward_links, stock.allow_backward_links),
            allow_external_links: or_default(self.allow_external_links, stock.allow_external_links),
            delay: self.delay,
            scrape: self.scrape.resolve(),
        };
        (self.url, options)
    }
}

fn input_schema() -> ToolSchema {
    let stock = CrawlOptions::default();

    let schema = ToolSchema::new()
        .field(Field::string("url", "The base URL to start crawling from").required())
        .field(
            Field::integer("limit", "Maximum number of pages to crawl.").default_value(stock.limit),
        )
        .field(Field::string_array(
            "include_paths",
            "URL pathname regex patterns that include matching URLs in the crawl. Only the paths \
             that match the specified patterns will be included in the response. For example, \
             ['blog/.*'] for the base URL scrapeless.com only returns pages such as \
             https://www.scrapeless.com/blog/some-post.",
        ))
        .field(Field::string_array(
            "exclude_paths",
            "URL pathname regex patterns that exclude matching URLs from the crawl. For example, \
             ['blog/.*'] for the base URL scrapeless.com skips every page under /blog.",
        ))
        .field(
            Field::integer(
                "max_depth",
                "Maximum depth to crawl relative to the base URL. Basically, the max number of \
                 slashes the pathname of a scraped URL may contain.",
            )
            .default_value(stock.max_depth),
        )
        .field(Field::integer(
            "max_discovery_depth",
            "Maximum depth to crawl based on discovery order. The root site and sitemapped pages \
             have a discovery depth of 0. For example, 1 with ignore_sitemap set crawls the \
             entered URL and all URLs that are linked on that page.",
        ))
        .field(
            Field::boolean("ignore_sitemap", "Ignore the website sitemap when crawling")
                .default_value(stock.ignore_sitemap),
        )
        .field(
            Field::boolean(
                "ignore_query_params",
                "Do not re-scrape the same path with different (or none) query parameters",
            )
            .default_value(stock.ignore_query_params),
        )
        .field(Field::boolean(
            "deduplicate_similar_urls",
            "Controls whether similar URLs should be deduplicated.",
        ))
        .field(Field::boolean(
            "regex_on_full_url",
            "Controls whether the regular expression should be applied to the full URL.",
        ))
        .field(
            Field::boolean(
                "allow_backward_links",
                "By default, the crawl skips sublinks that aren't part of the URL hierarchy you \
                 specify. For example, crawling https://example.com/products/ wouldn't capture \
                 pages under https://example.com/promotions/deal-567. Enable this to include them.",
            )
            .default_value(stock.allow_backward_links),
        )
        .field(
            Field::boolean(
                "allow_external_links",
                "Allows the crawler to follow links to external websites.",
            )
            .default_value(stock.allow_external_links),
        )
        .field(Field::integer(
            "delay",
            "Delay in seconds between scrapes. This helps respect website rate limits.",
        ));

    with_scrape_option_fields(schema)
}

/// Crawl a website with the Scrapeless crawler
pub struct ScrapelessCrawlerCrawlTool {
    name: String,
    description: String,
    wrapper: CrawlerCrawlApiWrapper,
    schema: ToolSchema,
}

impl ScrapelessCrawlerCrawlTool {
    pub fn new(wrapper: CrawlerCrawlApiWrapper) -> Self {
        Self {
            name: CRAWLER_CRAWL_TOOL_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            wrapper,
            schema: input_schema(),
        }
    }

    /// Build with an explicit API key, falling back to `SCRAPELESS_API_KEY`
    pub fn with_api_key(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::new(CrawlerCrawlApiWrapper::new(api_key)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::with_api_key(None)
    }

    /// Create with custom name and description
    pub fn with_config(mut self, name: String, description: String) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    async fn crawl(&self, params: &Value) -> Result<ToolResponse> {
        let input: CrawlerCrawlInput = parse_input(&self.name, &self.schema, params)?;
        let (url, options) = input.resolve();

        info!(tool = %self.name, url = %url, limit = options.limit, "Crawling site");

        let result = self
            .wrapper
            .crawl_results(&url, &options)
            .await
            .map_err(|e| {
                wrap_invocation_error(
                    &self.name,
                    &format!("An error occurred while crawling the url {}", url),
                    e,
                )
            })?;

        Ok(ToolResponse { result })
    }
}

#[async_trait]
impl Tool for ScrapelessCrawlerCrawlTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        self.schema.build()
    }

    fn is_long_running(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let outcome = self.crawl(&params).await;
        record_tool_call(self, ctx.as_ref(), &params, &outcome);
        outcome
    }
}
