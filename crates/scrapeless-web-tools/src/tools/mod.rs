//! Tool descriptors exposed to agents

mod crawler_crawl;
mod crawler_scrape;
mod google_search;
mod google_trends;
mod universal_scraping;

pub use crawler_crawl::{CRAWLER_CRAWL_TOOL_NAME, ScrapelessCrawlerCrawlTool};
pub use crawler_scrape::{CRAWLER_SCRAPE_TOOL_NAME, ScrapelessCrawlerScrapeTool};
pub use google_search::{GOOGLE_SEARCH_TOOL_NAME, ScrapelessDeepSerpGoogleSearchTool};
pub use google_trends::{GOOGLE_TRENDS_TOOL_NAME, ScrapelessDeepSerpGoogleTrendsTool};
pub use universal_scraping::{
    ScrapelessUniversalScrapingTool, UNIVERSAL_SCRAPING_TOOL_NAME, UniversalScrapingDefaults,
};

use crate::options::ScrapeFormat;
use crate::wrappers::ScrapeOptions;
use scrapeless_tool::{Field, ToolSchema, or_default};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Page scrape arguments accepted by both crawler tools
#[derive(Debug, Deserialize)]
struct ScrapeOptionsInput {
    formats: Option<Vec<ScrapeFormat>>,
    only_main_content: Option<bool>,
    include_tags: Option<Vec<String>>,
    exclude_tags: Option<Vec<String>>,
    headers: Option<BTreeMap<String, String>>,
    wait_for: Option<u64>,
    timeout: Option<u64>,
}

impl ScrapeOptionsInput {
    fn resolve(self) -> ScrapeOptions {
        let stock = ScrapeOptions::default();
        ScrapeOptions {
            formats: or_default(self.formats, stock.formats),
            only_main_content: or_default(self.only_main_content, stock.only_main_content),
            include_tags: or_default(self.include_tags, stock.include_tags),
            exclude_tags: or_default(self.exclude_tags, stock.exclude_tags),
            headers: or_default(self.headers, stock.headers),
            wait_for: or_default(self.wait_for, stock.wait_for),
            timeout: or_default(self.timeout, stock.timeout),
        }
    }
}

fn with_scrape_option_fields(schema: ToolSchema) -> ToolSchema {
    let stock = ScrapeOptions::default();
    let formats: Vec<&str> = stock.formats.iter().map(|f| f.as_str()).collect();

    schema
        .field(
            Field::string_array("formats", "The format of the output.")
                .one_of(ScrapeFormat::VARIANTS)
                .default_value(json!(formats)),
        )
        .field(
            Field::boolean(
                "only_main_content",
                "Only return the main content of the page excluding headers, navs, footers, etc.",
            )
            .default_value(stock.only_main_content),
        )
        .field(
            Field::string_array("include_tags", "The tags to include in the output.")
                .default_value(json!(stock.include_tags)),
        )
        .field(
            Field::string_array("exclude_tags", "The tags to exclude in the output.")
                .default_value(json!(stock.exclude_tags)),
        )
        .field(
            Field::string_map(
                "headers",
                "The headers to send with the request. Can be used to send cookies, user-agent, etc.",
            )
            .default_value(json!(stock.headers)),
        )
        .field(
            Field::integer(
                "wait_for",
                "Specify a delay in milliseconds before fetching the content, \
                 allowing the page sufficient time to load.",
            )
            .default_value(stock.wait_for),
        )
        .field(
            Field::integer("timeout", "Timeout in milliseconds for the request")
                .default_value(stock.timeout),
        )
}
