//! Crawler batch scrape tool

use super::{ScrapeOptionsInput, with_scrape_option_fields};
use crate::wrappers::CrawlerScrapeApiWrapper;
use async_trait::async_trait;
use scrapeless_core::{Result, Tool, ToolContext, ToolResponse};
use scrapeless_tool::{Field, ToolSchema, parse_input, record_tool_call, wrap_invocation_error};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const CRAWLER_SCRAPE_TOOL_NAME: &str = "scrapeless_crawler_scrape";

const DESCRIPTION: &str = "The tool can be used to scrape the content of a website. \
It allows you to get the data you want from web pages with a single call. \
You can scrape page content and capture its data in various formats. \
It can be used to scrape the content of a single website or a list of websites.";

#[derive(Debug, Deserialize)]
struct CrawlerScrapeInput {
    urls: Vec<String>,
    #[serde(flatten)]
    options: ScrapeOptionsInput,
}

fn input_schema() -> ToolSchema {
    with_scrape_option_fields(ToolSchema::new().field(
        Field::string_array("urls", "The url or urls of the websites to scrape.").required(),
    ))
}

/// Scrape one or more pages with the Scrapeless crawler
pub struct ScrapelessCrawlerScrapeTool {
    name: String,
    description: String,
    wrapper: CrawlerScrapeApiWrapper,
    schema: ToolSchema,
}

impl ScrapelessCrawlerScrapeTool {
    pub fn new(wrapper: CrawlerScrapeApiWrapper) -> Self {
        Self {
            name: CRAWLER_SCRAPE_TOOL_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            wrapper,
            schema: input_schema(),
        }
    }

    /// Build with an explicit API key, falling back to `SCRAPELESS_API_KEY`
    pub fn with_api_key(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::new(CrawlerScrapeApiWrapper::new(api_key)?))
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

    async fn scrape(&self, params: &Value) -> Result<ToolResponse> {
        let input: CrawlerScrapeInput = parse_input(&self.name, &self.schema, params)?;
        let options = input.options.resolve();

        info!(tool = %self.name, urls = input.urls.len(), "Batch scraping pages");

        let result = self
            .wrapper
            .scrape_results(&input.urls, &options)
            .await
            .map_err(|e| {
                wrap_invocation_error(
                    &self.name,
                    &format!("An error occurred while scraping the urls {:?}", input.urls),
                    e,
                )
            })?;

        Ok(ToolResponse { result })
    }
}

#[async_trait]
impl Tool for ScrapelessCrawlerScrapeTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        self.schema.build()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let outcome = self.scrape(&params).await;
        record_tool_call(self, ctx.as_ref(), &params, &outcome);
        outcome
    }
}
