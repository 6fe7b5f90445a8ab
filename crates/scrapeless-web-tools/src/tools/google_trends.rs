//! Google Trends through the Scrapeless DeepSerp actor

use crate::options::{TRENDS_GEOS, TrendsDataType, trends_category_codes};
use crate::wrappers::{DeepSerpApiWrapper, GoogleTrendsParams};
use async_trait::async_trait;
use scrapeless_core::{Result, Tool, ToolContext, ToolResponse};
use scrapeless_tool::{Field, ToolSchema, or_default, parse_input, record_tool_call, wrap_invocation_error};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const GOOGLE_TRENDS_TOOL_NAME: &str = "scrapeless_deepserp_google_trends";

const DESCRIPTION: &str = "Get trending search data from Google Trends. \
Use it for queries about trends, popularity, or interest over time, \
e.g. find the search interest for \"AI\" over the last year. \
Do not use it for a general question like \"What is AI?\" (use google_search).";

#[derive(Debug, Deserialize)]
struct GoogleTrendsInput {
    q: String,
    data_type: Option<TrendsDataType>,
    date: Option<String>,
    hl: Option<String>,
    tz: Option<String>,
    geo: Option<String>,
    cat: Option<String>,
}

impl GoogleTrendsInput {
    fn resolve(self) -> GoogleTrendsParams {
        let stock = GoogleTrendsParams::new(self.q);
        GoogleTrendsParams {
            q: stock.q,
            data_type: or_default(self.data_type, stock.data_type),
            date: or_default(self.date, stock.date),
            hl: or_default(self.hl, stock.hl),
            tz: or_default(self.tz, stock.tz),
            geo: self.geo,
            cat: or_default(self.cat, stock.cat),
        }
    }
}

fn input_schema() -> ToolSchema {
    let stock = GoogleTrendsParams::new(String::new());

    ToolSchema::new()
        .field(
            Field::string(
                "q",
                "Parameter defines the query or queries you want to search. You can use anything \
                 that you would use in a regular Google Trends search. interest_over_time and \
                 compared_breakdown_by_region accept up to 5 comma-separated queries; other data \
                 types accept 1 query per search.",
            )
            .required(),
        )
        .field(
            Field::string("data_type", "The kind of Google Trends data to retrieve.")
                .one_of(TrendsDataType::VARIANTS)
                .default_value(stock.data_type.as_str()),
        )
        .field(
            Field::string(
                "date",
                "The date range: now 1-H, now 4-H, now 1-d, now 7-d, today 1-m, today 3-m, \
                 today 12-m, today 5-y or all. Custom ranges are also accepted as \
                 \"yyyy-mm-dd yyyy-mm-dd\" (2004 to present) or \"yyyy-mm-ddThh yyyy-mm-ddThh\" \
                 within a week, with hours calculated in the tz time zone.",
            )
            .default_value(stock.date.as_str()),
        )
        .field(
            Field::string(
                "hl",
                "Parameter defines the language to use for the Google Trends search. \
                 It's a two-letter language code (e.g., en for English, es for Spanish).",
            )
            .default_value(stock.hl.as_str()),
        )
        .field(
            Field::string("tz", "Time zone offset in minutes. Default is 420.")
                .default_value(stock.tz.as_str()),
        )
        .field(
            Field::string(
                "geo",
                "Parameter defines the location from where you want the search to originate. \
                 It defaults to Worldwide when unset or empty.",
            )
            .one_of(TRENDS_GEOS),
        )
        .field(
            Field::string(
                "cat",
                "Parameter is used to define a search category. \
                 The default value is set to '0' (All categories).",
            )
            .one_of(&trends_category_codes())
            .default_value(stock.cat.as_str()),
        )
}

/// Query Google Trends through the Scrapeless DeepSerp API
pub struct ScrapelessDeepSerpGoogleTrendsTool {
    name: String,
    description: String,
    wrapper: DeepSerpApiWrapper,
    schema: ToolSchema,
}

impl ScrapelessDeepSerpGoogleTrendsTool {
    pub fn new(wrapper: DeepSerpApiWrapper) -> Self {
        Self {
            name: GOOGLE_TRENDS_TOOL_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            wrapper,
            schema: input_schema(),
        }
    }

    /// Build with an explicit API key, falling back to `SCRAPELESS_API_KEY`
    pub fn with_api_key(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::new(DeepSerpApiWrapper::new(api_key)?))
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

    async fn trends(&self, params: &Value) -> Result<ToolResponse> {
        let input: GoogleTrendsInput = parse_input(&self.name, &self.schema, params)?;
        let request = input.resolve();

        info!(tool = %self.name, q = %request.q, data_type = %request.data_type, "Fetching Google Trends");

        let result = self
            .wrapper
            .get_google_trends_results(&request)
            .await
            .map_err(|e| {
                wrap_invocation_error(
                    &self.name,
                    &format!("An error occurred while scraping the query {}", request.q),
                    e,
                )
            })?;

        Ok(ToolResponse { result })
    }
}

#[async_trait]
impl Tool for ScrapelessDeepSerpGoogleTrendsTool {
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
        let outcome = self.trends(&params).await;
        record_tool_call(self, ctx.as_ref(), &params, &outcome);
        outcome
    }
}
