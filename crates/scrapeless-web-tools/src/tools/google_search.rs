//! Google search through the Scrapeless DeepSerp actor

use crate::options::{GOOGLE_DOMAINS, SafeSearch, SearchType, Toggle};
use crate::wrappers::{DeepSerpApiWrapper, GoogleSearchParams};
use async_trait::async_trait;
use scrapeless_core::{Result, Tool, ToolContext, ToolResponse};
use scrapeless_tool::{Field, ToolSchema, or_default, parse_input, record_tool_call, wrap_invocation_error};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const GOOGLE_SEARCH_TOOL_NAME: &str = "scrapeless_deepserp_google_search";

const DESCRIPTION: &str = "Universal Information Search Engine. Retrieves any data information; \
Explanatory queries (why, how). Comparative analysis requests";

#[derive(Debug, Deserialize)]
struct GoogleSearchInput {
    q: String,
    hl: Option<String>,
    gl: Option<String>,
    google_domain: Option<String>,
    start: Option<u64>,
    num: Option<u64>,
    ludocid: Option<String>,
    kgmid: Option<String>,
    ibp: Option<String>,
    cr: Option<String>,
    lr: Option<String>,
    tbs: Option<String>,
    safe: Option<SafeSearch>,
    nfpr: Option<Toggle>,
    filter: Option<Toggle>,
    tbm: Option<SearchType>,
}

impl GoogleSearchInput {
    fn resolve(self) -> GoogleSearchParams {
        let stock = GoogleSearchParams::new(self.q);
        GoogleSearchParams {
            q: stock.q,
            hl: or_default(self.hl, stock.hl),
            gl: or_default(self.gl, stock.gl),
            google_domain: or_default(self.google_domain, stock.google_domain),
            start: or_default(self.start, stock.start),
            num: or_default(self.num, stock.num),
            ludocid: self.ludocid,
            kgmid: self.kgmid,
            ibp: self.ibp,
            cr: self.cr,
            lr: self.lr,
            tbs: self.tbs,
            safe: self.safe,
            nfpr: self.nfpr,
            filter: self.filter,
            tbm: self.tbm,
        }
    }
}

fn input_schema() -> ToolSchema {
    let stock = GoogleSearchParams::new(String::new());

    ToolSchema::new()
        .field(
            Field::string(
                "q",
                "Parameter defines the query you want to search. You can use anything that you \
                 would use in a regular Google search, e.g. inurl:, site:, intitle:.",
            )
            .required(),
        )
        .field(
            Field::string(
                "hl",
                "Parameter defines the language to use for the Google search. \
                 It's a two-letter language code (e.g., en for English, es for Spanish).",
            )
            .default_value(stock.hl.as_str()),
        )
        .field(
            Field::string(
                "gl",
                "Parameter defines the country to use for the Google search. \
                 It's a two-letter country code (e.g., us for the United States).",
            )
            .default_value(stock.gl.as_str()),
        )
        .field(
            Field::string(
                "google_domain",
                "Parameter defines the Google domain to use. It defaults to google.com.",
            )
            .one_of(GOOGLE_DOMAINS)
            .default_value(stock.google_domain.as_str()),
        )
        .field(
            Field::integer(
                "start",
                "Parameter defines the result offset. It skips the given number of results \
                 and is used for pagination (0 is the first page, 10 the second, 20 the third).",
            )
            .default_value(stock.start),
        )
        .field(
            Field::integer(
                "num",
                "Parameter defines the maximum number of results to return \
                 (e.g., 10 returns 10 results, 40 returns 40 results).",
            )
            .default_value(stock.num),
        )
        .field(Field::string(
            "ludocid",
            "Parameter defines the id (CID) of the Google My Business listing you want to scrape. \
             Also known as Google Place ID.",
        ))
        .field(Field::string(
            "kgmid",
            "Parameter defines the id (KGMID) of the Google Knowledge Graph listing you want to \
             scrape. For some searches, kgmid may override all other parameters except start \
             and num.",
        ))
        .field(Field::string(
            "ibp",
            "Parameter is responsible for rendering layouts and expansions for some elements \
             (e.g., gwp;0,7 to expand searches with ludocid for expanded knowledge graph).",
        ))
        .field(Field::string(
            "cr",
            "Parameter defines one or multiple countries to limit the search to, using \
             country{two-letter upper-case country code} and | as a delimiter \
             (e.g., countryFR|countryDE).",
        ))
        .field(Field::string(
            "lr",
            "Parameter defines one or multiple languages to limit the search to, using \
             lang_{two-letter language code} and | as a delimiter (e.g., lang_fr|lang_de).",
        ))
        .field(Field::string(
            "tbs",
            "(to be searched) parameter defines advanced search parameters that aren't possible \
             in the regular query field (e.g., advanced search for patents, dates, news, videos).",
        ))
        .field(
            Field::string(
                "safe",
                "Parameter defines the level of filtering for adult content. \
                 It can be set to active or off; by default Google will blur explicit content.",
            )
            .one_of(SafeSearch::VARIANTS),
        )
        .field(
            Field::string(
                "nfpr",
                "Parameter defines the exclusion of results from an auto-corrected query when \
                 the original query is spelled wrong. 1 excludes these results, 0 includes them.",
            )
            .one_of(Toggle::VARIANTS),
        )
        .field(
            Field::string(
                "filter",
                "Parameter defines if the filters for 'Similar Results' and 'Omitted Results' \
                 are on (1) or off (0).",
            )
            .one_of(Toggle::VARIANTS),
        )
        .field(
            Field::string(
                "tbm",
                "(to be matched) parameter defines the type of search: isch for images, \
                 lcl for local, vid for videos, nws for news, shop for shopping, pts for \
                 patents, jobs for jobs. Leave unset for a regular Google search.",
            )
            .one_of(SearchType::VARIANTS),
        )
}

/// Search Google through the Scrapeless DeepSerp API
pub struct ScrapelessDeepSerpGoogleSearchTool {
    name: String,
    description: String,
    wrapper: DeepSerpApiWrapper,
    schema: ToolSchema,
}

impl ScrapelessDeepSerpGoogleSearchTool {
    pub fn new(wrapper: DeepSerpApiWrapper) -> Self {
        Self {
            name: GOOGLE_SEARCH_TOOL_NAME.to_string(),
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

    async fn search(&self, params: &Value) -> Result<ToolResponse> {
        let input: GoogleSearchInput = parse_input(&self.name, &self.schema, params)?;
        let request = input.resolve();

        info!(tool = %self.name, q = %request.q, domain = %request.google_domain, "Searching Google");

        let result = self
            .wrapper
            .get_google_search_results(&request)
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
impl Tool for ScrapelessDeepSerpGoogleSearchTool {
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
        let outcome = self.search(&params).await;
        record_tool_call(self, ctx.as_ref(), &params, &outcome);
        outcome
    }
}
