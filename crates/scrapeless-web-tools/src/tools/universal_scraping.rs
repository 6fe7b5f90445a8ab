//! Universal scraping tool
//!
//! Fetches a single page through the Scrapeless web unlocker, which handles
//! fingerprinting, CAPTCHAs, IP rotation and JavaScript rendering remotely.

use crate::options::{JsWaitUntil, ResponseType, ScrapeOutput};
use crate::wrappers::{PageContentParams, UniversalScrapingApiWrapper};
use async_trait::async_trait;
use scrapeless_core::{Result, Tool, ToolContext, ToolResponse};
use scrapeless_tool::{Field, ToolSchema, or_default, parse_input, record_tool_call, wrap_invocation_error};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const UNIVERSAL_SCRAPING_TOOL_NAME: &str = "scrapeless_universal_scraping";

const DESCRIPTION: &str = "Extract structured data from websites using the Scrapeless Universal Scraping API. \
Universal Scraping API helps you bypass website blocks in real-time using advanced technology. \
It includes features like recognizing browser fingerprints, solving CAPTCHAs, rotating IPs, \
and intelligently retrying requests. This ensures you can access any public website without interruptions. \
It supports various scraping methods, excels in rendering JavaScript, and implements anti-scraping techniques, \
giving you the tools to navigate the web effectively.";

/// Values applied when a call leaves an optional parameter unset
#[derive(Debug, Clone, PartialEq)]
pub struct UniversalScrapingDefaults {
    pub headless: bool,
    pub js_render: bool,
    pub js_wait_until: JsWaitUntil,
    pub outputs: Option<ScrapeOutput>,
    pub response_type: ResponseType,
    pub response_image_full_page: bool,
    pub selector: Option<String>,
    pub proxy_country: String,
}

impl Default for UniversalScrapingDefaults {
    fn default() -> Self {
        let stock = PageContentParams::new(String::new());
        Self {
            headless: stock.headless,
            js_render: stock.js_render,
            js_wait_until: stock.js_wait_until,
            outputs: stock.outputs,
            response_type: stock.response_type,
            response_image_full_page: stock.response_image_full_page,
            selector: stock.selector,
            proxy_country: stock.proxy_country,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UniversalScrapingInput {
    url: String,
    headless: Option<bool>,
    js_render: Option<bool>,
    js_wait_until: Option<JsWaitUntil>,
    outputs: Option<ScrapeOutput>,
    response_type: Option<ResponseType>,
    response_image_full_page: Option<bool>,
    selector: Option<String>,
    proxy_country: Option<String>,
}

impl UniversalScrapingInput {
    fn resolve(self, defaults: &UniversalScrapingDefaults) -> PageContentParams {
        PageContentParams {
            url: self.url,
            headless: or_default(self.headless, defaults.headless),
            js_render: or_default(self.js_render, defaults.js_render),
            js_wait_until: or_default(self.js_wait_until, defaults.js_wait_until),
            outputs: or_default(self.outputs.map(Some), defaults.outputs),
            response_type: or_default(self.response_type, defaults.response_type),
            response_image_full_page: or_default(
                self.response_image_full_page,
                defaults.response_image_full_page,
            ),
            selector: or_default(self.selector.map(Some), defaults.selector.clone()),
            proxy_country: or_default(self.proxy_country, defaults.proxy_country.clone()),
        }
    }
}

fn input_schema(defaults: &UniversalScrapingDefaults) -> ToolSchema {
    let mut outputs = Field::string("outputs", "The outputs to return.").one_of(ScrapeOutput::VARIANTS);
    if let Some(output) = defaults.outputs {
        outputs = outputs.default_value(output.as_str());
    }
    let mut selector = Field::string("selector", "The selector to use for the page.");
    if let Some(value) = &defaults.selector {
        selector = selector.default_value(value.as_str());
    }

    ToolSchema::new()
        .field(Field::string("url", "The url of the website to scrape.").required())
        .field(
            Field::boolean("headless", "Whether to use a headless browser.")
                .default_value(defaults.headless),
        )
        .field(
            Field::boolean("js_render", "Whether to use JavaScript rendering.")
                .default_value(defaults.js_render),
        )
        .field(
            Field::string(
                "js_wait_until",
                "The wait until condition for JavaScript rendering. \
                 \"load\" waits until the page is fully loaded, \
                 \"domcontentloaded\" until the DOM is fully loaded, \
                 \"networkidle0\" until the network is idle, \
                 \"networkidle2\" until the network is idle for 2 seconds.",
            )
            .one_of(JsWaitUntil::VARIANTS)
            .default_value(defaults.js_wait_until.as_str()),
        )
        .field(outputs)
        .field(
            Field::string(
                "response_type",
                "The response type: the HTML, plain text or markdown of the page, \
                 or a PNG or JPEG image of it.",
            )
            .one_of(ResponseType::VARIANTS)
            .default_value(defaults.response_type.as_str()),
        )
        .field(
            Field::boolean(
                "response_image_full_page",
                "Whether to return the full page image. Only used with png and jpeg responses.",
            )
            .default_value(defaults.response_image_full_page),
        )
        .field(selector)
        .field(
            Field::string(
                "proxy_country",
                "Two-letter country code for geo-specific access, e.g. \"us\", \"gb\", \"de\". \
                 \"ANY\" uses default country routing.",
            )
            .default_value(defaults.proxy_country.as_str()),
        )
}

/// Scrape a single page with the Scrapeless web unlocker
///
/// # Example
/// ```no_run
/// use scrapeless_web_tools::ScrapelessUniversalScrapingTool;
///
/// // Reads SCRAPELESS_API_KEY
/// let tool = ScrapelessUniversalScrapingTool::from_env()?;
/// # Ok::<(), scrapeless_core::Error>(())
/// ```
pub struct ScrapelessUniversalScrapingTool {
    name: String,
    description: String,
    wrapper: UniversalScrapingApiWrapper,
    defaults: UniversalScrapingDefaults,
    schema: ToolSchema,
}

impl ScrapelessUniversalScrapingTool {
    pub fn new(wrapper: UniversalScrapingApiWrapper) -> Self {
        let defaults = UniversalScrapingDefaults::default();
        Self {
            name: UNIVERSAL_SCRAPING_TOOL_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            schema: input_schema(&defaults),
            wrapper,
            defaults,
        }
    }

    /// Build with an explicit API key, falling back to `SCRAPELESS_API_KEY`
    pub fn with_api_key(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::new(UniversalScrapingApiWrapper::new(api_key)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::with_api_key(None)
    }

    /// Replace the values used for unset parameters
    pub fn with_defaults(mut self, defaults: UniversalScrapingDefaults) -> Self {
        self.schema = input_schema(&defaults);
        self.defaults = defaults;
        self
    }

    /// Create with custom name and description
    pub fn with_config(mut self, name: String, description: String) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub fn defaults(&self) -> &UniversalScrapingDefaults {
        &self.defaults
    }

    async fn scrape(&self, params: &Value) -> Result<ToolResponse> {
        let input: UniversalScrapingInput = parse_input(&self.name, &self.schema, params)?;
        let request = input.resolve(&self.defaults);

        info!(tool = %self.name, url = %request.url, "Scraping page");

        let result = self.wrapper.get_page_content(&request).await.map_err(|e| {
            wrap_invocation_error(
                &self.name,
                &format!("An error occurred while scraping the URL {}", request.url),
                e,
            )
        })?;

        Ok(ToolResponse { result })
    }
}

#[async_trait]
impl Tool for ScrapelessUniversalScrapingTool {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Recorded, RecordingApi};
    use scrapeless_client::UniversalScrapingRequest;
    use scrapeless_core::Error;
    use scrapeless_tool::DefaultToolContext;
    use serde_json::json;

    fn ctx() -> Arc<dyn ToolContext> {
        Arc::new(DefaultToolContext::new("call-1".into(), "inv-1".into()))
    }

    fn tool_with(api: Arc<RecordingApi>) -> ScrapelessUniversalScrapingTool {
        ScrapelessUniversalScrapingTool::new(UniversalScrapingApiWrapper::with_client(api))
    }

    fn universal_request(api: &RecordingApi) -> UniversalScrapingRequest {
        match api.last() {
            Recorded::Universal(request) => request,
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scrape_with_defaults() {
        let api = RecordingApi::new();
        let tool = tool_with(api.clone());

        let response = tool
            .execute(ctx(), json!({"url": "https://www.scrapeless.com/en"}))
            .await
            .unwrap();
        assert_eq!(response.result, json!({"status": "ok"}));

        let request = universal_request(&api);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "actor": "unlocker.webunlocker",
                "input": {
                    "url": "https://www.scrapeless.com/en",
                    "headless": true,
                    "js_render": true,
                    "js_wait_until": "domcontentloaded",
                    "response_type": "html",
                },
                "proxy": {"country": "ANY"},
            })
        );
    }

    #[tokio::test]
    async fn test_image_response_includes_full_page_flag() {
        let api = RecordingApi::new();
        let tool = tool_with(api.clone());

        tool.execute(
            ctx(),
            json!({"url": "https://example.com", "response_type": "png"}),
        )
        .await
        .unwrap();
        assert_eq!(universal_request(&api).input.response_image_full_page, Some(false));

        tool.execute(
            ctx(),
            json!({"url": "https://example.com", "response_type": "markdown", "response_image_full_page": true}),
        )
        .await
        .unwrap();
        assert_eq!(universal_request(&api).input.response_image_full_page, None);
    }

    #[tokio::test]
    async fn test_instance_defaults() {
        let api = RecordingApi::new();
        let tool = tool_with(api.clone()).with_defaults(UniversalScrapingDefaults {
            js_render: false,
            response_type: ResponseType::Markdown,
            proxy_country: "de".into(),
            ..UniversalScrapingDefaults::default()
        });

        assert_eq!(tool.schema()["properties"]["response_type"]["default"], "markdown");

        tool.execute(ctx(), json!({"url": "https://example.com"}))
            .await
            .unwrap();
        let request = universal_request(&api);
        assert!(!request.input.js_render);
        assert_eq!(request.input.response_type, "markdown");
        assert_eq!(request.proxy.country, "de");

        tool.execute(
            ctx(),
            json!({"url": "https://example.com", "js_render": true, "proxy_country": "us"}),
        )
        .await
        .unwrap();
        let request = universal_request(&api);
        assert!(request.input.js_render);
        assert_eq!(request.proxy.country, "us");
    }

    #[tokio::test]
    async fn test_optional_instance_defaults() {
        let api = RecordingApi::new();
        let tool = tool_with(api.clone()).with_defaults(UniversalScrapingDefaults {
            outputs: Some(ScrapeOutput::Links),
            selector: Some("#main".into()),
            ..UniversalScrapingDefaults::default()
        });

        assert_eq!(tool.schema()["properties"]["outputs"]["default"], "links");
        assert_eq!(tool.schema()["properties"]["selector"]["default"], "#main");

        tool.execute(
            ctx(),
            json!({"url": "https://example.com", "outputs": null}),
        )
        .await
        .unwrap();
        let request = universal_request(&api);
        assert_eq!(request.input.outputs.as_deref(), Some("links"));
        assert_eq!(request.input.selector.as_deref(), Some("#main"));

        tool.execute(
            ctx(),
            json!({"url": "https://example.com", "outputs": "emails", "selector": "article"}),
        )
        .await
        .unwrap();
        let request = universal_request(&api);
        assert_eq!(request.input.outputs.as_deref(), Some("emails"));
        assert_eq!(request.input.selector.as_deref(), Some("article"));
    }

    #[tokio::test]
    async fn test_vendor_failure_is_wrapped() {
        let tool = tool_with(RecordingApi::failing("upstream timeout"));

        let err = tool
            .execute(ctx(), json!({"url": "https://example.com/page"}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Invocation { .. }));
        let message = err.to_string();
        assert!(message.starts_with("An error occurred while scraping the URL https://example.com/page: "));
        assert!(message.contains("upstream timeout"));
    }

    #[tokio::test]
    async fn test_invalid_input_passes_through() {
        let api = RecordingApi::new();
        let tool = tool_with(api.clone());

        let err = tool
            .execute(
                ctx(),
                json!({"url": "https://example.com", "js_wait_until": "whenever"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        let err = tool.execute(ctx(), json!({"headless": true})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_schema() {
        let tool = tool_with(RecordingApi::new());
        let schema = tool.schema();

        assert_eq!(tool.name(), "scrapeless_universal_scraping");
        assert_eq!(schema["required"], json!(["url"]));
        assert_eq!(schema["properties"]["js_wait_until"]["default"], "domcontentloaded");
        assert_eq!(schema["properties"]["outputs"]["enum"].as_array().unwrap().len(), 12);
        assert!(schema["properties"]["outputs"].get("default").is_none());
        assert_eq!(schema["properties"]["proxy_country"]["default"], "ANY");
        assert!(!tool.is_long_running());
    }
}
