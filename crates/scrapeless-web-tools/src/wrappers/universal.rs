use super::ScrapelessApiWrapper;
use crate::options::{JsWaitUntil, ResponseType, ScrapeOutput};
use scrapeless_client::{
    ProxyOptions, Result, ScrapelessApi, UNIVERSAL_SCRAPING_ACTOR, UniversalScrapingRequest,
    UnlockerInput,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Fully resolved universal scraping parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PageContentParams {
    pub url: String,
    pub headless: bool,
    pub js_render: bool,
    pub js_wait_until: JsWaitUntil,
    pub outputs: Option<ScrapeOutput>,
    pub response_type: ResponseType,
    /// Sent only for image response types
    pub response_image_full_page: bool,
    pub selector: Option<String>,
    pub proxy_country: String,
}

impl PageContentParams {
    /// Parameters for `url` with the stock defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headless: true,
            js_render: true,
            js_wait_until: JsWaitUntil::DomContentLoaded,
            outputs: None,
            response_type: ResponseType::Html,
            response_image_full_page: false,
            selector: None,
            proxy_country: "ANY".to_string(),
        }
    }
}

/// Adapter for the universal scraping (web unlocker) actor
#[derive(Debug, Clone)]
pub struct UniversalScrapingApiWrapper {
    api: ScrapelessApiWrapper,
}

impl UniversalScrapingApiWrapper {
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

    /// Reuse an existing client handle
    pub fn from_api(api: ScrapelessApiWrapper) -> Self {
        Self { api }
    }

    /// Build the vendor request for `params`.
    pub fn build_request(params: &PageContentParams) -> UniversalScrapingRequest {
        let response_image_full_page = params
            .response_type
            .is_image()
            .then_some(params.response_image_full_page);

        UniversalScrapingRequest {
            actor: UNIVERSAL_SCRAPING_ACTOR.to_string(),
            input: UnlockerInput {
                url: params.url.clone(),
                headless: params.headless,
                js_render: params.js_render,
                js_wait_until: params.js_wait_until.as_str().to_string(),
                outputs: params.outputs.map(|o| o.as_str().to_string()),
                selector: params.selector.clone(),
                response_type: params.response_type.as_str().to_string(),
                response_image_full_page,
            },
            proxy: ProxyOptions {
                country: params.proxy_country.clone(),
            },
        }
    }

    /// Fetch one page through the web unlocker
    pub async fn get_page_content(&self, params: &PageContentParams) -> Result<Value> {
        let request = Self::build_request(params);
        debug!(
            url = %params.url,
            response_type = %params.response_type,
            "Sending universal scraping request"
        );
        self.api.client().universal_scrape(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Recorded, RecordingApi};

    #[test]
    fn test_build_request_defaults() {
        let request =
            UniversalScrapingApiWrapper::build_request(&PageContentParams::new("https://example.com"));

        assert_eq!(request.actor, "unlocker.webunlocker");
        assert_eq!(request.input.url, "https://example.com");
        assert!(request.input.headless);
        assert!(request.input.js_render);
        assert_eq!(request.input.js_wait_until, "domcontentloaded");
        assert_eq!(request.input.response_type, "html");
        assert_eq!(request.input.outputs, None);
        assert_eq!(request.input.selector, None);
        assert_eq!(request.input.response_image_full_page, None);
        assert_eq!(request.proxy.country, "ANY");
    }

    #[test]
    fn test_full_page_flag_only_for_images() {
        for response_type in [ResponseType::Png, ResponseType::Jpeg] {
            let params = PageContentParams {
                response_type,
                response_image_full_page: true,
                ..PageContentParams::new("https://example.com")
            };
            let request = UniversalScrapingApiWrapper::build_request(&params);
            assert_eq!(request.input.response_image_full_page, Some(true));
        }

        for response_type in [ResponseType::Html, ResponseType::Plaintext, ResponseType::Markdown] {
            let params = PageContentParams {
                response_type,
                response_image_full_page: true,
                ..PageContentParams::new("https://example.com")
            };
            let request = UniversalScrapingApiWrapper::build_request(&params);
            assert_eq!(request.input.response_image_full_page, None);
            let body = serde_json::to_value(&request).unwrap();
            assert!(body["input"].get("response_image_full_page").is_none());
        }
    }

    #[test]
    fn test_build_request_is_idempotent() {
        let params = PageContentParams {
            outputs: Some(ScrapeOutput::Tables),
            selector: Some("h1".into()),
            response_type: ResponseType::Jpeg,
            ..PageContentParams::new("https://example.com")
        };
        assert_eq!(
            UniversalScrapingApiWrapper::build_request(&params),
            UniversalScrapingApiWrapper::build_request(&params)
        );
    }

    #[tokio::test]
    async fn test_get_page_content() {
        let api = RecordingApi::new();
        let wrapper = UniversalScrapingApiWrapper::with_client(api.clone());
        let params = PageContentParams::new("https://example.com");

        let result = wrapper.get_page_content(&params).await.unwrap();

        assert_eq!(result["status"], "ok");
        assert_eq!(
            api.calls(),
            vec![Recorded::Universal(UniversalScrapingApiWrapper::build_request(&params))]
        );
    }

    #[tokio::test]
    async fn test_get_page_content_propagates_errors() {
        let api = RecordingApi::failing("blocked");
        let wrapper = UniversalScrapingApiWrapper::with_client(api);

        let err = wrapper
            .get_page_content(&PageContentParams::new("https://example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("blocked"));
    }
}
