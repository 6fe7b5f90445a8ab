use super::ScrapelessApiWrapper;
use crate::options::{SafeSearch, SearchType, Toggle, TrendsDataType};
use scrapeless_client::{
    GOOGLE_SEARCH_ACTOR, GOOGLE_TRENDS_ACTOR, Result, ScrapelessApi, ScrapingTaskRequest,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Fully resolved Google search parameters
///
/// Serializes to the `input` object of the `scraper.google.search` actor;
/// unset optional parameters are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleSearchParams {
    pub q: String,
    pub hl: String,
    pub gl: String,
    pub google_domain: String,
    pub start: u64,
    pub num: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ludocid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kgmid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<SafeSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfpr: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbm: Option<SearchType>,
}

impl GoogleSearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            hl: "en".to_string(),
            gl: "us".to_string(),
            google_domain: "google.com".to_string(),
            start: 0,
            num: 10,
            ludocid: None,
            kgmid: None,
            ibp: None,
            cr: None,
            lr: None,
            tbs: None,
            safe: None,
            nfpr: None,
            filter: None,
            tbm: None,
        }
    }
}

/// Fully resolved Google Trends parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleTrendsParams {
    pub q: String,
    pub data_type: TrendsDataType,
    pub date: String,
    pub hl: String,
    pub tz: String,
    /// Worldwide when unset or empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    pub cat: String,
}

impl GoogleTrendsParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            data_type: TrendsDataType::InterestOverTime,
            date: "today 1-m".to_string(),
            hl: "en".to_string(),
            tz: "420".to_string(),
            geo: None,
            cat: "0".to_string(),
        }
    }
}

/// Adapter for the DeepSerp scraping actors (Google search and trends)
#[derive(Debug, Clone)]
pub struct DeepSerpApiWrapper {
    api: ScrapelessApiWrapper,
}

impl DeepSerpApiWrapper {
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

    pub fn build_search_request(params: &GoogleSearchParams) -> Result<ScrapingTaskRequest> {
        Ok(ScrapingTaskRequest::new(
            GOOGLE_SEARCH_ACTOR,
            serde_json::to_value(params)?,
        ))
    }

    pub fn build_trends_request(params: &GoogleTrendsParams) -> Result<ScrapingTaskRequest> {
        Ok(ScrapingTaskRequest::new(
            GOOGLE_TRENDS_ACTOR,
            serde_json::to_value(params)?,
        ))
    }

    /// Submit an arbitrary scraping task
    pub async fn scrape_results(&self, request: &ScrapingTaskRequest) -> Result<Value> {
        debug!(actor = %request.actor, "Sending scraping task");
        self.api.client().scraping_scrape(request).await
    }

    pub async fn get_google_search_results(&self, params: &GoogleSearchParams) -> Result<Value> {
        let request = Self::build_search_request(params)?;
        self.scrape_results(&request).await
    }

    pub async fn get_google_trends_results(&self, params: &GoogleTrendsParams) -> Result<Value> {
        let request = Self::build_trends_request(params)?;
        self.scrape_results(&request).await
    }
}
