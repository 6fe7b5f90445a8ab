//! Request objects sent to the Scrapeless API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const UNIVERSAL_SCRAPING_ACTOR: &str = "unlocker.webunlocker";
pub const GOOGLE_SEARCH_ACTOR: &str = "scraper.google.search";
pub const GOOGLE_TRENDS_ACTOR: &str = "scraper.google.trends";

/// Request for the universal scraping (web unlocker) endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalScrapingRequest {
    pub actor: String,
    pub input: UnlockerInput,
    pub proxy: ProxyOptions,
}

/// Input payload of a web unlocker request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockerInput {
    pub url: String,
    pub headless: bool,
    pub js_render: bool,
    pub js_wait_until: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub response_type: String,
    /// Only meaningful for image response types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_image_full_page: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyOptions {
    pub country: String,
}

/// Request for the scraping API (SERP and trends actors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapingTaskRequest {
    pub actor: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyOptions>,
}

impl ScrapingTaskRequest {
    pub fn new(actor: impl Into<String>, input: Value) -> Self {
        Self {
            actor: actor.into(),
            input,
            proxy: None,
        }
    }
}

/// Scrape options shared by the crawler batch-scrape and crawl endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeParams {
    pub formats: Vec<String>,
    pub only_main_content: bool,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub headers: BTreeMap<String, String>,
    /// Milliseconds to wait before fetching content
    pub wait_for: u64,
    /// Request timeout in milliseconds, enforced by the vendor
    pub timeout: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_options: Option<BrowserOptions>,
}

/// Browser session options for crawler scrapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserOptions {
    pub proxy_country: String,
    pub session_name: String,
    pub session_recording: bool,
    /// Session lifetime in seconds
    pub session_ttl: u64,
}

/// Parameters of a crawl job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlParams {
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    pub max_depth: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discovery_depth: Option<u64>,
    pub ignore_sitemap: bool,
    #[serde(rename = "ignoreQueryParameters")]
    pub ignore_query_parameters: bool,
    #[serde(
        rename = "deduplicateSimilarURLs",
        skip_serializing_if = "Option::is_none"
    )]
    pub deduplicate_similar_urls: Option<bool>,
    #[serde(rename = "regexOnFullURL", skip_serializing_if = "Option::is_none")]
    pub regex_on_full_url: Option<bool>,
    pub allow_backward_links: bool,
    pub allow_external_links: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_paths: Option<Vec<String>>,
    pub scrape_options: ScrapeParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scrape_params() -> ScrapeParams {
        ScrapeParams {
            formats: vec!["markdown".into()],
            only_main_content: true,
            include_tags: vec![],
            exclude_tags: vec![],
            headers: BTreeMap::new(),
            wait_for: 0,
            timeout: 30000,
            browser_options: None,
        }
    }

    #[test]
    fn test_unlocker_input_skips_unset_options() {
        let input = UnlockerInput {
            url: "https://example.com".into(),
            headless: true,
            js_render: true,
            js_wait_until: "domcontentloaded".into(),
            outputs: None,
            selector: None,
            response_type: "html".into(),
            response_image_full_page: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("response_image_full_page"));
        assert!(!obj.contains_key("outputs"));
        assert_eq!(obj["js_wait_until"], "domcontentloaded");
    }

    #[test]
    fn test_scrape_params_wire_names() {
        let value = serde_json::to_value(scrape_params()).unwrap();
        assert_eq!(value["onlyMainContent"], true);
        assert_eq!(value["waitFor"], 0);
        assert_eq!(value["includeTags"], json!([]));
        assert!(value.get("browserOptions").is_none());
    }

    #[test]
    fn test_crawl_params_wire_names() {
        let params = CrawlParams {
            limit: 10000,
            delay: None,
            max_depth: 10,
            max_discovery_depth: Some(2),
            ignore_sitemap: false,
            ignore_query_parameters: true,
            deduplicate_similar_urls: Some(true),
            regex_on_full_url: None,
            allow_backward_links: false,
            allow_external_links: false,
            include_paths: Some(vec!["blog/.*".into()]),
            exclude_paths: None,
            scrape_options: scrape_params(),
        };
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value["maxDepth"], 10);
        assert_eq!(value["maxDiscoveryDepth"], 2);
        assert_eq!(value["ignoreQueryParameters"], true);
        assert_eq!(value["deduplicateSimilarURLs"], true);
        assert_eq!(value["includePaths"], json!(["blog/.*"]));
        assert_eq!(value["scrapeOptions"]["timeout"], 30000);
        assert!(value.get("delay").is_none());
        assert!(value.get("regexOnFullURL").is_none());
    }
}
