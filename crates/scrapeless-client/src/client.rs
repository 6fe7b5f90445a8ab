//! HTTP implementation of [`ScrapelessApi`].

use crate::api::ScrapelessApi;
use crate::error::{ClientError, Result};
use crate::types::{CrawlParams, ScrapeParams, ScrapingTaskRequest, UniversalScrapingRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use scrapeless_core::{ApiToken, ScrapelessConfig};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "x-api-token";

const DEFAULT_BASE_URL: &str = "https://api.scrapeless.com";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const USER_AGENT: &str = concat!("scrapeless-rust/", env!("CARGO_PKG_VERSION"));

const UNLOCKER_PATH: &str = "/api/v1/unlocker/request";
const SCRAPER_REQUEST_PATH: &str = "/api/v1/scraper/request";
const SCRAPER_RESULT_PATH: &str = "/api/v1/scraper/result";
const BATCH_SCRAPE_PATH: &str = "/api/v2/crawler/scrape/batch";
const CRAWL_PATH: &str = "/api/v2/crawler/crawl";

/// Scrapeless API client.
///
/// Built once from a token and shared (typically as `Arc<dyn ScrapelessApi>`);
/// it holds no mutable state. Crawler jobs and deferred scraping tasks are
/// awaited by polling their status endpoint at a fixed interval. There is no
/// local timeout and no retry.
#[derive(Debug, Clone)]
pub struct ScrapelessClient {
    http: reqwest::Client,
    token: ApiToken,
    base_url: String,
    poll_interval: Duration,
}

#[derive(Serialize)]
struct BatchScrapeBody<'a> {
    urls: &'a [String],
    #[serde(flatten)]
    params: &'a ScrapeParams,
}

#[derive(Serialize)]
struct CrawlBody<'a> {
    url: &'a str,
    #[serde(flatten)]
    params: &'a CrawlParams,
}

impl ScrapelessClient {
    /// Create a client against the public API endpoint.
    pub fn new(token: ApiToken) -> Result<Self> {
        Self::builder(token).build()
    }

    pub fn builder(token: ApiToken) -> ScrapelessClientBuilder {
        ScrapelessClientBuilder::new(token)
    }

    /// Create a client from loaded configuration.
    ///
    /// Fails with a configuration error when no token is available.
    pub fn from_config(config: &ScrapelessConfig) -> scrapeless_core::Result<Self> {
        let token = config.api_token()?;
        Self::builder(token)
            .base_url(&config.base_url)
            .poll_interval(Duration::from_millis(config.poll_interval_ms))
            .build()
            .map_err(|e| scrapeless_core::Error::config_error(e.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send an authenticated request and decode the JSON answer.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<(StatusCode, Value)> {
        let response = builder.header(TOKEN_HEADER, self.token.as_str()).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("Response status: {}", status);

        if !status.is_success() {
            let message = error_message(&bytes);
            error!("Scrapeless API request failed - Status: {} - Error: {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() {
            return Ok((status, Value::Null));
        }

        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(json) => json,
            // Non-JSON bodies (raw HTML, markdown) are returned as text
            Err(_) => json!({ "text": String::from_utf8_lossy(&bytes).to_string() }),
        };

        Ok((status, body))
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(StatusCode, Value)> {
        let url = self.url(path);
        debug!("Request URL: POST {}", url);
        self.send(self.http.post(url).json(body)).await
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let url = self.url(path);
        debug!("Request URL: GET {}", url);
        self.send(self.http.get(url)).await
    }

    /// Poll a deferred scraping task until its result is ready (HTTP 200).
    async fn wait_for_task(&self, task_id: &str) -> Result<Value> {
        let path = format!("{}/{}", SCRAPER_RESULT_PATH, task_id);
        loop {
            tokio::time::sleep(self.poll_interval).await;
            let (status, body) = self.get(&path).await?;
            if status == StatusCode::OK {
                return Ok(body);
            }
            debug!(task_id, %status, "Scraping task still pending");
        }
    }

    /// Poll a crawler job until it reaches a terminal status.
    async fn wait_for_job(&self, kind: &'static str, base_path: &str, id: &str) -> Result<Value> {
        let path = format!("{}/{}", base_path, id);
        loop {
            tokio::time::sleep(self.poll_interval).await;
            let (_, body) = self.get(&path).await?;
            if body.get("success").and_then(Value::as_bool) == Some(false) {
                return Err(ClientError::InvalidResponse(format!(
                    "{} job {}: {}",
                    kind,
                    id,
                    error_message_from_value(&body).unwrap_or_else(|| body.to_string())
                )));
            }

            let status = body
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            match status.as_str() {
                "" => {
                    return Err(ClientError::InvalidResponse(format!(
                        "{} job {} status without a state: {}",
                        kind, id, body
                    )));
                }
                "completed" => {
                    info!(kind, id, "Crawler job completed");
                    return Ok(body);
                }
                "failed" | "cancelled" => {
                    return Err(ClientError::Job {
                        kind,
                        id: id.to_string(),
                        message: error_message_from_value(&body)
                            .unwrap_or_else(|| "no error details".to_string()),
                        status,
                    });
                }
                _ => debug!(kind, id, status = %status, "Crawler job still running"),
            }
        }
    }
}

#[async_trait]
impl ScrapelessApi for ScrapelessClient {
    #[instrument(skip(self, request), fields(actor = %request.actor, url = %request.input.url))]
    async fn universal_scrape(&self, request: &UniversalScrapingRequest) -> Result<Value> {
        let (_, body) = self.post(UNLOCKER_PATH, request).await?;
        Ok(body)
    }

    #[instrument(skip(self, request), fields(actor = %request.actor))]
    async fn scraping_scrape(&self, request: &ScrapingTaskRequest) -> Result<Value> {
        let (status, body) = self.post(SCRAPER_REQUEST_PATH, request).await?;
        if status == StatusCode::OK {
            return Ok(body);
        }

        let task_id = body
            .get("taskId")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!("status {} without taskId: {}", status, body))
            })?
            .to_string();

        info!(task_id = %task_id, "Scraping task accepted, waiting for result");
        self.wait_for_task(&task_id).await
    }

    #[instrument(skip(self, urls, params), fields(url_count = urls.len()))]
    async fn batch_scrape_urls(&self, urls: &[String], params: &ScrapeParams) -> Result<Value> {
        let (_, body) = self
            .post(BATCH_SCRAPE_PATH, &BatchScrapeBody { urls, params })
            .await?;
        let id = job_id(&body)?;
        info!(id = %id, "Batch scrape job started");
        self.wait_for_job("batch scrape", BATCH_SCRAPE_PATH, &id).await
    }

    #[instrument(skip(self, params))]
    async fn crawl_url(&self, url: &str, params: &CrawlParams) -> Result<Value> {
        let (_, body) = self.post(CRAWL_PATH, &CrawlBody { url, params }).await?;
        let id = job_id(&body)?;
        info!(id = %id, "Crawl job started");
        self.wait_for_job("crawl", CRAWL_PATH, &id).await
    }
}

/// Builder for [`ScrapelessClient`]
pub struct ScrapelessClientBuilder {
    token: ApiToken,
    base_url: String,
    poll_interval: Duration,
    http: Option<reqwest::Client>,
}

impl ScrapelessClientBuilder {
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            http: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Use a preconfigured `reqwest` client (proxies, TLS settings, ...).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<ScrapelessClient> {
        url::Url::parse(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().user_agent(USER_AGENT).build()?,
        };

        Ok(ScrapelessClient {
            http,
            token: self.token,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            poll_interval: self.poll_interval,
        })
    }
}

fn job_id(body: &Value) -> Result<String> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ClientError::InvalidResponse(
            error_message_from_value(body).unwrap_or_else(|| body.to_string()),
        ));
    }

    body.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing job id: {}", body)))
}

fn error_message_from_value(body: &Value) -> Option<String> {
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn error_message(bytes: &[u8]) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(body) => error_message_from_value(&body).unwrap_or_else(|| body.to_string()),
        Err(_) if bytes.is_empty() => "empty response body".to_string(),
        Err(_) => String::from_utf8_lossy(bytes).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrowserOptions, ProxyOptions, UnlockerInput};
    use mockito::Matcher;
    use std::collections::BTreeMap;

    fn client_for(server: &mockito::Server) -> ScrapelessClient {
        ScrapelessClient::builder(ApiToken::new("test-token").unwrap())
            .base_url(server.url())
            .poll_interval(Duration::from_millis(1))
            .build()
            .unwrap()
    }

    fn scrape_params() -> ScrapeParams {
        ScrapeParams {
            formats: vec!["markdown".into()],
            only_main_content: true,
            include_tags: vec![],
            exclude_tags: vec![],
            headers: BTreeMap::new(),
            wait_for: 0,
            timeout: 30000,
            browser_options: Some(BrowserOptions {
                proxy_country: "ANY".into(),
                session_name: "Crawl".into(),
                session_recording: true,
                session_ttl: 900,
            }),
        }
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = ScrapelessClient::builder(ApiToken::new("t").unwrap())
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(ClientError::UrlError(_))));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ScrapelessClient::builder(ApiToken::new("t").unwrap())
            .base_url("https://api.scrapeless.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.scrapeless.com");
    }

    #[test]
    fn test_from_config() {
        let mut config = ScrapelessConfig::test_defaults();
        config.base_url = "https://api.scrapeless.com".into();
        assert!(ScrapelessClient::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_universal_scrape_sends_token_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", UNLOCKER_PATH)
            .match_header(TOKEN_HEADER, "test-token")
            .match_body(Matcher::PartialJson(json!({
                "actor": "unlocker.webunlocker",
                "input": {"url": "https://example.com", "response_type": "html"},
                "proxy": {"country": "ANY"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":200,"data":"<html></html>"}"#)
            .create_async()
            .await;

        let request = UniversalScrapingRequest {
            actor: "unlocker.webunlocker".into(),
            input: UnlockerInput {
                url: "https://example.com".into(),
                headless: true,
                js_render: true,
                js_wait_until: "domcontentloaded".into(),
                outputs: None,
                selector: None,
                response_type: "html".into(),
                response_image_full_page: None,
            },
            proxy: ProxyOptions {
                country: "ANY".into(),
            },
        };

        let body = client_for(&server).universal_scrape(&request).await.unwrap();
        assert_eq!(body["data"], "<html></html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_json_body_returned_as_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", SCRAPER_REQUEST_PATH)
            .with_status(200)
            .with_body("# Markdown page")
            .create_async()
            .await;

        let request = ScrapingTaskRequest::new("scraper.google.search", json!({"q": "x"}));
        let body = client_for(&server).scraping_scrape(&request).await.unwrap();
        assert_eq!(body["text"], "# Markdown page");
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", SCRAPER_REQUEST_PATH)
            .with_status(401)
            .with_body(r#"{"message":"invalid api token"}"#)
            .create_async()
            .await;

        let request = ScrapingTaskRequest::new("scraper.google.search", json!({"q": "x"}));
        let err = client_for(&server).scraping_scrape(&request).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deferred_task_is_polled() {
        let mut server = mockito::Server::new_async().await;
        let submit = server
            .mock("POST", SCRAPER_REQUEST_PATH)
            .with_status(201)
            .with_body(r#"{"taskId":"task-42"}"#)
            .create_async()
            .await;
        let result = server
            .mock("GET", "/api/v1/scraper/result/task-42")
            .match_header(TOKEN_HEADER, "test-token")
            .with_status(200)
            .with_body(r#"{"organic_results":[{"title":"Rust"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let request = ScrapingTaskRequest::new("scraper.google.search", json!({"q": "rust"}));
        let body = client_for(&server).scraping_scrape(&request).await.unwrap();
        assert_eq!(body["organic_results"][0]["title"], "Rust");
        submit.assert_async().await;
        result.assert_async().await;
    }

    #[tokio::test]
    async fn test_batch_scrape_waits_for_completion() {
        let mut server = mockito::Server::new_async().await;
        let submit = server
            .mock("POST", BATCH_SCRAPE_PATH)
            .match_body(Matcher::PartialJson(json!({
                "urls": ["https://example.com"],
                "formats": ["markdown"],
                "browserOptions": {"session_name": "Crawl", "session_ttl": 900}
            })))
            .with_status(200)
            .with_body(r#"{"success":true,"id":"batch-1"}"#)
            .create_async()
            .await;
        let status = server
            .mock("GET", "/api/v2/crawler/scrape/batch/batch-1")
            .with_status(200)
            .with_body(r##"{"status":"completed","data":[{"markdown":"# Example"}]}"##)
            .create_async()
            .await;

        let urls = vec!["https://example.com".to_string()];
        let body = client_for(&server)
            .batch_scrape_urls(&urls, &scrape_params())
            .await
            .unwrap();
        assert_eq!(body["data"][0]["markdown"], "# Example");
        submit.assert_async().await;
        status.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_crawl_job_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", CRAWL_PATH)
            .match_body(Matcher::PartialJson(json!({"url": "https://example.com", "limit": 5})))
            .with_status(200)
            .with_body(r#"{"success":true,"id":"crawl-9"}"#)
            .create_async()
            .await;
        let _status = server
            .mock("GET", "/api/v2/crawler/crawl/crawl-9")
            .with_status(200)
            .with_body(r#"{"status":"failed","error":"robots.txt disallows crawling"}"#)
            .create_async()
            .await;

        let params = CrawlParams {
            limit: 5,
            delay: None,
            max_depth: 10,
            max_discovery_depth: None,
            ignore_sitemap: false,
            ignore_query_parameters: false,
            deduplicate_similar_urls: None,
            regex_on_full_url: None,
            allow_backward_links: false,
            allow_external_links: false,
            include_paths: None,
            exclude_paths: None,
            scrape_options: scrape_params(),
        };

        let err = client_for(&server)
            .crawl_url("https://example.com", &params)
            .await
            .unwrap_err();
        match err {
            ClientError::Job { id, status, message, .. } => {
                assert_eq!(id, "crawl-9");
                assert_eq!(status, "failed");
                assert!(message.contains("robots.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn crawl_params() -> CrawlParams {
        CrawlParams {
            limit: 5,
            delay: None,
            max_depth: 10,
            max_discovery_depth: None,
            ignore_sitemap: false,
            ignore_query_parameters: false,
            deduplicate_similar_urls: None,
            regex_on_full_url: None,
            allow_backward_links: false,
            allow_external_links: false,
            include_paths: None,
            exclude_paths: None,
            scrape_options: scrape_params(),
        }
    }

    #[tokio::test]
    async fn test_unsuccessful_job_status_stops_polling() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", CRAWL_PATH)
            .with_status(200)
            .with_body(r#"{"success":true,"id":"c1"}"#)
            .create_async()
            .await;
        let status = server
            .mock("GET", "/api/v2/crawler/crawl/c1")
            .with_status(200)
            .with_body(r#"{"success":false,"error":"job not found"}"#)
            .expect(1)
            .create_async()
            .await;

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            client_for(&server).crawl_url("https://example.com", &crawl_params()),
        )
        .await
        .expect("polling should stop on an unsuccessful status");

        let err = outcome.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(ref m) if m.contains("job not found")));
        status.assert_async().await;
    }

    #[tokio::test]
    async fn test_job_status_without_state_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", BATCH_SCRAPE_PATH)
            .with_status(200)
            .with_body(r#"{"success":true,"id":"batch-2"}"#)
            .create_async()
            .await;
        let _status = server
            .mock("GET", "/api/v2/crawler/scrape/batch/batch-2")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            client_for(&server).batch_scrape_urls(&["https://a.example".to_string()], &scrape_params()),
        )
        .await
        .expect("polling should stop on a status without a state");

        let err = outcome.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(ref m) if m.contains("batch-2")));
    }

    #[tokio::test]
    async fn test_rejected_job_submission() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", BATCH_SCRAPE_PATH)
            .with_status(200)
            .with_body(r#"{"success":false,"error":"quota exceeded"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .batch_scrape_urls(&["https://a.example".to_string()], &scrape_params())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(ref m) if m == "quota exceeded"));
    }
}
