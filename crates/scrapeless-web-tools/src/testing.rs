//! Recording `ScrapelessApi` double for unit tests

use async_trait::async_trait;
use scrapeless_client::{
    ClientError, CrawlParams, Result, ScrapeParams, ScrapelessApi, ScrapingTaskRequest,
    UniversalScrapingRequest,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// One call received by [`RecordingApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Universal(UniversalScrapingRequest),
    Scraping(ScrapingTaskRequest),
    BatchScrape(Vec<String>, ScrapeParams),
    Crawl(String, CrawlParams),
}

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Recorded>>,
    failure: Option<String>,
}

impl RecordingApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every call fails with a vendor error carrying `message`
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.calls().pop().expect("no call recorded")
    }

    fn record(&self, call: Recorded) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(ClientError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(json!({ "status": "ok" })),
        }
    }
}

#[async_trait]
impl ScrapelessApi for RecordingApi {
    async fn universal_scrape(&self, request: &UniversalScrapingRequest) -> Result<Value> {
        self.record(Recorded::Universal(request.clone()))
    }

    async fn scraping_scrape(&self, request: &ScrapingTaskRequest) -> Result<Value> {
        self.record(Recorded::Scraping(request.clone()))
    }

    async fn batch_scrape_urls(&self, urls: &[String], params: &ScrapeParams) -> Result<Value> {
        self.record(Recorded::BatchScrape(urls.to_vec(), params.clone()))
    }

    async fn crawl_url(&self, url: &str, params: &CrawlParams) -> Result<Value> {
        self.record(Recorded::Crawl(url.to_string(), params.clone()))
    }
}
