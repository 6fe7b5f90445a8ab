//! All Scrapeless tools behind one client handle

use crate::tools::{
    ScrapelessCrawlerCrawlTool, ScrapelessCrawlerScrapeTool, ScrapelessDeepSerpGoogleSearchTool,
    ScrapelessDeepSerpGoogleTrendsTool, ScrapelessUniversalScrapingTool, UniversalScrapingDefaults,
};
use crate::wrappers::{
    CrawlerCrawlApiWrapper, CrawlerScrapeApiWrapper, DeepSerpApiWrapper, ScrapelessApiWrapper,
    UniversalScrapingApiWrapper,
};
use async_trait::async_trait;
use scrapeless_client::ScrapelessApi;
use scrapeless_core::{Result, ScrapelessConfig, Tool, Toolset};
use std::sync::Arc;

pub const TOOLSET_NAME: &str = "scrapeless";

/// The five Scrapeless tools sharing a single client
///
/// # Example
/// ```no_run
/// use scrapeless_web_tools::ScrapelessToolset;
///
/// let toolset = ScrapelessToolset::from_env()?;
/// for name in toolset.tool_names() {
///     println!("{name}");
/// }
/// # Ok::<(), scrapeless_core::Error>(())
/// ```
pub struct ScrapelessToolset {
    name: String,
    tools: Vec<Arc<dyn Tool>>,
}

impl ScrapelessToolset {
    pub fn new(api: ScrapelessApiWrapper) -> Self {
        Self::with_universal_defaults(api, UniversalScrapingDefaults::default())
    }

    /// Like [`ScrapelessToolset::new`], overriding the universal scraping defaults
    pub fn with_universal_defaults(
        api: ScrapelessApiWrapper,
        defaults: UniversalScrapingDefaults,
    ) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(
                ScrapelessUniversalScrapingTool::new(UniversalScrapingApiWrapper::from_api(
                    api.clone(),
                ))
                .with_defaults(defaults),
            ),
            Arc::new(ScrapelessDeepSerpGoogleSearchTool::new(
                DeepSerpApiWrapper::from_api(api.clone()),
            )),
            Arc::new(ScrapelessDeepSerpGoogleTrendsTool::new(
                DeepSerpApiWrapper::from_api(api.clone()),
            )),
            Arc::new(ScrapelessCrawlerScrapeTool::new(
                CrawlerScrapeApiWrapper::from_api(api.clone()),
            )),
            Arc::new(ScrapelessCrawlerCrawlTool::new(CrawlerCrawlApiWrapper::from_api(api))),
        ];

        Self {
            name: TOOLSET_NAME.to_string(),
            tools,
        }
    }

    /// Connect with an explicit API key, falling back to `SCRAPELESS_API_KEY`
    pub fn with_api_key(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::new(ScrapelessApiWrapper::new(api_key)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::with_api_key(None)
    }

    pub fn from_config(config: &ScrapelessConfig) -> Result<Self> {
        Ok(Self::new(ScrapelessApiWrapper::from_config(config)?))
    }

    pub fn with_client(client: Arc<dyn ScrapelessApi>) -> Self {
        Self::new(ScrapelessApiWrapper::with_client(client))
    }

    /// The tool descriptors without a credential; invoking any of them fails
    pub fn catalog() -> Self {
        Self::new(ScrapelessApiWrapper::detached())
    }

    pub fn tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.clone()
    }

    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[async_trait]
impl Toolset for ScrapelessToolset {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_tools(&self) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools())
    }
}
