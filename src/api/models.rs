use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamResult;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_page() -> String {
    "1".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub engine: String,
}

impl From<UpstreamResult> for SearchResult {
    fn from(result: UpstreamResult) -> Self {
        SearchResult {
            title: result.title,
            url: result.url,
            snippet: result.content,
            engine: result.engine,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
