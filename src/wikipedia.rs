use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::data_models::WikipediaSearchResponse;
use crate::error::{AppError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("wikisearch/", env!("CARGO_PKG_VERSION"));
const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Query string sent to the MediaWiki API for a full-text search.
#[derive(Serialize)]
struct SearchParams<'a> {
    action: &'static str,
    list: &'static str,
    prop: &'static str,
    inprop: &'static str,
    utf8: &'static str,
    format: &'static str,
    origin: &'static str,
    srlimit: u64,
    srsearch: &'a str,
    sroffset: u64,
}

impl<'a> SearchParams<'a> {
    fn new(search_query: &'a str, page_size: u64, offset: u64) -> Self {
        SearchParams {
            action: "query",
            list: "search",
            prop: "info",
            inprop: "url",
            utf8: "",
            format: "json",
            origin: "*",
            srlimit: page_size,
            srsearch: search_query,
            sroffset: offset,
        }
    }
}

/// Thin client for the Wikipedia search endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch one page of results starting at the zero-based `offset`.
    pub async fn search(
        &self,
        search_query: &str,
        page_size: u64,
        offset: u64,
    ) -> Result<WikipediaSearchResponse> {
        let res = self
            .client
            .get(&self.endpoint)
            .query(&SearchParams::new(search_query, page_size, offset))
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            let status = res.status();
            let dump = dump_response(res).await;
            return Err(AppError::UpstreamStatus { status, dump });
        }

        let body = res.text().await?;
        let search_response = serde_json::from_str(&body)?;
        Ok(search_response)
    }
}

/// Render a response as raw HTTP text (status line, headers, body) for diagnostics.
async fn dump_response(res: Response) -> String {
    let mut dump = format!("{:?} {}\r\n", res.version(), res.status());
    for (name, value) in res.headers() {
        dump.push_str(&format!(
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    dump.push_str("\r\n");
    // best effort, the status is what matters
    if let Ok(body) = res.text().await {
        dump.push_str(&body);
    }
    dump
}

/// Link to the article page for a search hit title.
pub fn article_url(title: &str) -> String {
    format!("{}{}", ARTICLE_BASE_URL, title.replace(' ', "_"))
}
