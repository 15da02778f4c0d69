use serde::{Deserialize, Serialize};

use crate::data_models::SearchHit;
use crate::pagination::Search;
use crate::wikipedia::article_url;

/// Query string of `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<String>,
}

impl SearchParams {
    /// Raw `page` value, `"1"` when missing or empty.
    pub fn page_num(&self) -> &str {
        match self.page.as_deref() {
            Some(page) if !page.is_empty() => page,
            _ => "1",
        }
    }
}

/// Template context for the results page.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub total_hits: u64,
    pub total_pages: u64,
    pub next_page: u64,
    pub current_page: u64,
    pub previous_page: u64,
    pub is_last_page: bool,
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Serialize)]
pub struct ResultEntry {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub pageid: u64,
    pub size: u64,
    pub wordcount: u64,
    pub last_edited: Option<String>,
}

impl From<&SearchHit> for ResultEntry {
    fn from(hit: &SearchHit) -> Self {
        ResultEntry {
            title: hit.title.clone(),
            url: article_url(&hit.title),
            snippet: hit.snippet.clone(),
            pageid: hit.pageid,
            size: hit.size,
            wordcount: hit.wordcount,
            last_edited: hit.timestamp.map(|ts| ts.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<&Search> for SearchPage {
    fn from(search: &Search) -> Self {
        SearchPage {
            query: search.query.clone(),
            total_hits: search.results.total_hits(),
            total_pages: search.total_pages,
            next_page: search.next_page,
            current_page: search.current_page(),
            previous_page: search.previous_page(),
            is_last_page: search.is_last_page(),
            results: search.results.hits().iter().map(ResultEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_num_defaults_to_one() {
        let params = SearchParams::default();
        assert_eq!(params.page_num(), "1");

        let params = SearchParams {
            q: "cat".into(),
            page: Some(String::new()),
        };
        assert_eq!(params.page_num(), "1");

        let params = SearchParams {
            q: "cat".into(),
            page: Some("4".into()),
        };
        assert_eq!(params.page_num(), "4");
    }

    #[test]
    fn test_search_page_from_search() {
        let results: crate::data_models::WikipediaSearchResponse = serde_json::from_str(
            r#"{"query":{"searchinfo":{"totalhits":45},"search":[
                {"title":"Felis catus","pageid":1,"snippet":"x","timestamp":"2023-01-02T03:04:05Z"}
            ]}}"#,
        )
        .unwrap();
        let search = Search::new("cat".into(), 3, 20, results);
        let page = SearchPage::from(&search);

        assert_eq!(page.total_hits, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.previous_page, 2);
        assert!(page.is_last_page);
        assert_eq!(page.results[0].url, "https://en.wikipedia.org/wiki/Felis_catus");
        assert_eq!(page.results[0].last_edited.as_deref(), Some("2023-01-02"));
    }
}
