use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response body of the MediaWiki `list=search` query.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WikipediaSearchResponse {
    pub batchcomplete: String,
    #[serde(rename = "continue")]
    pub continuation: Option<SearchContinue>,
    pub query: SearchQueryResult,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchContinue {
    pub sroffset: u64,
    #[serde(rename = "continue")]
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchQueryResult {
    pub searchinfo: SearchInfo,
    pub search: Vec<SearchHit>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchInfo {
    pub totalhits: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchHit {
    pub ns: i64,
    pub title: String,
    pub pageid: u64,
    pub size: u64,
    pub wordcount: u64,
    /// HTML fragment with `<span class="searchmatch">` highlights.
    pub snippet: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl WikipediaSearchResponse {
    pub fn total_hits(&self) -> u64 {
        self.query.searchinfo.totalhits
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.query.search
    }
}
