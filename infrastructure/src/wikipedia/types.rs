//! MediaWiki Action API response types (`formatversion=2`)

use serde::Deserialize;

/// API-level error (returned with HTTP 200)
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

// ==================== list=search ====================

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub searchinfo: Option<SearchInfo>,
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchInfo {
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
}

impl SearchResponse {
    /// Title to look up: the spelling suggestion if there is one, otherwise
    /// the best hit.
    pub fn best_title(self) -> Option<String> {
        let query = self.query?;
        let suggestion = query
            .searchinfo
            .and_then(|info| info.suggestion)
            .filter(|s| !s.trim().is_empty());
        suggestion.or_else(|| query.search.into_iter().next().map(|hit| hit.title))
    }
}

// ==================== prop=pageprops|extracts ====================

#[derive(Debug, Deserialize)]
pub(crate) struct PageQueryResponse {
    #[serde(default)]
    pub query: Option<PageQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
    #[serde(default)]
    pub extract: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageProps {
    #[serde(default)]
    pub disambiguation: Option<serde_json::Value>,
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

// ==================== action=parse ====================

#[derive(Debug, Deserialize)]
pub(crate) struct ParseResponse {
    pub parse: ParsedPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParsedPage {
    pub text: String,
}
