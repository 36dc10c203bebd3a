//! MediaWiki Action API client

use super::disambiguation::parse_disambiguation_options;
use super::types::{ApiError, Page, PageQueryResponse, ParseResponse, SearchResponse};
use async_trait::async_trait;
use persona_application::ports::reference_lookup::{LookupError, ReferenceLookupPort};
use persona_domain::{Character, CharacterName, Disambiguation, LookupOutcome};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Resolves character names against a MediaWiki installation (Wikipedia by
/// default).
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    /// Create a client for the given `api.php` endpoint.
    pub fn new(
        api_url: impl Into<String>,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LookupError::Service(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// Issue one Action API request and decode its body.
    async fn call<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, LookupError> {
        debug!("MediaWiki request: {:?}", params);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Service(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::Service(format!("Failed to read response: {}", e)))?;

        decode_body(body)
    }

    /// Pick the title to resolve for a free-text name.
    async fn search_title(&self, name: &str) -> Result<Option<String>, LookupError> {
        let response: SearchResponse = self
            .call(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", name),
                ("srlimit", "1"),
                ("srinfo", "suggestion"),
                ("srprop", ""),
            ])
            .await?;
        Ok(response.best_title())
    }

    /// Fetch the intro extract and page properties, following redirects.
    async fn fetch_page(&self, title: &str) -> Result<Page, LookupError> {
        let response: PageQueryResponse = self
            .call(&[
                ("action", "query"),
                ("prop", "pageprops|extracts"),
                ("ppprop", "disambiguation"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;

        first_existing_page(response, title)
    }

    /// Fetch the rendered page and list the options it links to.
    async fn fetch_disambiguation(&self, title: &str) -> Result<Vec<String>, LookupError> {
        let response: ParseResponse = self
            .call(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("redirects", "1"),
            ])
            .await?;
        Ok(parse_disambiguation_options(&response.parse.text))
    }
}

#[async_trait]
impl ReferenceLookupPort for WikipediaClient {
    async fn lookup(&self, name: &CharacterName) -> Result<LookupOutcome, LookupError> {
        let title = self
            .search_title(name.as_str())
            .await?
            .ok_or_else(|| LookupError::NotFound(name.to_string()))?;
        debug!("Search picked \"{}\" for \"{}\"", title, name);

        let page = self.fetch_page(&title).await?;

        if page.is_disambiguation() {
            let options = self.fetch_disambiguation(&page.title).await?;
            info!(
                "\"{}\" is a disambiguation page with {} options",
                page.title,
                options.len()
            );
            return Ok(LookupOutcome::Ambiguous(Disambiguation::from_options(
                options,
            )));
        }

        character_from_page(page).map(LookupOutcome::Found)
    }
}

/// Reject API-level errors, then decode the payload.
fn decode_body<T: DeserializeOwned>(mut body: serde_json::Value) -> Result<T, LookupError> {
    if let Some(error) = body.get_mut("error").map(serde_json::Value::take) {
        let error: ApiError = serde_json::from_value(error)
            .map_err(|e| LookupError::Service(format!("Malformed error response: {}", e)))?;
        return Err(LookupError::Service(format!("{}: {}", error.code, error.info)));
    }

    serde_json::from_value(body)
        .map_err(|e| LookupError::Service(format!("Unexpected response: {}", e)))
}

fn first_existing_page(response: PageQueryResponse, title: &str) -> Result<Page, LookupError> {
    response
        .query
        .and_then(|query| query.pages.into_iter().next())
        .filter(|page| !page.missing && !page.invalid)
        .ok_or_else(|| LookupError::NotFound(title.to_string()))
}

fn character_from_page(page: Page) -> Result<Character, LookupError> {
    let summary = page.extract.unwrap_or_default();
    let summary = summary.trim();
    if summary.is_empty() {
        return Err(LookupError::NotFound(page.title));
    }
    Character::new(page.title, summary).map_err(LookupError::from)
}
