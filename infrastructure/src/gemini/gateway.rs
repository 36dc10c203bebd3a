//! Gemini gateway: opens persona sessions

use super::error;
use super::session::GeminiSession;
use crate::config::ApiKey;
use async_trait::async_trait;
use persona_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use persona_domain::Model;
use std::time::Duration;
use tracing::{debug, info};

/// Header carrying the API key (keeps it out of URLs and logs)
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gateway to the Gemini Generative Language API
pub struct GeminiLlmGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiLlmGateway {
    pub fn new(
        api_key: ApiKey,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn model_url(&self, model: &Model) -> String {
        format!("{}/models/{}", self.base_url, model.as_str())
    }

    /// Check that the key is accepted and the model exists.
    async fn verify_model(&self, model: &Model) -> Result<(), GatewayError> {
        let url = self.model_url(model);
        debug!("Verifying Gemini model: {}", url);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await
            .map_err(error::from_reqwest)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(error::from_status(status, &body))
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn start_session(
        &self,
        model: &Model,
        seed: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.verify_model(model).await?;

        info!("Starting Gemini session on {}", model);
        Ok(Box::new(GeminiSession::new(
            self.http.clone(),
            format!("{}:generateContent", self.model_url(model)),
            self.api_key.clone(),
            model.clone(),
            seed,
        )))
    }
}
