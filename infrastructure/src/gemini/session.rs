//! Gemini chat session

use super::error;
use super::gateway::API_KEY_HEADER;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::ApiKey;
use async_trait::async_trait;
use persona_application::ports::llm_gateway::{GatewayError, LlmSession};
use persona_domain::{Message, Model};
use tokio::sync::Mutex;
use tracing::debug;

pub struct GeminiSession {
    http: reqwest::Client,
    generate_url: String,
    api_key: ApiKey,
    model: Model,
    /// Conversation history (stateless API requires full history each call)
    history: Mutex<Vec<Message>>,
}

impl GeminiSession {
    /// Create a session whose history starts with `seed` as a user turn.
    pub fn new(
        http: reqwest::Client,
        generate_url: String,
        api_key: ApiKey,
        model: Model,
        seed: &str,
    ) -> Self {
        Self {
            http,
            generate_url,
            api_key,
            model,
            history: Mutex::new(vec![Message::user(seed)]),
        }
    }

    #[cfg(test)]
    async fn history(&self) -> Vec<Message> {
        self.history.lock().await.clone()
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(&self.generate_url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(error::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::from_status(status, &body));
        }

        response.json().await.map_err(error::from_reqwest)
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut history = self.history.lock().await;
        let request = GenerateContentRequest::with_user_turn(&history, content);

        let response = self.generate(&request).await?;
        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini usage - prompt: {:?}, response: {:?}, total: {:?} tokens",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }
        let reply = error::reply_text(response)?;

        // Only completed exchanges enter the history
        history.push(Message::user(content));
        history.push(Message::model(reply.clone()));

        Ok(reply)
    }
}
