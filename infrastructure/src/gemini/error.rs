//! Mapping of Gemini failures onto `GatewayError`

use super::types::{ErrorResponse, GenerateContentResponse};
use persona_application::ports::llm_gateway::GatewayError;
use reqwest::StatusCode;

/// Convert a transport-level failure.
pub(crate) fn from_reqwest(e: reqwest::Error) -> GatewayError {
    if e.is_decode() {
        GatewayError::RequestFailed(format!("Failed to decode response: {}", e))
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Convert a non-2xx response.
pub(crate) fn from_status(status: StatusCode, body: &str) -> GatewayError {
    let (message, api_status) = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => (parsed.error.message, parsed.error.status),
        Err(_) => (body.trim().to_string(), String::new()),
    };
    let detail = if message.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        message
    };

    match status.as_u16() {
        401 | 403 => GatewayError::AuthenticationFailed(detail),
        400 if detail.contains("API key") || api_status == "UNAUTHENTICATED" => {
            GatewayError::AuthenticationFailed(detail)
        }
        404 => GatewayError::ModelNotAvailable(detail),
        429 => GatewayError::QuotaExceeded(detail),
        code => GatewayError::RequestFailed(format!("HTTP {}: {}", code, detail)),
    }
}

/// Extract the reply text from a successful response.
///
/// Joins the text parts of the first candidate. A blocked prompt, or a
/// candidate that stopped for a reason other than `STOP` without producing
/// text, is reported as [`GatewayError::Blocked`].
pub(crate) fn reply_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GatewayError::Blocked(format!("prompt blocked ({})", reason)));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GatewayError::EmptyResponse);
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }

    match candidate.finish_reason.as_deref() {
        Some(reason) if reason != "STOP" => Err(GatewayError::Blocked(format!(
            "response stopped ({})",
            reason
        ))),
        _ => Err(GatewayError::EmptyResponse),
    }
}
