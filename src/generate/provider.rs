use std::time::Duration;

use crate::error::GenerateError;

use super::types::{ChatRequest, ChatResponse};

/// A chat completion backend. Returns the first choice's message content.
pub(crate) trait ChatCompletion {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerateError>;
}

/// OpenAI-compatible HTTP endpoint, one attempt per call.
pub(crate) struct OpenAiClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub(crate) fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

impl ChatCompletion for OpenAiClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerateError> {
        tracing::debug!(endpoint = %self.endpoint, model = %request.model, "requesting completion");

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(request)?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| GenerateError::Body(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(GenerateError::Envelope)?;
        Ok(parsed.into_content())
    }
}
