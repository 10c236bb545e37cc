use serde::{Deserialize, Serialize};

use crate::utils::lenient_string;

/// Raw generator output, before sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct GenerationResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) to_next: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) cover_prompt: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) html: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ChatMessage {
    pub(crate) role: Role,
    pub(crate) content: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest {
    pub(crate) model: String,
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) response_format: ResponseFormat,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ChatResponse {
    #[serde(default)]
    pub(super) choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Choice {
    #[serde(default)]
    pub(super) message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ChoiceMessage {
    #[serde(default)]
    pub(super) content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice; absent or empty reads as "{}".
    pub(super) fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "{}".to_string())
    }
}
