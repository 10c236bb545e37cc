use std::path::Path;

use crate::utils::read_or_empty;

use super::types::{ChatMessage, ChatRequest, ResponseFormat, Role};

pub(crate) const DEFAULT_SYSTEM_PROMPT: &str =
    "You write one-file Canvas demos under strict CSP. No external URLs. Return JSON.";

const NONE_PLACEHOLDER: &str = "(none)";

/// Context text fed into the prompt. Every field may be empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct PromptInputs {
    pub(crate) commits: String,
    pub(crate) inspirations: String,
    pub(crate) system_prompt: String,
}

impl PromptInputs {
    pub(crate) fn load(commits: &Path, inspirations: &Path, system_prompt: &Path) -> Self {
        Self {
            commits: read_or_empty(commits),
            inspirations: read_or_empty(inspirations),
            system_prompt: read_or_empty(system_prompt),
        }
    }

    pub(crate) fn messages(&self) -> Vec<ChatMessage> {
        let system = if self.system_prompt.is_empty() {
            DEFAULT_SYSTEM_PROMPT.to_string()
        } else {
            self.system_prompt.clone()
        };
        let commits = or_placeholder(&self.commits);
        let inspirations = or_placeholder(&self.inspirations);

        vec![
            ChatMessage {
                role: Role::System,
                content: system,
            },
            ChatMessage {
                role: Role::User,
                content: format!(
                    "Recent commits:\n{commits}\n\nRecent inspirations:\n{inspirations}\n\n\
                     Produce JSON with keys: title, description, to_next, cover_prompt, html."
                ),
            },
        ]
    }

    pub(crate) fn request(&self, model: &str) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: self.messages(),
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.is_empty() { NONE_PLACEHOLDER } else { text }
}
