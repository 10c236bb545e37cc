//! Remote demo generation with a deterministic fallback
//!
//! The remote call is a single attempt. Every failure is absorbed here:
//! callers always receive a `GenerationResult`.

mod fallback;
mod prompt;
mod provider;
mod settings;
mod types;

pub(crate) use fallback::{FALLBACK_HTML, fallback_result};
pub(crate) use prompt::PromptInputs;
pub(crate) use provider::ChatCompletion;
pub(crate) use settings::GeneratorSettings;
pub(crate) use types::GenerationResult;

use crate::error::GenerateError;

/// Ask the model for a demo and parse its JSON payload.
pub(crate) fn request_generation(
    client: &dyn ChatCompletion,
    model: &str,
    inputs: &PromptInputs,
) -> Result<GenerationResult, GenerateError> {
    let content = client.complete(&inputs.request(model))?;
    parse_payload(&content)
}

fn parse_payload(content: &str) -> Result<GenerationResult, GenerateError> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(GenerateError::Payload)?;
    if !value.is_object() {
        return Err(GenerateError::NotAnObject);
    }
    serde_json::from_value(value).map_err(GenerateError::Payload)
}

/// Generate a result, substituting the fallback when there is no client or
/// the remote call fails.
pub(crate) fn generate(
    client: Option<&dyn ChatCompletion>,
    model: &str,
    inputs: &PromptInputs,
) -> GenerationResult {
    let Some(client) = client else {
        tracing::debug!("no API key configured, using fallback demo");
        return fallback_result();
    };

    match request_generation(client, model, inputs) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("remote generation failed, using fallback: {e}");
            fallback_result()
        }
    }
}
