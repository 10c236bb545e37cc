use std::time::Duration;

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::consts::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_ENDPOINT, ENV_MODEL,
};

use super::provider::OpenAiClient;

/// Generator configuration, resolved once at startup.
///
/// Precedence: CLI flag, then environment, then config file, then built-in
/// default. The API key only comes from the environment.
#[derive(Debug, Clone)]
pub(crate) struct GeneratorSettings {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
}

impl GeneratorSettings {
    pub(crate) fn resolve<F>(args: &GenerateArgs, config: &Config, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_nonempty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: env(ENV_API_KEY).unwrap_or_default().trim().to_string(),
            model: args
                .model
                .clone()
                .or_else(|| env_nonempty(ENV_MODEL))
                .or_else(|| config.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: args
                .endpoint
                .clone()
                .or_else(|| env_nonempty(ENV_ENDPOINT))
                .or_else(|| config.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub(crate) fn from_process_env(args: &GenerateArgs, config: &Config) -> Self {
        Self::resolve(args, config, |key| std::env::var(key).ok())
    }

    /// HTTP client, or `None` when no API key is configured.
    pub(crate) fn client(&self) -> Option<OpenAiClient> {
        if self.api_key.is_empty() {
            return None;
        }
        Some(OpenAiClient::new(&self.endpoint, &self.api_key, self.timeout))
    }
}
