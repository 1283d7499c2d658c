use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::application::GenerateClient;
use crate::domain::{ChatError, ProviderRequest};

/// Public Gemini REST API root, including the API version segment.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
const GENERATE_SUFFIX: &str = ":generateContent";
/// Single bound on the whole call; there is no cancellation beyond it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Implements [`GenerateClient`] so the turn flow stays decoupled from
/// transport and serialization details. One POST per invocation, a fixed
/// 60-second timeout, no retries — a failed call is reported, not retried,
/// because the provider may already have produced a reply.
///
/// Configuration comes from the environment:
///
/// ```text
/// GEMINI_API_KEY=...                                      # required
/// GEMINI_BASE_URL=https://generativelanguage.googleapis.com/v1   # optional
/// ```
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Construct from the environment. A missing `GEMINI_API_KEY` is a
    /// [`ChatError::Config`]; it fails the current turn (or startup) but is
    /// never fatal to an ongoing session.
    pub fn from_env() -> Result<Self, ChatError> {
        let key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ChatError::config("GEMINI_API_KEY is not set"))?;
        let base =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, base))
    }

    /// `{base}/models/{model}:generateContent?key={credential}`
    fn endpoint_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}{}?key={}",
            self.base_url, model, GENERATE_SUFFIX, self.api_key
        )
    }
}

#[async_trait]
impl GenerateClient for GeminiClient {
    async fn generate(&self, model: &str, request: &ProviderRequest) -> Result<Value, ChatError> {
        let response = self
            .client
            .post(self.endpoint_url(model))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::transport(format!(
                        "request to {model} timed out after {}s",
                        REQUEST_TIMEOUT.as_secs()
                    ))
                } else if e.is_connect() {
                    ChatError::transport(format!("could not connect to provider: {e}"))
                } else {
                    ChatError::transport(format!("request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}: {body}");
            return Err(ChatError::transport(format!(
                "API returned {status}: {body}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ChatError::transport(format!("malformed JSON body: {e}")))
    }
}
