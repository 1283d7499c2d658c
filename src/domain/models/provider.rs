use serde::{Deserialize, Serialize};

use super::GenerationConfig;

/// Role vocabulary of the provider's message schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    pub text: String,
}

/// One entry of the request's `contents` array:
/// `{"role": ..., "parts": [{"text": ...}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMessage {
    pub role: ProviderRole,
    pub parts: Vec<MessagePart>,
}

impl ProviderMessage {
    pub fn new(role: ProviderRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![MessagePart { text: text.into() }],
        }
    }

    pub fn text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

/// The `generationConfig` object of the request body. Only the sampling
/// fields go over the wire; model selection lives in the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl From<&GenerationConfig> for SamplingParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature(),
            top_p: config.top_p(),
            max_output_tokens: config.max_output_tokens(),
        }
    }
}

/// Complete `generateContent` request body. Derived and transient; built
/// fresh by the prompt assembler for every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub contents: Vec<ProviderMessage>,
    pub generation_config: SamplingParams,
}

impl ProviderRequest {
    pub fn message_count(&self) -> usize {
        self.contents.len()
    }
}
