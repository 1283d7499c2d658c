use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::application::GenerateClient;
use crate::domain::{ChatError, ProviderRequest};

/// Scripted [`GenerateClient`] for tests.
///
/// Replies are consumed in order; when the script runs out the mock keeps
/// returning a canned well-formed response. Every request body is recorded
/// so tests can assert on what was actually sent.
pub struct MockGenerateClient {
    script: Mutex<VecDeque<Result<Value, ChatError>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockGenerateClient {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a well-formed response carrying `text` as the reply.
    pub fn with_reply(self, text: &str) -> Self {
        self.push(Ok(Self::well_formed(text)));
        self
    }

    /// Queue an arbitrary raw body, e.g. a malformed shape.
    pub fn with_raw(self, raw: Value) -> Self {
        self.push(Ok(raw));
        self
    }

    pub fn with_error(self, err: ChatError) -> Self {
        self.push(Err(err));
        self
    }

    /// The provider shape the extractor expects.
    pub fn well_formed(text: &str) -> Value {
        json!({"candidates":[{"content":{"parts":[{"text": text}]}}]})
    }

    /// Request bodies seen so far, as `(model, serialized body)` pairs.
    pub fn recorded(&self) -> Vec<(String, Value)> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    fn push(&self, entry: Result<Value, ChatError>) {
        self.script.lock().expect("script lock").push_back(entry);
    }
}

impl Default for MockGenerateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateClient for MockGenerateClient {
    async fn generate(&self, model: &str, request: &ProviderRequest) -> Result<Value, ChatError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ChatError::transport(format!("unserializable request: {e}")))?;
        self.requests
            .lock()
            .expect("requests lock")
            .push((model.to_string(), body));

        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Self::well_formed("ok")))
    }
}
