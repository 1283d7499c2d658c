use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ChatError, ProviderRequest};

/// An interface for sending one assembled request to the hosted model and
/// receiving its decoded JSON body.
///
/// Implementors encapsulate transport details (endpoint construction,
/// credentials, timeouts). Exactly one network call per invocation; no
/// retries. Consumers (e.g. [`crate::SendTurnUseCase`]) stay decoupled from
/// any particular provider or HTTP client library.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(&self, model: &str, request: &ProviderRequest) -> Result<Value, ChatError>;
}
