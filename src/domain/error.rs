use thiserror::Error;

/// Fixed prefix embedded in every schema diagnostic, followed by the full
/// raw response body so nothing the provider sent is ever hidden.
pub const SCHEMA_ERROR_PREFIX: &str = "unexpected response shape from provider";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{SCHEMA_ERROR_PREFIX}: {0}")]
    Schema(String),
}

impl ChatError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a schema error carrying the raw provider body verbatim.
    pub fn schema(raw_body: impl Into<String>) -> Self {
        Self::Schema(raw_body.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}
