pub mod application;
pub mod connector;
pub mod domain;

pub use application::{GenerateClient, SendTurnUseCase};

pub use connector::{GeminiClient, MockGenerateClient, DEFAULT_BASE_URL};

pub use domain::{
    assemble, extract_reply, tutor_system_directive, ChatError, ChatProfile, Conversation,
    ExplanationLevel, GenerationConfig, ProviderMessage, ProviderRequest, ProviderRole, Role,
    SamplingParams, StyleHints, Turn, DEFAULT_MODEL, SCHEMA_ERROR_PREFIX,
};
