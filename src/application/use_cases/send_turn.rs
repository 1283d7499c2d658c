use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::GenerateClient;
use crate::domain::{assemble, extract_reply, ChatError, ChatProfile, Conversation};

/// Orchestrates one chat turn: append the user's input, assemble the
/// request from the full conversation plus the active profile, call the
/// provider once, extract the reply, and append it as an assistant turn.
///
/// This is the single place where errors become visible text. Whatever goes
/// wrong — missing config, transport failure, unexpected response shape —
/// the failure is appended as the assistant turn instead of being raised,
/// so the conversation always grows by exactly two turns and the session
/// keeps going.
pub struct SendTurnUseCase {
    client: Arc<dyn GenerateClient>,
}

impl SendTurnUseCase {
    pub fn new(client: Arc<dyn GenerateClient>) -> Self {
        Self { client }
    }

    /// Run one turn and return the text that was appended as the reply.
    pub async fn execute(
        &self,
        conversation: &mut Conversation,
        input: impl Into<String>,
        profile: &ChatProfile,
    ) -> String {
        conversation.push_user(input);

        let reply = match self.generate_reply(conversation, profile).await {
            Ok(text) => text,
            Err(e) => {
                warn!("turn failed: {e}");
                e.to_string()
            }
        };

        conversation.push_assistant(reply.clone());
        reply
    }

    async fn generate_reply(
        &self,
        conversation: &Conversation,
        profile: &ChatProfile,
    ) -> Result<String, ChatError> {
        let request = assemble(conversation, profile);
        debug!(
            session = conversation.id(),
            messages = request.message_count(),
            model = profile.config.model_name(),
            "sending generate request"
        );

        let raw = self
            .client
            .generate(profile.config.model_name(), &request)
            .await?;
        extract_reply(&raw)
    }
}
