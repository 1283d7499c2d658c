use crate::domain::models::{
    ChatProfile, Conversation, ExplanationLevel, ProviderMessage, ProviderRequest, ProviderRole,
    Role, SamplingParams,
};

/// Build the tutor persona directive for a given explanation level.
///
/// Fixed policy text with the level's style instruction interpolated; the
/// UI collaborator passes the result as `ChatProfile::system_directive`
/// when tutor mode is on.
pub fn tutor_system_directive(level: ExplanationLevel) -> String {
    format!(
        "You are an expert in management theory with a talent for explaining \
         it at the audience's level. Always follow these rules:\n\
         - {}\n\
         - Use short bullet lists, numbered steps, or analogies where they help.\n\
         - Include beginner-friendly definitions of the terms you rely on.\n\
         - When the question names a company or industry, tailor the \
         explanation to that context.",
        level.style_directive()
    )
}

/// Translate the conversation plus the active profile into a provider
/// request body.
///
/// Ordering is exactly `[system directive?] + turns + [style hints?]`.
/// Turns map `User`→`user` and `Assistant`→`assistant`; any other role is
/// downgraded to `user` rather than dropped, so nothing the session
/// recorded is ever missing from the request. Text is passed through
/// untouched: the provider is authoritative on length and encoding limits.
pub fn assemble(conversation: &Conversation, profile: &ChatProfile) -> ProviderRequest {
    let mut contents =
        Vec::with_capacity(conversation.len() + 1 + usize::from(profile.style_hints.any()));

    if let Some(directive) = profile.system_directive.as_deref() {
        contents.push(ProviderMessage::new(ProviderRole::System, directive));
    }

    for turn in conversation.turns() {
        let role = match turn.role() {
            Role::User => ProviderRole::User,
            Role::Assistant => ProviderRole::Assistant,
            // Unknown speakers are downgraded, never dropped.
            _ => ProviderRole::User,
        };
        contents.push(ProviderMessage::new(role, turn.text()));
    }

    if let Some(hint) = profile.style_hints.render() {
        contents.push(ProviderMessage::new(ProviderRole::User, hint));
    }

    ProviderRequest {
        contents,
        generation_config: SamplingParams::from(&profile.config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{GenerationConfig, StyleHints, Turn, DEFAULT_MODEL};

    fn profile() -> ChatProfile {
        ChatProfile::new(GenerationConfig::for_level(
            DEFAULT_MODEL,
            ExplanationLevel::Standard,
        ))
    }

    fn conversation() -> Conversation {
        let mut conv = Conversation::new();
        conv.push_user("what is SWOT?");
        conv.push_assistant("a strategy framework");
        conv.push_user("who coined it?");
        conv
    }

    #[test]
    fn preserves_chronological_order() {
        let request = assemble(&conversation(), &profile());

        let texts: Vec<&str> = request.contents.iter().map(|m| m.text()).collect();
        assert_eq!(
            texts,
            vec!["what is SWOT?", "a strategy framework", "who coined it?"]
        );
    }

    #[test]
    fn system_directive_comes_first() {
        let profile = profile().with_system_directive("be gentle");
        let request = assemble(&conversation(), &profile);

        assert_eq!(request.contents[0].role, ProviderRole::System);
        assert_eq!(request.contents[0].text(), "be gentle");
        assert_eq!(request.message_count(), 4);
    }

    #[test]
    fn style_hints_append_one_trailing_user_message() {
        let profile = profile().with_style_hints(StyleHints {
            bullet_points: true,
            ..StyleHints::default()
        });
        let request = assemble(&conversation(), &profile);

        let last = request.contents.last().expect("trailing hint");
        assert_eq!(last.role, ProviderRole::User);
        assert!(last.text().contains("bullet points"));
        assert_eq!(request.message_count(), 4);
    }

    #[test]
    fn unknown_role_is_downgraded_to_user_not_dropped() {
        let mut conv = conversation();
        conv.push(Turn::new(Role::System, "injected by a bug"));

        let request = assemble(&conv, &profile());

        let last = request.contents.last().expect("mapped turn");
        assert_eq!(last.role, ProviderRole::User);
        assert_eq!(last.text(), "injected by a bug");
        assert_eq!(request.message_count(), conv.len());
    }

    #[test]
    fn full_ordering_is_system_turns_hints() {
        let profile = profile()
            .with_system_directive(tutor_system_directive(ExplanationLevel::Brief))
            .with_style_hints(StyleHints {
                worked_examples: true,
                ..StyleHints::default()
            });
        let request = assemble(&conversation(), &profile);

        let roles: Vec<ProviderRole> = request.contents.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ProviderRole::System,
                ProviderRole::User,
                ProviderRole::Assistant,
                ProviderRole::User,
                ProviderRole::User,
            ]
        );
    }

    #[test]
    fn sampling_params_copy_the_active_config() {
        let request = assemble(&conversation(), &profile());
        assert_eq!(request.generation_config.temperature, 0.5);
        assert_eq!(request.generation_config.max_output_tokens, 512);
        assert_eq!(request.generation_config.top_p, 0.8);
    }

    #[test]
    fn tutor_directive_embeds_level_style() {
        let directive = tutor_system_directive(ExplanationLevel::Detailed);
        assert!(directive.contains(ExplanationLevel::Detailed.style_directive()));
        assert!(directive.contains("management theory"));
    }

    #[test]
    fn empty_conversation_still_assembles() {
        let conv = Conversation::new();
        let request = assemble(&conv, &profile());
        assert_eq!(request.message_count(), 0);
    }
}
