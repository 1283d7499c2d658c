use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, Turn};

/// Append-only log of turns for one interactive session.
///
/// Owned by the UI collaborator, which creates it at session start and
/// clears it at session end; services only ever borrow it. Turns are never
/// reordered or deduplicated, and the log is not trimmed mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    id: String,
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Turn::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Turn::assistant(text));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of user turns, i.e. how many prompts were submitted.
    pub fn user_turn_count(&self) -> usize {
        self.turns.iter().filter(|t| t.role() == Role::User).count()
    }

    /// Drop all turns. Session-end only; the id is kept.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_preserve_order() {
        let mut conv = Conversation::new();
        conv.push_user("first");
        conv.push_assistant("second");
        conv.push_user("third");

        let texts: Vec<&str> = conv.turns().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = Conversation::new();
        let b = Conversation::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clear_keeps_id() {
        let mut conv = Conversation::new();
        let id = conv.id().to_string();
        conv.push_user("hi");
        conv.clear();
        assert!(conv.is_empty());
        assert_eq!(conv.id(), id);
    }

    #[test]
    fn user_turn_count_ignores_assistant_turns() {
        let mut conv = Conversation::new();
        conv.push_user("a");
        conv.push_assistant("b");
        conv.push_user("c");
        assert_eq!(conv.user_turn_count(), 2);
        assert_eq!(conv.len(), 3);
    }
}
