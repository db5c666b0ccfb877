//! Simulated training chat.
//!
//! Lets the user try an assistant from the training page: every message gets
//! a canned reply in the assistant's language after a short "typing" delay.
//! The conversation lives in [`ConsoleState`] only.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use assistants_core::assistant::Assistant;
use assistants_core::chat::{ChatMessage, pick_reply};
use assistants_core::config::ChatConfig;
use assistants_core::error::{AssistantError, Result};
use assistants_core::outcome::OutcomeSource;

use crate::console_state::ConsoleState;

pub struct ChatSimulator {
    state: Arc<ConsoleState>,
    config: ChatConfig,
    outcomes: Arc<dyn OutcomeSource>,
    typing: Mutex<HashSet<String>>,
}

/// Clears the typing flag of an assistant when the reply is done or dropped.
struct TypingGuard<'a> {
    typing: &'a Mutex<HashSet<String>>,
    assistant_id: String,
}

impl Drop for TypingGuard<'_> {
    fn drop(&mut self) {
        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.assistant_id);
    }
}

impl ChatSimulator {
    pub fn new(
        state: Arc<ConsoleState>,
        config: ChatConfig,
        outcomes: Arc<dyn OutcomeSource>,
    ) -> Self {
        Self {
            state,
            config,
            outcomes,
            typing: Mutex::new(HashSet::new()),
        }
    }

    /// Whether a reply for this assistant is still being "typed".
    pub fn is_typing(&self, assistant_id: &str) -> bool {
        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(assistant_id)
    }

    pub fn history(&self, assistant_id: &str) -> Vec<ChatMessage> {
        self.state.chat_history(assistant_id)
    }

    /// Starts a new conversation with the assistant.
    pub fn reset(&self, assistant_id: &str) {
        self.state.clear_chat_history(assistant_id);
    }

    fn begin_typing(&self, assistant_id: &str) -> Option<TypingGuard<'_>> {
        let mut typing = self.typing.lock().unwrap_or_else(PoisonError::into_inner);
        if !typing.insert(assistant_id.to_string()) {
            return None;
        }
        Some(TypingGuard {
            typing: &self.typing,
            assistant_id: assistant_id.to_string(),
        })
    }

    /// Sends a user message and waits for the simulated reply.
    ///
    /// # Returns
    ///
    /// - `Ok(ChatMessage)`: The assistant's reply
    /// - `Err(AssistantError::Validation)`: Empty input, or a reply to this
    ///   assistant is still pending
    pub async fn send(&self, assistant: &Assistant, input: &str) -> Result<ChatMessage> {
        let content = input.trim();
        if content.is_empty() {
            return Err(AssistantError::validation("Message cannot be empty"));
        }

        let _typing = self.begin_typing(&assistant.id).ok_or_else(|| {
            AssistantError::validation(format!("{} is still replying", assistant.name))
        })?;

        self.state
            .add_chat_message(&assistant.id, ChatMessage::user(content));

        let delay = self
            .outcomes
            .within(self.config.min_reply_delay_ms, self.config.max_reply_delay_ms);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let reply = ChatMessage::assistant(pick_reply(assistant.language, self.outcomes.as_ref()));
        self.state.add_chat_message(&assistant.id, reply.clone());
        tracing::debug!(assistant_id = %assistant.id, "[ChatSimulator] reply sent");

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistants_core::assistant::get_seed_assistants;
    use assistants_core::chat::{ChatRole, replies_for};
    use assistants_core::outcome::FixedOutcome;

    fn simulator(config: ChatConfig) -> ChatSimulator {
        ChatSimulator::new(
            Arc::new(ConsoleState::new()),
            config,
            Arc::new(FixedOutcome(0.0)),
        )
    }

    #[tokio::test]
    async fn test_send_records_both_messages() {
        let chat = simulator(ChatConfig::instant());
        let assistant = get_seed_assistants().remove(1);

        let reply = chat.send(&assistant, "  My printer is on fire  ").await.unwrap();

        let history = chat.history(&assistant.id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[0].content, "My printer is on fire");
        assert_eq!(history[1], reply);
        assert_eq!(reply.role, ChatRole::Assistant);
        assert!(replies_for(assistant.language).contains(&reply.content.as_str()));
        assert!(!chat.is_typing(&assistant.id));
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let chat = simulator(ChatConfig::instant());
        let assistant = get_seed_assistants().remove(0);

        let err = chat.send(&assistant, "   ").await.unwrap_err();
        assert!(err.is_validation());
        assert!(chat.history(&assistant.id).is_empty());
    }

    #[tokio::test]
    async fn test_second_message_while_typing_is_rejected() {
        let config = ChatConfig {
            min_reply_delay_ms: 50,
            max_reply_delay_ms: 50,
        };
        let chat = simulator(config);
        let assistant = get_seed_assistants().remove(0);

        let (first, second) = tokio::join!(chat.send(&assistant, "uno"), async {
            tokio::task::yield_now().await;
            chat.send(&assistant, "dos").await
        });

        assert!(first.is_ok());
        assert!(second.unwrap_err().is_validation());
        assert_eq!(chat.history(&assistant.id).len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_history() {
        let chat = simulator(ChatConfig::instant());
        let assistant = get_seed_assistants().remove(2);
        chat.send(&assistant, "Olá").await.unwrap();

        chat.reset(&assistant.id);
        assert!(chat.history(&assistant.id).is_empty());
    }
}
