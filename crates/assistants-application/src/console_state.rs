//! Transient console state.
//!
//! Everything the console keeps only for the current session: the
//! create/edit modal, the assistant awaiting delete confirmation and the
//! training chat history per assistant. Nothing here reaches the repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use assistants_core::assistant::{Assistant, NewAssistant, request::validate_name};
use assistants_core::chat::ChatMessage;
use assistants_core::error::Result;

/// Whether the assistant modal creates a new assistant or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Create,
    Edit,
}

/// The two pages of the assistant modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalStep {
    /// Name, language and tone.
    #[default]
    Details,
    /// Response-length sliders and audio toggle.
    ResponseLength,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub is_open: bool,
    pub mode: ModalMode,
    pub step: ModalStep,
    /// Assistant being edited (`None` while creating).
    pub selected: Option<Assistant>,
}

#[derive(Debug, Default)]
struct Inner {
    modal: ModalState,
    assistant_to_delete: Option<Assistant>,
    chat_history: HashMap<String, Vec<ChatMessage>>,
}

/// Session-scoped UI state shared by the coordinator and the chat simulator.
#[derive(Debug, Default)]
pub struct ConsoleState {
    inner: RwLock<Inner>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    // ============================================================================
    // Modal
    // ============================================================================

    pub fn modal(&self) -> ModalState {
        self.read(|inner| inner.modal.clone())
    }

    /// Opens the modal on its first step.
    pub fn open_modal(&self, mode: ModalMode, assistant: Option<Assistant>) {
        self.write(|inner| {
            inner.modal = ModalState {
                is_open: true,
                mode,
                step: ModalStep::Details,
                selected: assistant,
            };
        });
    }

    /// Closes the modal and forgets the selected assistant.
    pub fn close_modal(&self) {
        self.write(|inner| {
            inner.modal.is_open = false;
            inner.modal.step = ModalStep::Details;
            inner.modal.selected = None;
        });
    }

    pub fn set_modal_step(&self, step: ModalStep) {
        self.write(|inner| inner.modal.step = step);
    }

    /// Moves to the response-length step once the details are valid.
    pub fn advance_modal_step(&self, form: &NewAssistant) -> Result<()> {
        validate_name(&form.name)?;
        self.set_modal_step(ModalStep::ResponseLength);
        Ok(())
    }

    /// Form values for the modal: the selected assistant when editing,
    /// blank defaults when creating.
    pub fn modal_form(&self) -> NewAssistant {
        self.read(|inner| match (&inner.modal.mode, &inner.modal.selected) {
            (ModalMode::Edit, Some(assistant)) => NewAssistant {
                name: assistant.name.clone(),
                language: assistant.language,
                tone: assistant.tone,
                response_length: assistant.response_length,
                audio_enabled: assistant.audio_enabled,
                rules: assistant.rules.clone(),
            },
            _ => NewAssistant::default(),
        })
    }

    // ============================================================================
    // Delete confirmation
    // ============================================================================

    pub fn assistant_to_delete(&self) -> Option<Assistant> {
        self.read(|inner| inner.assistant_to_delete.clone())
    }

    pub fn set_assistant_to_delete(&self, assistant: Option<Assistant>) {
        self.write(|inner| inner.assistant_to_delete = assistant);
    }

    // ============================================================================
    // Chat history
    // ============================================================================

    pub fn chat_history(&self, assistant_id: &str) -> Vec<ChatMessage> {
        self.read(|inner| {
            inner
                .chat_history
                .get(assistant_id)
                .cloned()
                .unwrap_or_default()
        })
    }

    pub fn add_chat_message(&self, assistant_id: &str, message: ChatMessage) {
        self.write(|inner| {
            inner
                .chat_history
                .entry(assistant_id.to_string())
                .or_default()
                .push(message);
        });
    }

    pub fn clear_chat_history(&self, assistant_id: &str) {
        self.write(|inner| {
            inner.chat_history.insert(assistant_id.to_string(), Vec::new());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistants_core::assistant::get_seed_assistants;

    #[test]
    fn test_open_and_close_modal() {
        let state = ConsoleState::new();
        let assistant = get_seed_assistants().remove(0);

        state.open_modal(ModalMode::Edit, Some(assistant.clone()));
        state.set_modal_step(ModalStep::ResponseLength);
        let modal = state.modal();
        assert!(modal.is_open);
        assert_eq!(modal.mode, ModalMode::Edit);
        assert_eq!(modal.selected, Some(assistant));

        state.close_modal();
        let modal = state.modal();
        assert!(!modal.is_open);
        assert_eq!(modal.step, ModalStep::Details);
        assert!(modal.selected.is_none());
    }

    #[test]
    fn test_reopening_starts_on_first_step() {
        let state = ConsoleState::new();
        state.open_modal(ModalMode::Create, None);
        state.set_modal_step(ModalStep::ResponseLength);
        state.open_modal(ModalMode::Create, None);
        assert_eq!(state.modal().step, ModalStep::Details);
    }

    #[test]
    fn test_advance_requires_valid_name() {
        let state = ConsoleState::new();
        state.open_modal(ModalMode::Create, None);

        let mut form = state.modal_form();
        form.name = "AB".to_string();
        assert!(state.advance_modal_step(&form).is_err());
        assert_eq!(state.modal().step, ModalStep::Details);

        form.name = "Abby".to_string();
        state.advance_modal_step(&form).unwrap();
        assert_eq!(state.modal().step, ModalStep::ResponseLength);
    }

    #[test]
    fn test_modal_form_prefills_when_editing() {
        let state = ConsoleState::new();
        let assistant = get_seed_assistants().remove(1);
        state.open_modal(ModalMode::Edit, Some(assistant.clone()));

        let form = state.modal_form();
        assert_eq!(form.name, assistant.name);
        assert_eq!(form.response_length, assistant.response_length);

        state.open_modal(ModalMode::Create, None);
        assert_eq!(state.modal_form(), NewAssistant::default());
    }

    #[test]
    fn test_chat_history_is_per_assistant() {
        let state = ConsoleState::new();
        state.add_chat_message("1", ChatMessage::user("hola"));
        state.add_chat_message("1", ChatMessage::assistant("¿en qué puedo ayudarte?"));
        state.add_chat_message("2", ChatMessage::user("hello"));

        assert_eq!(state.chat_history("1").len(), 2);
        assert_eq!(state.chat_history("2").len(), 1);
        assert!(state.chat_history("3").is_empty());

        state.clear_chat_history("1");
        assert!(state.chat_history("1").is_empty());
        assert_eq!(state.chat_history("2").len(), 1);
    }
}
