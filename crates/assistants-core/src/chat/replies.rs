//! Canned replies for the simulated chat.

use crate::assistant::Language;
use crate::outcome::OutcomeSource;

/// Reply used when a language has no canned answers.
pub const FALLBACK_REPLY: &str = "...";

/// Returns the canned replies for a language.
pub fn replies_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::Spanish => &[
            "Entendido, ¿en qué más puedo ayudarte?",
            "Esa es una excelente pregunta. Déjame explicarte...",
            "Claro, con gusto te ayudo con eso.",
            "¿Podrías darme más detalles sobre tu consulta?",
        ],
        Language::English => &[
            "Understood, how else can I help you?",
            "That's an excellent question. Let me explain...",
            "Sure, I can help you with that.",
            "Could you provide more details about your request?",
        ],
        Language::Portuguese => &[
            "Entendido. Como posso ajudar?",
            "Essa é uma ótima pergunta. Deixe-me explicar...",
            "Claro, posso ajudá-lo com isso.",
            "Você poderia me fornecer mais detalhes sobre sua solicitação?",
        ],
    }
}

/// Picks one canned reply for `language`.
pub fn pick_reply(language: Language, outcomes: &dyn OutcomeSource) -> &'static str {
    let replies = replies_for(language);
    if replies.is_empty() {
        return FALLBACK_REPLY;
    }
    replies[outcomes.index(replies.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FixedOutcome;

    #[test]
    fn test_pick_reply_follows_language() {
        assert_eq!(
            pick_reply(Language::English, &FixedOutcome(0.0)),
            "Understood, how else can I help you?"
        );
        assert_eq!(
            pick_reply(Language::Portuguese, &FixedOutcome::NEVER),
            "Você poderia me fornecer mais detalhes sobre sua solicitação?"
        );
    }

    #[test]
    fn test_every_language_has_replies() {
        use strum::IntoEnumIterator;
        for language in Language::iter() {
            assert_eq!(replies_for(language).len(), 4);
        }
    }
}
