//! Seed assistants.
//!
//! The mock assistant service starts with these three profiles so the
//! console has something to list before the first creation.

use super::model::{Assistant, Language, ResponseLength, Tone};

/// Returns the assistants the in-memory service is seeded with.
///
/// - **"1"**: sales assistant answering in Spanish
/// - **"2"**: technical support in English
/// - **"3"**: financial advisor in Portuguese
pub fn get_seed_assistants() -> Vec<Assistant> {
    vec![
        Assistant {
            id: "1".to_string(),
            name: "Asistente de Ventas".to_string(),
            language: Language::Spanish,
            tone: Tone::Professional,
            response_length: ResponseLength::new(30, 50, 20),
            audio_enabled: true,
            rules: "Eres un asistente especializado en ventas. Siempre sé cordial y enfócate en identificar necesidades del cliente antes de ofrecer productos.".to_string(),
        },
        Assistant {
            id: "2".to_string(),
            name: "Technical Support".to_string(),
            language: Language::English,
            tone: Tone::Friendly,
            response_length: ResponseLength::new(20, 30, 50),
            audio_enabled: false,
            rules: "You help resolve technical problems clearly and step by step. Always confirm that the user understands before continuing.".to_string(),
        },
        Assistant {
            id: "3".to_string(),
            name: "Assistente Financeiro".to_string(),
            language: Language::Portuguese,
            tone: Tone::Casual,
            response_length: ResponseLength::new(20, 30, 50),
            audio_enabled: false,
            rules: "Aconselhar os clientes sobre suas necessidades financeiras. Manter um tom profissional, porém acessível, e garantir que os clientes tenham todas as informações necessárias para tomar decisões bem fundamentadas.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_assistants_are_valid() {
        let seeds = get_seed_assistants();
        assert_eq!(seeds.len(), 3);
        for assistant in &seeds {
            assert!(assistant.response_length.is_balanced());
            assert!(assistant.name.len() >= 3);
        }
    }
}
