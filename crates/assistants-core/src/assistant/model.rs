//! Assistant domain model.
//!
//! An assistant is a configurable AI profile: display name, language, tone,
//! the preferred mix of response lengths, audio output and free-form rules
//! used as its training prompt.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::allocation::{self, LengthField};

/// Language an assistant answers in.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Language {
    #[default]
    Spanish,
    English,
    Portuguese,
}

/// Conversational tone of an assistant.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Tone {
    Formal,
    Casual,
    #[default]
    Professional,
    Friendly,
}

/// Share (in percent) of short, medium and long answers.
///
/// A persisted assistant always carries a balanced value, i.e. one whose
/// three parts sum to exactly 100.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLength {
    pub short: u8,
    pub medium: u8,
    pub long: u8,
}

impl ResponseLength {
    /// The value every percentage set has to add up to.
    pub const TOTAL: u32 = 100;

    pub const fn new(short: u8, medium: u8, long: u8) -> Self {
        Self {
            short,
            medium,
            long,
        }
    }

    pub fn total(&self) -> u32 {
        self.short as u32 + self.medium as u32 + self.long as u32
    }

    pub fn is_balanced(&self) -> bool {
        self.total() == Self::TOTAL
    }

    pub fn get(&self, field: LengthField) -> u8 {
        match field {
            LengthField::Short => self.short,
            LengthField::Medium => self.medium,
            LengthField::Long => self.long,
        }
    }

    /// Moves one slider to `value` and redistributes the others.
    ///
    /// See [`allocation::allocate`] for the redistribution rules.
    pub fn rebalance(&self, field: LengthField, value: u8) -> Self {
        allocation::allocate(*self, field, value)
    }
}

impl Default for ResponseLength {
    fn default() -> Self {
        Self::new(33, 34, 33)
    }
}

/// An AI assistant profile managed by the console.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    /// Opaque identifier assigned by the repository
    pub id: String,
    /// Display name (at least three characters)
    pub name: String,
    pub language: Language,
    pub tone: Tone,
    /// Preferred distribution of answer lengths
    pub response_length: ResponseLength,
    /// Whether spoken replies are enabled
    #[serde(default)]
    pub audio_enabled: bool,
    /// Training rules, edited from the training page
    #[serde(default)]
    pub rules: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response_length_is_balanced() {
        let length = ResponseLength::default();
        assert_eq!(length, ResponseLength::new(33, 34, 33));
        assert!(length.is_balanced());
    }

    #[test]
    fn test_unbalanced_response_length() {
        assert!(!ResponseLength::new(50, 30, 30).is_balanced());
        assert_eq!(ResponseLength::new(50, 30, 30).total(), 110);
    }

    #[test]
    fn test_assistant_serializes_camel_case() {
        let assistant = Assistant {
            id: "1".to_string(),
            name: "Sales".to_string(),
            language: Language::English,
            tone: Tone::Casual,
            response_length: ResponseLength::new(20, 30, 50),
            audio_enabled: true,
            rules: String::new(),
        };

        let json = serde_json::to_value(&assistant).unwrap();
        assert_eq!(json["responseLength"]["long"], 50);
        assert_eq!(json["audioEnabled"], true);
        assert_eq!(json["language"], "English");
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(Language::default(), Language::Spanish);
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_language_from_str() {
        use std::str::FromStr;
        assert_eq!(Language::from_str("Portuguese").unwrap(), Language::Portuguese);
        assert!(Tone::from_str("Grumpy").is_err());
    }
}
