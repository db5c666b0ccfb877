//! Assistant creation and update request models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Assistant, Language, ResponseLength, Tone};
use crate::error::{AssistantError, Result};

/// Minimum number of characters in an assistant name.
pub const MIN_NAME_LEN: usize = 3;

/// Validates an assistant display name.
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::validation("Name is required"));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(AssistantError::validation(format!(
            "Name must be at least {} characters long",
            MIN_NAME_LEN
        )));
    }
    Ok(())
}

/// Validates that the response length percentages add up to 100.
pub fn validate_response_length(length: &ResponseLength) -> Result<()> {
    if !length.is_balanced() {
        return Err(AssistantError::validation(format!(
            "Response length percentages must sum to exactly {} (got {})",
            ResponseLength::TOTAL,
            length.total()
        )));
    }
    Ok(())
}

/// Request to create a new assistant.
///
/// Carries every field except the id, which the repository assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssistant {
    pub name: String,
    pub language: Language,
    pub tone: Tone,
    pub response_length: ResponseLength,
    #[serde(default)]
    pub audio_enabled: bool,
    #[serde(default)]
    pub rules: String,
}

impl Default for NewAssistant {
    /// Values the creation form starts from.
    fn default() -> Self {
        Self {
            name: String::new(),
            language: Language::default(),
            tone: Tone::default(),
            response_length: ResponseLength::default(),
            audio_enabled: false,
            rules: String::new(),
        }
    }
}

impl NewAssistant {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_response_length(&self.response_length)?;
        Ok(())
    }

    /// Converts the request into an assistant with a freshly generated id.
    pub fn into_assistant(self) -> Assistant {
        self.into_assistant_with_id(Uuid::new_v4().to_string())
    }

    pub fn into_assistant_with_id(self, id: String) -> Assistant {
        Assistant {
            id,
            name: self.name.trim().to_string(),
            language: self.language,
            tone: self.tone,
            response_length: self.response_length,
            audio_enabled: self.audio_enabled,
            rules: self.rules,
        }
    }
}

/// Partial update of an assistant; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_length: Option<ResponseLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
}

impl AssistantPatch {
    /// Patch carrying only a new name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Patch mirroring the editable fields of the assistant form.
    ///
    /// Rules are edited from the training page and are not part of it.
    pub fn from_form(form: &NewAssistant) -> Self {
        Self {
            name: Some(form.name.clone()),
            language: Some(form.language),
            tone: Some(form.tone),
            response_length: Some(form.response_length),
            audio_enabled: Some(form.audio_enabled),
            rules: None,
        }
    }

    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(length) = &self.response_length {
            validate_response_length(length)?;
        }
        Ok(())
    }

    /// Merges the present fields into `assistant`.
    pub fn apply_to(&self, assistant: &mut Assistant) {
        if let Some(name) = &self.name {
            assistant.name = name.trim().to_string();
        }
        if let Some(language) = self.language {
            assistant.language = language;
        }
        if let Some(tone) = self.tone {
            assistant.tone = tone;
        }
        if let Some(length) = self.response_length {
            assistant.response_length = length;
        }
        if let Some(audio_enabled) = self.audio_enabled {
            assistant.audio_enabled = audio_enabled;
        }
        if let Some(rules) = &self.rules {
            assistant.rules = rules.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewAssistant {
        NewAssistant {
            name: "Sales Assistant".to_string(),
            language: Language::English,
            tone: Tone::Friendly,
            response_length: ResponseLength::new(30, 50, 20),
            audio_enabled: true,
            rules: String::new(),
        }
    }

    #[test]
    fn test_validate_success() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_short_name() {
        let req = NewAssistant {
            name: "  ab ".to_string(),
            ..sample()
        };
        let err = req.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_empty_name() {
        let req = NewAssistant {
            name: "   ".to_string(),
            ..sample()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_unbalanced_percentages() {
        let req = NewAssistant {
            response_length: ResponseLength::new(30, 30, 30),
            ..sample()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("got 90"));
    }

    #[test]
    fn test_into_assistant_generates_uuid() {
        let assistant = sample().into_assistant();
        assert!(Uuid::parse_str(&assistant.id).is_ok());
        assert_eq!(assistant.name, "Sales Assistant");
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut assistant = sample().into_assistant_with_id("7".to_string());
        let patch = AssistantPatch {
            tone: Some(Tone::Formal),
            audio_enabled: Some(false),
            ..AssistantPatch::default()
        };

        patch.apply_to(&mut assistant);

        assert_eq!(assistant.tone, Tone::Formal);
        assert!(!assistant.audio_enabled);
        assert_eq!(assistant.name, "Sales Assistant");
        assert_eq!(assistant.language, Language::English);
    }

    #[test]
    fn test_patch_validation_skips_absent_fields() {
        assert!(AssistantPatch::default().validate().is_ok());
        assert!(AssistantPatch::name("X").validate().is_err());
    }

    #[test]
    fn test_patch_from_form_leaves_rules_alone() {
        let patch = AssistantPatch::from_form(&sample());
        assert!(patch.rules.is_none());
        assert_eq!(patch.response_length, Some(ResponseLength::new(30, 50, 20)));
    }
}
