use serde::Serialize;

use super::aggregate::Language;
use crate::shared::forms::{is_blank, FieldErrors, FormMode, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageForm {
    pub mode: FormMode,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguagePayload {
    pub name: String,
}

impl LanguageForm {
    pub fn edit(language: &Language) -> Self {
        Self {
            mode: FormMode::Edit {
                id: language.id.clone(),
            },
            name: language.name.clone(),
        }
    }

    pub fn payload(&self) -> LanguagePayload {
        LanguagePayload {
            name: self.name.trim().to_string(),
        }
    }
}

impl Validate for LanguageForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name", "Language name is required");
        }
        errors
    }
}
