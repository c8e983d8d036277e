pub mod ui;

use contracts::domain::a002_language::aggregate::Language;
use contracts::domain::a002_language::form::LanguageForm;
use contracts::shared::forms::FormMode;

use super::common::NamedResource;
use crate::shared::crud::{ApiError, MutationForm, RequestBody};

impl MutationForm for LanguageForm {
    fn edit_id(&self) -> Option<&str> {
        self.mode.edit_id()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self.payload())
    }
}

impl NamedResource for Language {
    type Form = LanguageForm;

    const PAGE_ID: &'static str = "a002_language--list";
    const TITLE: &'static str = "Languages";
    const EMPTY_TEXT: &'static str = "No languages found";
    const SECONDARY_COLUMN: Option<&'static str> = Some("Code");

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary(&self) -> String {
        self.code.clone().unwrap_or_else(|| "-".to_string())
    }

    fn form(mode: FormMode, name: String) -> LanguageForm {
        LanguageForm { mode, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::forms::Validate;

    #[test]
    fn test_language_form() {
        let form = Language::form(FormMode::Create, "".into());
        assert_eq!(form.validate().get("name"), Some("Language name is required"));

        let form = Language::form(FormMode::Create, "French".into());
        assert!(form.validate().is_valid());
        assert!(matches!(form.body().unwrap(), RequestBody::Json(_)));
    }
}
