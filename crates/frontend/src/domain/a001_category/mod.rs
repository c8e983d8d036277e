pub mod ui;

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::form::CategoryForm;
use contracts::shared::forms::FormMode;

use super::common::NamedResource;
use crate::shared::crud::{ApiError, MutationForm, RequestBody};

impl MutationForm for CategoryForm {
    fn edit_id(&self) -> Option<&str> {
        self.mode.edit_id()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self.payload())
    }
}

impl NamedResource for Category {
    type Form = CategoryForm;

    const PAGE_ID: &'static str = "a001_category--list";
    const TITLE: &'static str = "Categories";
    const EMPTY_TEXT: &'static str = "No categories found";

    fn name(&self) -> &str {
        &self.name
    }

    fn form(mode: FormMode, name: String) -> CategoryForm {
        CategoryForm { mode, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::forms::Validate;

    #[test]
    fn test_category_body_is_trimmed_json() {
        let form = Category::form(FormMode::Create, "  Books ".into());
        match form.body().unwrap() {
            RequestBody::Json(value) => assert_eq!(value, serde_json::json!({ "name": "Books" })),
            other => panic!("expected JSON, got {:?}", other),
        }
        assert_eq!(form.edit_id(), None);
    }

    #[test]
    fn test_blank_category_is_invalid() {
        let form = Category::form(FormMode::Edit { id: "c1".into() }, "   ".into());
        assert_eq!(form.edit_id(), Some("c1"));
        assert_eq!(
            form.validate().get("name"),
            Some("Please enter a category name")
        );
    }
}
