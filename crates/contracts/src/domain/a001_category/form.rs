use serde::Serialize;

use super::aggregate::Category;
use crate::shared::forms::{is_blank, FieldErrors, FormMode, Validate};

/// Add/edit dialog of a category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub mode: FormMode,
    pub name: String,
}

/// JSON body of `POST /category` and `PUT /category/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl CategoryForm {
    pub fn edit(category: &Category) -> Self {
        Self {
            mode: FormMode::Edit {
                id: category.id.clone(),
            },
            name: category.name.clone(),
        }
    }

    pub fn payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.trim().to_string(),
        }
    }
}

impl Validate for CategoryForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name", "Please enter a category name");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            let form = CategoryForm {
                name: name.to_string(),
                ..Default::default()
            };
            assert!(form.validate().contains("name"), "{:?}", name);
        }
    }

    #[test]
    fn test_edit_prefills_and_trims_payload() {
        let mut form = CategoryForm::edit(&Category {
            id: "c1".into(),
            name: "Books".into(),
        });
        assert_eq!(form.mode.edit_id(), Some("c1"));
        form.name = "  Comics ".into();
        assert!(form.validate().is_valid());
        assert_eq!(form.payload().name, "Comics");
    }
}
