pub mod ui;

use contracts::domain::a004_product::form::ProductForm;
use contracts::shared::forms::{FieldErrors, Validate};

use crate::shared::crud::{ApiError, MultipartBody, MutationForm, RequestBody};

/// Product form plus the image file picked for it, if any.
pub struct ProductDraft {
    pub form: ProductForm,
    pub file: Option<web_sys::File>,
}

impl Validate for ProductDraft {
    fn validate(&self) -> FieldErrors {
        self.form.validate()
    }
}

impl MutationForm for ProductDraft {
    fn edit_id(&self) -> Option<&str> {
        self.form.mode.edit_id()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        Ok(RequestBody::Multipart(MultipartBody {
            fields: self.form.multipart_fields(),
            file: self.file.clone().map(|file| ("image", file)),
        }))
    }
}

/// `$12.50`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ImageSelection;
    use contracts::shared::forms::FormMode;

    #[test]
    fn test_draft_without_new_file() {
        let draft = ProductDraft {
            form: ProductForm {
                mode: FormMode::Edit { id: "p1".into() },
                name: "Gita".into(),
                price: "250".into(),
                discounted_price: "199".into(),
                category_id: "c1".into(),
                language_id: "l1".into(),
                image: ImageSelection::Existing("/uploads/gita.jpg".into()),
                ..Default::default()
            },
            file: None,
        };
        assert!(draft.validate().is_valid());
        assert_eq!(draft.edit_id(), Some("p1"));
        match draft.body().unwrap() {
            RequestBody::Multipart(parts) => {
                assert!(parts.file.is_none());
                assert!(parts.fields.contains(&("price", "250".to_string())));
            }
            other => panic!("expected multipart, got {:?}", other),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
