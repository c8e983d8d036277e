use super::aggregate::Product;
use crate::domain::common::ImageSelection;
use crate::shared::forms::{is_blank, parse_number, FieldErrors, FormMode, Validate};

/// Add/edit dialog of a product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub name: String,
    /// Kept as typed so that the user sees exactly what they entered
    pub price: String,
    pub discounted_price: String,
    pub category_id: String,
    pub language_id: String,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub image: ImageSelection,
}

impl ProductForm {
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit {
                id: product.id.clone(),
            },
            name: product.name.clone(),
            price: product.price.to_string(),
            discounted_price: product.discounted_price.to_string(),
            category_id: product.category_id.clone(),
            language_id: product.language_id.clone(),
            is_featured: product.is_featured,
            is_best_seller: product.is_best_seller,
            image: if product.image.is_empty() {
                ImageSelection::Empty
            } else {
                ImageSelection::Existing(product.image.clone())
            },
        }
    }

    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("price", self.price.trim().to_string()),
            ("discountedPrice", self.discounted_price.trim().to_string()),
            ("categoryId", self.category_id.clone()),
            ("languageId", self.language_id.clone()),
            ("isBestSeller", self.is_best_seller.to_string()),
            ("isFeatured", self.is_featured.to_string()),
        ]
    }
}

fn check_number(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) {
    if value.is_empty() {
        errors.insert(field, format!("{} is required.", label));
    } else if parse_number(value).is_none() {
        errors.insert(field, format!("{} must be a number.", label));
    }
}

impl Validate for ProductForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name", "Product name is required.");
        }
        check_number(&mut errors, "price", "Price", &self.price);
        check_number(
            &mut errors,
            "discountedPrice",
            "Discounted price",
            &self.discounted_price,
        );
        if self.category_id.is_empty() {
            errors.insert("categoryId", "Please select a category.");
        }
        if self.language_id.is_empty() {
            errors.insert("languageId", "Please select a language.");
        }
        if !self.mode.is_edit() && !self.image.is_present() {
            errors.insert("image", "Please upload a product image.");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            mode: FormMode::Create,
            name: "Gita".into(),
            price: "250".into(),
            discounted_price: "199.5".into(),
            category_id: "c1".into(),
            language_id: "l1".into(),
            is_featured: true,
            is_best_seller: false,
            image: ImageSelection::Picked("gita.jpg".into()),
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_valid());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ProductForm::default().validate();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec!["categoryId", "discountedPrice", "image", "languageId", "name", "price"]
        );
    }

    #[test]
    fn test_prices_must_be_numeric() {
        let mut form = filled();
        form.price = "12a".into();
        form.discounted_price = "".into();
        let errors = form.validate();
        assert_eq!(errors.get("price"), Some("Price must be a number."));
        assert_eq!(
            errors.get("discountedPrice"),
            Some("Discounted price is required.")
        );
    }

    #[test]
    fn test_image_optional_when_editing() {
        let mut form = filled();
        form.image = ImageSelection::Empty;
        assert!(form.validate().contains("image"));
        form.mode = FormMode::Edit { id: "p1".into() };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_multipart_flags() {
        let fields = filled().multipart_fields();
        assert!(fields.contains(&("isFeatured", "true".to_string())));
        assert!(fields.contains(&("isBestSeller", "false".to_string())));
        assert!(fields.contains(&("categoryId", "c1".to_string())));
    }
}
