use super::aggregate::Blog;
use crate::domain::common::ImageSelection;
use crate::shared::forms::{check_min_len, FieldErrors, FormMode, Validate};

pub const TITLE_MIN: usize = 3;
pub const SHORT_DESCRIPTION_MIN: usize = 10;
pub const CONTENT_MIN: usize = 20;

/// Blog editor page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogForm {
    pub mode: FormMode,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub image: ImageSelection,
}

impl BlogForm {
    pub fn edit(blog: &Blog) -> Self {
        Self {
            mode: FormMode::Edit {
                id: blog.id.clone(),
            },
            title: blog.title.clone(),
            short_description: blog.short_description.clone(),
            content: blog.content.clone(),
            image: if blog.image.is_empty() {
                ImageSelection::Empty
            } else {
                ImageSelection::Existing(blog.image.clone())
            },
        }
    }

    /// Text parts of the multipart body; the image file is appended by the caller.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("shortDescription", self.short_description.clone()),
            ("content", self.content.clone()),
        ]
    }
}

impl Validate for BlogForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_min_len(&mut errors, "title", "Title", &self.title, TITLE_MIN);
        check_min_len(
            &mut errors,
            "shortDescription",
            "Short description",
            &self.short_description,
            SHORT_DESCRIPTION_MIN,
        );
        if !self.image.is_present() {
            errors.insert("image", "Image is required");
        }
        check_min_len(&mut errors, "content", "Content", &self.content, CONTENT_MIN);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BlogForm {
        BlogForm {
            mode: FormMode::Create,
            title: "Hello".into(),
            short_description: "A short intro".into(),
            content: "<p>Twenty characters or more</p>".into(),
            image: ImageSelection::Picked("cover.png".into()),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_valid());
    }

    #[test]
    fn test_title_boundary() {
        let mut form = valid();
        form.title = "ab".into();
        assert!(form.validate().contains("title"));
        form.title = "abc".into();
        assert!(!form.validate().contains("title"));
    }

    #[test]
    fn test_minimum_lengths() {
        let mut form = valid();
        form.short_description = "123456789".into();
        form.content = "x".repeat(19);
        let errors = form.validate();
        assert_eq!(
            errors.get("shortDescription"),
            Some("Short description must be at least 10 characters")
        );
        assert!(errors.contains("content"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_existing_image_counts_when_editing() {
        let blog = Blog {
            id: "b1".into(),
            title: "Old title".into(),
            short_description: "An older description".into(),
            content: "Some content that is long enough".into(),
            image: "/uploads/b1.png".into(),
            created_at: None,
        };
        let form = BlogForm::edit(&blog);
        assert!(form.validate().is_valid());

        let mut removed = form.clone();
        removed.image = ImageSelection::Empty;
        assert_eq!(removed.validate().get("image"), Some("Image is required"));
    }

    #[test]
    fn test_wire_format() {
        let blog: Blog = serde_json::from_str(
            r#"{"_id":"b1","title":"T","shortDescription":"S","content":"C","image":"/u.png","createdAt":"2024-03-15T14:02:26.123Z"}"#,
        )
        .unwrap();
        assert_eq!(blog.short_description, "S");
        assert!(blog.created_at.is_some());
    }
}
