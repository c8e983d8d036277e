//! Field-level validation used by every create/edit form.

use serde::Serialize;
use std::collections::BTreeMap;

/// Validation messages keyed by field name.
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message reported for a field.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// A form that can check itself before anything is sent.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

/// Whether a form creates a new item or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn edit_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required text with a minimum length (in characters, untrimmed).
pub fn check_min_len(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
) {
    if is_blank(value) {
        errors.insert(field, format!("{} is required", label));
    } else if value.chars().count() < min {
        errors.insert(
            field,
            format!("{} must be at least {} characters", label, min),
        );
    }
}

/// Parses like the browser's `Number()` for plain decimal input.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `local@domain.tld`, the shape the sign-in and recovery forms accept.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_min_len() {
        let mut errors = FieldErrors::new();
        check_min_len(&mut errors, "title", "Title", "   ", 3);
        assert_eq!(errors.get("title"), Some("Title is required"));

        let mut errors = FieldErrors::new();
        check_min_len(&mut errors, "title", "Title", "ab", 3);
        assert_eq!(errors.get("title"), Some("Title must be at least 3 characters"));

        let mut errors = FieldErrors::new();
        check_min_len(&mut errors, "title", "Title", "абв", 3);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" 7 "), Some(7.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("info@gmail.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("info@gmail"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("info gmail.com"));
        assert!(!is_valid_email("info@gmail.c"));
    }
}
