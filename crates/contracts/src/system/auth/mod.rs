use serde::{Deserialize, Serialize};

use crate::shared::forms::{is_blank, is_valid_email, FieldErrors, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
}

/// `POST /auth/send-email`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if is_blank(email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email address");
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors
    }
}

impl Validate for ForgotPasswordRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let errors = LoginRequest::default().validate();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let req = LoginRequest {
            email: "admin@shop".into(),
            password: "secret".into(),
        };
        assert_eq!(req.validate().get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_forgot_password_validation() {
        let req = ForgotPasswordRequest {
            email: "info@gmail.com".into(),
        };
        assert!(req.validate().is_valid());
    }
}
