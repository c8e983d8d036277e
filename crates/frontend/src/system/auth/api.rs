use contracts::shared::api::ErrorBody;
use contracts::system::auth::{ForgotPasswordRequest, LoginRequest, LoginResponse};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::shared::crud::client::decode_ack;
use crate::shared::crud::ApiError;

async fn post<B: Serialize>(path: &str, body: &B) -> Result<(u16, String), ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
    Ok((status, text))
}

/// Sign in with email and password, returning the bearer token
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    let (status, body) = post("/auth/login", request).await?;
    decode_login(status, &body)
}

/// Ask the server to e-mail a recovery code
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<Option<String>, ApiError> {
    let (status, body) = post("/auth/send-email", request).await?;
    decode_ack(status, &body)
}

fn decode_login(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: ErrorBody::message_from(body),
        });
    }
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match response.token.filter(|t| !t.is_empty()) {
        Some(token) if response.success => Ok(token),
        _ => Err(ApiError::Rejected {
            message: response.message.filter(|m| !m.trim().is_empty()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_login() {
        let token = decode_login(200, r#"{"success":true,"token":"jwt.abc","message":"Welcome"}"#);
        assert_eq!(token.unwrap(), "jwt.abc");
    }

    #[test]
    fn test_decode_login_failures() {
        let err = decode_login(200, r#"{"success":false,"message":"Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");

        let err = decode_login(200, r#"{"success":true}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: None });

        let err = decode_login(401, r#"{"message":"Wrong password"}"#).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Wrong password"));
    }
}
