//! HTTP boundary of every resource list.
//!
//! Request construction lives in [`HttpResourceClient`]; turning a status code
//! and a body into data lives in the `decode_*` functions so that it can be
//! exercised without a browser.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::domain::common::Resource;
use contracts::shared::api::{Ack, Envelope, EnvelopeError, ErrorBody, ListEnvelope, Saved};
use contracts::shared::pagination::{PageRequest, PageResult};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_base;

/// Shown when the server did not explain a failure.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response with `success: false`
    #[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
    Rejected { message: Option<String> },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("not signed in")]
    Unauthenticated,

    #[error("{0} cannot be changed from the dashboard")]
    Unsupported(&'static str),
}

impl ApiError {
    /// Message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// What a notification should say: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Status { status: 401, .. }
        )
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Rejected { message } => ApiError::Rejected { message },
            missing @ EnvelopeError::MissingData => ApiError::Decode(missing.to_string()),
        }
    }
}

/// Bearer token handed to a client when it is built.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(Option<String>);

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn header_value(&self) -> Option<String> {
        self.0.as_ref().map(|token| format!("Bearer {}", token))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Credential(Bearer ***)"),
            None => f.write_str("Credential(anonymous)"),
        }
    }
}

/// Body of a create or update call.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

impl RequestBody {
    pub fn json<P: serde::Serialize>(payload: &P) -> Result<Self, ApiError> {
        serde_json::to_value(payload)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Decode(format!("cannot encode request: {}", e)))
    }
}

/// Text parts plus an optional file part.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    pub fields: Vec<(&'static str, String)>,
    pub file: Option<(&'static str, web_sys::File)>,
}

impl MultipartBody {
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value).map_err(js_error)?;
        }
        if let Some((name, file)) = &self.file {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(js_error)?;
        }
        Ok(form)
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", value))
}

/// CRUD calls for one resource. Lists and pages depend on this trait only,
/// so tests substitute an in-memory implementation.
#[async_trait(?Send)]
pub trait ResourceClient<T> {
    async fn list(&self, request: PageRequest) -> Result<PageResult<T>, ApiError>;
    async fn get(&self, id: &str) -> Result<T, ApiError>;
    async fn create(&self, body: RequestBody) -> Result<Saved<T>, ApiError>;
    async fn update(&self, id: &str, body: RequestBody) -> Result<Saved<T>, ApiError>;
    /// Returns the server's confirmation message, if it sent one.
    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError>;
}

/// [`ResourceClient`] over the dashboard's REST API.
pub struct HttpResourceClient<R: Resource> {
    base_url: String,
    credential: Credential,
    _resource: PhantomData<R>,
}

impl<R: Resource> HttpResourceClient<R> {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            base_url: base_url.into(),
            credential,
            _resource: PhantomData,
        }
    }

    /// Client against the configured API host.
    pub fn from_config(credential: Credential) -> Self {
        Self::new(api_base(), credential)
    }

    fn list_url(&self, request: PageRequest) -> String {
        format!(
            "{}{}?{}",
            self.base_url,
            R::ENDPOINTS.list,
            request.query_string()
        )
    }

    fn item_url(&self, id: &str) -> Result<String, ApiError> {
        let item = R::ENDPOINTS.item.ok_or(ApiError::Unsupported(R::SINGULAR))?;
        Ok(format!(
            "{}{}/{}",
            self.base_url,
            item,
            urlencoding::encode(id)
        ))
    }

    fn create_url(&self) -> Result<String, ApiError> {
        let create = R::ENDPOINTS
            .create
            .ok_or(ApiError::Unsupported(R::SINGULAR))?;
        Ok(format!("{}{}", self.base_url, create))
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        body: Option<RequestBody>,
    ) -> Result<(u16, String), ApiError> {
        let header = self
            .credential
            .header_value()
            .ok_or(ApiError::Unauthenticated)?;
        let builder = builder.header("Authorization", &header);
        let request = match body {
            None => builder.build(),
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(parts)) => builder.body(parts.to_form_data()?),
        }
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
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
}

#[async_trait(?Send)]
impl<R: Resource> ResourceClient<R::Item> for HttpResourceClient<R> {
    async fn list(&self, request: PageRequest) -> Result<PageResult<R::Item>, ApiError> {
        let url = self.list_url(request);
        log::debug!("GET {}", url);
        let (status, body) = self.send(Request::get(&url), None).await?;
        decode_list(status, &body, request)
    }

    async fn get(&self, id: &str) -> Result<R::Item, ApiError> {
        let url = self.item_url(id)?;
        let (status, body) = self.send(Request::get(&url), None).await?;
        decode_item(status, &body)
    }

    async fn create(&self, body: RequestBody) -> Result<Saved<R::Item>, ApiError> {
        let url = self.create_url()?;
        log::debug!("POST {}", url);
        let (status, text) = self.send(Request::post(&url), Some(body)).await?;
        decode_saved(status, &text)
    }

    async fn update(&self, id: &str, body: RequestBody) -> Result<Saved<R::Item>, ApiError> {
        let url = self.item_url(id)?;
        log::debug!("PUT {}", url);
        let (status, text) = self.send(Request::put(&url), Some(body)).await?;
        decode_saved(status, &text)
    }

    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        let url = self.item_url(id)?;
        log::debug!("DELETE {}", url);
        let (status, text) = self.send(Request::delete(&url), None).await?;
        decode_ack(status, &text)
    }
}

fn parse_body<B: DeserializeOwned>(status: u16, body: &str) -> Result<B, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: ErrorBody::message_from(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn decode_list<T: DeserializeOwned>(
    status: u16,
    body: &str,
    request: PageRequest,
) -> Result<PageResult<T>, ApiError> {
    let envelope: ListEnvelope<T> = parse_body(status, body)?;
    Ok(envelope.into_page(request)?)
}

pub fn decode_item<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = parse_body(status, body)?;
    Ok(envelope.into_data()?)
}

/// Create/update response. Tolerates a `data` that does not match the item
/// shape, since some endpoints return the raw document.
pub fn decode_saved<T: DeserializeOwned>(status: u16, body: &str) -> Result<Saved<T>, ApiError> {
    let envelope: Envelope<serde_json::Value> = parse_body(status, body)?;
    let saved = envelope.into_saved()?;
    Ok(Saved {
        item: saved.item.and_then(|v| serde_json::from_value(v).ok()),
        message: saved.message,
    })
}

pub fn decode_ack(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    let ack: Ack = parse_body(status, body)?;
    Ok(ack.into_message()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;

    fn request(page: usize, limit: usize) -> PageRequest {
        PageRequest::new(page, limit).unwrap()
    }

    #[test]
    fn test_decode_list() {
        let body = r#"{"success":true,"data":[{"_id":"c1","name":"Books"},{"_id":"c2","name":"Music"}],
            "pagination":{"page":2,"pages":7,"total":13}}"#;
        let page: PageResult<Category> = decode_list(200, body, request(2, 2)).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "Music");
        assert_eq!(page.total_items, 13);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_decode_list_rejected() {
        let body = r#"{"success":false,"message":"Token expired"}"#;
        let err = decode_list::<Category>(200, body, request(1, 10)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("Token expired".into())
            }
        );
        assert_eq!(err.user_message(FALLBACK_MESSAGE), "Token expired");
    }

    #[test]
    fn test_status_error_keeps_server_message() {
        let err = decode_ack(404, r#"{"success":false,"message":"Category not found"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: Some("Category not found".into())
            }
        );

        let err = decode_ack(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message(FALLBACK_MESSAGE), "Something went wrong");
    }

    #[test]
    fn test_decode_ack() {
        assert_eq!(
            decode_ack(200, r#"{"success":true,"message":"Category deleted"}"#).unwrap(),
            Some("Category deleted".to_string())
        );
        assert_eq!(decode_ack(200, r#"{"success":true}"#).unwrap(), None);
        let err = decode_ack(200, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: None });
        assert_eq!(err.user_message("Failed to delete"), "Failed to delete");
    }

    #[test]
    fn test_decode_saved_tolerates_foreign_data() {
        let saved: Saved<Category> = decode_saved(
            201,
            r#"{"success":true,"message":"Category added","data":{"_id":"c9","name":"Art"}}"#,
        )
        .unwrap();
        assert_eq!(saved.item.map(|c| c.id), Some("c9".to_string()));
        assert_eq!(saved.message.as_deref(), Some("Category added"));

        let saved: Saved<Category> =
            decode_saved(200, r#"{"success":true,"data":{"acknowledged":true}}"#).unwrap();
        assert!(saved.item.is_none());
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_item::<Category>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = decode_item::<Category>(200, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_credential_debug_hides_token() {
        let credential = Credential::bearer("secret-token");
        assert!(!format!("{:?}", credential).contains("secret"));
        assert_eq!(
            credential.header_value().as_deref(),
            Some("Bearer secret-token")
        );
        assert!(!Credential::anonymous().is_present());
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Unauthenticated.is_unauthorized());
        assert!(ApiError::Status {
            status: 401,
            message: None
        }
        .is_unauthorized());
        assert!(!ApiError::Transport("offline".into()).is_unauthorized());
    }
}
