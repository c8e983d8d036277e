//! Response envelopes of the backend API.
//!
//! Every response carries `success`; a body with `success: false` is an error
//! even when the HTTP status is 2xx.

use serde::Deserialize;
use thiserror::Error;

use super::pagination::{total_pages, PageRequest, PageResult};

/// Why an envelope could not be turned into data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// `success: false`, with the server's explanation when it gave one
    #[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
    Rejected { message: Option<String> },

    #[error("response has no data")]
    MissingData,
}

/// `{ success, message?, data? }`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// A successful create/update. `item` is absent on endpoints that only
/// acknowledge the write.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    pub item: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn check(&self) -> Result<(), EnvelopeError> {
        if self.success {
            Ok(())
        } else {
            Err(EnvelopeError::Rejected {
                message: non_blank(self.message.clone()),
            })
        }
    }

    pub fn into_data(self) -> Result<T, EnvelopeError> {
        self.check()?;
        self.data.ok_or(EnvelopeError::MissingData)
    }

    pub fn into_saved(self) -> Result<Saved<T>, EnvelopeError> {
        self.check()?;
        Ok(Saved {
            item: self.data,
            message: non_blank(self.message),
        })
    }
}

/// Body of `DELETE` and other acknowledgement-only calls.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

impl Ack {
    /// Server message on success
    pub fn into_message(self) -> Result<Option<String>, EnvelopeError> {
        if self.success {
            Ok(non_blank(self.message))
        } else {
            Err(EnvelopeError::Rejected {
                message: non_blank(self.message),
            })
        }
    }
}

/// `pagination` block of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub pages: usize,
    #[serde(default)]
    pub total: usize,
}

/// `{ success, data | products | orders | ..., pagination? }`
///
/// Older endpoints name the array after the resource, so every known
/// spelling is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    #[serde(
        alias = "products",
        alias = "orders",
        alias = "users",
        alias = "blogs",
        alias = "categories",
        alias = "languages"
    )]
    pub data: Option<Vec<T>>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> ListEnvelope<T> {
    /// Without a `pagination` block the array is taken as the whole list.
    pub fn into_page(self, request: PageRequest) -> Result<PageResult<T>, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected {
                message: non_blank(self.message),
            });
        }
        let items = self.data.ok_or(EnvelopeError::MissingData)?;
        let (total_items, pages) = match self.pagination {
            // `pages` may be left out while `total` is given
            Some(meta) if meta.pages == 0 && meta.total > 0 => {
                (meta.total, total_pages(meta.total, request.limit))
            }
            Some(meta) => (meta.total, meta.pages),
            None => (items.len(), total_pages(items.len(), items.len().max(request.limit))),
        };
        Ok(PageResult {
            items,
            total_items,
            total_pages: pages,
        })
    }
}

/// Error body of non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract `message` from a raw error response, if it is JSON at all.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| non_blank(b.message))
    }
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        #[serde(rename = "_id")]
        id: String,
    }

    fn rows(n: usize) -> String {
        let items: Vec<String> = (0..n).map(|i| format!(r#"{{"_id":"r{}"}}"#, i)).collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_list_with_pagination() {
        let body = format!(
            r#"{{"success":true,"data":{},"pagination":{{"page":1,"pages":3,"total":13}}}}"#,
            rows(5)
        );
        let env: ListEnvelope<Row> = serde_json::from_str(&body).unwrap();
        let page = env.into_page(PageRequest::first(5)).unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_items, 13);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_missing_page_count_derived_from_total() {
        let body = format!(r#"{{"success":true,"data":{},"pagination":{{"total":13}}}}"#, rows(5));
        let env: ListEnvelope<Row> = serde_json::from_str(&body).unwrap();
        let page = env.into_page(PageRequest::first(5)).unwrap();
        assert_eq!(page.total_items, 13);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_list_named_after_resource() {
        let body = format!(r#"{{"success":true,"products":{}}}"#, rows(2));
        let env: ListEnvelope<Row> = serde_json::from_str(&body).unwrap();
        let page = env.into_page(PageRequest::first(10)).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_list_without_pagination() {
        let env: ListEnvelope<Row> = serde_json::from_str(r#"{"success":true,"data":[]}"#).unwrap();
        let page = env.into_page(PageRequest::first(10)).unwrap();
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_unsuccessful_list_is_an_error() {
        let env: ListEnvelope<Row> =
            serde_json::from_str(r#"{"success":false,"data":[]}"#).unwrap();
        assert_eq!(
            env.into_page(PageRequest::first(10)).unwrap_err(),
            EnvelopeError::Rejected { message: None }
        );

        let env: ListEnvelope<Row> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(env.into_page(PageRequest::first(10)).is_err());
    }

    #[test]
    fn test_saved_and_ack() {
        let env: Envelope<Row> =
            serde_json::from_str(r#"{"success":true,"data":{"_id":"x"},"message":"Added"}"#)
                .unwrap();
        let saved = env.into_saved().unwrap();
        assert_eq!(saved.item.unwrap().id, "x");
        assert_eq!(saved.message.as_deref(), Some("Added"));

        let ack: Ack = serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        assert_eq!(
            ack.into_message().unwrap_err(),
            EnvelopeError::Rejected { message: None }
        );

        let ack: Ack = serde_json::from_str(r#"{"success":false,"message":"In use"}"#).unwrap();
        assert_eq!(ack.into_message().unwrap_err().to_string(), "In use");
    }

    #[test]
    fn test_into_data_requires_data() {
        let env: Envelope<Row> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), EnvelopeError::MissingData);
    }

    #[test]
    fn test_error_body() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message":"Token expired"}"#).as_deref(),
            Some("Token expired")
        );
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ErrorBody::message_from(r#"{"error":"x"}"#), None);
    }
}
