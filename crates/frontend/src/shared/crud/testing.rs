//! In-memory stand-ins for the server and the notification area.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use contracts::domain::common::Identifiable;
use contracts::shared::api::Saved;
use contracts::shared::pagination::{total_pages, PageRequest, PageResult};

use super::client::{ApiError, RequestBody, ResourceClient};
use super::notify::{NoticeLevel, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub name: String,
}

impl Identifiable for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn row_ids(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}

#[derive(Default)]
pub struct InMemoryClient {
    rows: RefCell<Vec<Row>>,
    next_id: Cell<usize>,
    list_calls: RefCell<Vec<PageRequest>>,
    mutation_calls: Cell<usize>,
    list_failure: RefCell<Option<ApiError>>,
    mutation_failure: RefCell<Option<Option<String>>>,
}

impl InMemoryClient {
    /// Rows `r1..=rN`
    pub fn with_rows(n: usize) -> Self {
        let client = Self::default();
        for _ in 0..n {
            client.push(None);
        }
        client
    }

    fn push(&self, name: Option<String>) -> Row {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let row = Row {
            id: format!("r{}", id),
            name: name.unwrap_or_else(|| format!("Row {}", id)),
        };
        self.rows.borrow_mut().push(row.clone());
        row
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.borrow().clone()
    }

    pub fn remove_rows(&self, ids: &[&str]) {
        self.rows.borrow_mut().retain(|r| !ids.contains(&r.id.as_str()));
    }

    pub fn list_calls(&self) -> Vec<PageRequest> {
        self.list_calls.borrow().clone()
    }

    pub fn mutation_calls(&self) -> usize {
        self.mutation_calls.get()
    }

    pub fn clear_calls(&self) {
        self.list_calls.borrow_mut().clear();
        self.mutation_calls.set(0);
    }

    /// Answer lists with `success: false` and this message.
    pub fn fail_lists_with(&self, message: Option<&str>) {
        *self.list_failure.borrow_mut() = Some(ApiError::Rejected {
            message: message.map(str::to_string),
        });
    }

    /// Answer lists with 401 as if the token had expired.
    pub fn expire_session(&self) {
        *self.list_failure.borrow_mut() = Some(ApiError::Unauthenticated);
    }

    /// Answer creates, updates and deletes with `success: false`.
    pub fn reject_mutations_with(&self, message: Option<&str>) {
        *self.mutation_failure.borrow_mut() = Some(message.map(str::to_string));
    }

    fn mutation(&self) -> Result<(), ApiError> {
        self.mutation_calls.set(self.mutation_calls.get() + 1);
        match self.mutation_failure.borrow().clone() {
            Some(message) => Err(ApiError::Rejected { message }),
            None => Ok(()),
        }
    }

    fn name_of(body: &RequestBody) -> Option<String> {
        match body {
            RequestBody::Json(value) => value["name"].as_str().map(str::to_string),
            RequestBody::Multipart(parts) => parts
                .fields
                .iter()
                .find(|(k, _)| *k == "name")
                .map(|(_, v)| v.clone()),
        }
    }
}

#[async_trait(?Send)]
impl ResourceClient<Row> for InMemoryClient {
    async fn list(&self, request: PageRequest) -> Result<PageResult<Row>, ApiError> {
        self.list_calls.borrow_mut().push(request);
        if let Some(error) = self.list_failure.borrow().clone() {
            return Err(error);
        }
        let rows = self.rows.borrow();
        let items = rows
            .iter()
            .skip((request.page - 1) * request.limit)
            .take(request.limit)
            .cloned()
            .collect();
        Ok(PageResult {
            items,
            total_items: rows.len(),
            total_pages: total_pages(rows.len(), request.limit),
        })
    }

    async fn get(&self, id: &str) -> Result<Row, ApiError> {
        self.rows
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: Some("Row not found".into()),
            })
    }

    async fn create(&self, body: RequestBody) -> Result<Saved<Row>, ApiError> {
        self.mutation()?;
        let row = self.push(Self::name_of(&body));
        Ok(Saved {
            item: Some(row),
            message: Some("Row added".into()),
        })
    }

    async fn update(&self, id: &str, body: RequestBody) -> Result<Saved<Row>, ApiError> {
        self.mutation()?;
        let mut rows = self.rows.borrow_mut();
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(ApiError::Status {
            status: 404,
            message: Some("Row not found".into()),
        })?;
        if let Some(name) = Self::name_of(&body) {
            row.name = name;
        }
        Ok(Saved {
            item: Some(row.clone()),
            message: None,
        })
    }

    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.mutation()?;
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: Some("Row not found".into()),
            });
        }
        Ok(Some("Row deleted".into()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NoticeLevel, String)> {
        self.messages.borrow().clone()
    }

    fn of(&self, level: NoticeLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.of(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.of(NoticeLevel::Success)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: String) {
        self.messages.borrow_mut().push((level, message));
    }
}
