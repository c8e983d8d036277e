//! Generic paginated CRUD list: one implementation shared by every
//! resource page of the dashboard.

pub mod client;
pub mod controller;
pub mod coordinator;
pub mod handle;
pub mod list_state;
pub mod notify;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiError, Credential, HttpResourceClient, MultipartBody, RequestBody, ResourceClient};
pub use coordinator::{MutationForm, SaveOutcome};
pub use handle::CrudHandle;
pub use list_state::ListViewState;
