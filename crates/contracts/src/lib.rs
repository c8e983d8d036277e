//! Types shared between the dashboard UI and the backend REST contract.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
