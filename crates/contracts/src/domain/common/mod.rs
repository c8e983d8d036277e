//! Common types and traits shared by all entities managed from the dashboard

pub mod image;
pub mod resource;

// Re-exports
pub use image::{asset_url, ImageSelection};
pub use resource::{deserialize_ref, Endpoints, Identifiable, Resource};
