use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, Identifiable, Resource};

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    /// HTML produced by the rich-text editor
    #[serde(default)]
    pub content: String,
    /// Server-relative path of the cover image
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identifiable for Blog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Blog {
    type Item = Blog;
    const ENDPOINTS: Endpoints = Endpoints::crud("/blog");
    const SINGULAR: &'static str = "Blog";
}
