use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, Identifiable, Resource};

/// Language a product is published in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl Identifiable for Language {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Language {
    type Item = Language;
    const ENDPOINTS: Endpoints = Endpoints::crud("/language");
    const SINGULAR: &'static str = "Language";
}
