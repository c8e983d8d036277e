use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, Identifiable, Resource};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Category {
    type Item = Category;
    const ENDPOINTS: Endpoints = Endpoints::crud("/category");
    const SINGULAR: &'static str = "Category";
}
