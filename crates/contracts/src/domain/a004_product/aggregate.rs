use serde::{Deserialize, Serialize};

use crate::domain::common::{deserialize_ref, Endpoints, Identifiable, Resource};

/// Catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discounted_price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default, deserialize_with = "deserialize_ref")]
    pub category_id: String,
    #[serde(default, deserialize_with = "deserialize_ref")]
    pub language_id: String,
}

impl Identifiable for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Product {
    type Item = Product;
    const ENDPOINTS: Endpoints = Endpoints {
        list: "/product/all-products",
        create: Some("/product/add"),
        item: Some("/product"),
    };
    const SINGULAR: &'static str = "Product";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_references() {
        let p: Product = serde_json::from_str(
            r#"{"_id":"p1","name":"Gita","price":250,"discountedPrice":199.5,
                "categoryId":{"_id":"c1","name":"Books"},"languageId":"l1"}"#,
        )
        .unwrap();
        assert_eq!(p.category_id, "c1");
        assert_eq!(p.language_id, "l1");
        assert!(!p.is_featured);
        assert_eq!(p.discounted_price, 199.5);
    }
}
