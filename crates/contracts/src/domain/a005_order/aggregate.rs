use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, Identifiable, Resource};

/// Customer order (read-only in the dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Populated product document; `None` when the product was deleted
    #[serde(rename = "productId", default)]
    pub product: Option<OrderedProduct>,
    #[serde(default)]
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    /// Anything else the payment provider reports
    #[serde(untagged)]
    Other(String),
}

impl PaymentStatus {
    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl Order {
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total_amount)
    }
}

impl Identifiable for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Order {
    type Item = Order;
    const ENDPOINTS: Endpoints = Endpoints::read_only("/orders");
    const SINGULAR: &'static str = "Order";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_format() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","totalAmount":1234.5,"paymentStatus":"Failed",
                "cartItems":[{"productId":{"name":"Gita","price":10},"qty":2},{"productId":null,"qty":1}],
                "createdAt":"2024-12-31T23:59:59Z"}"#,
        )
        .unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Other("Failed".into()));
        assert_eq!(order.payment_status.label(), "Failed");
        assert_eq!(order.cart_items.len(), 2);
        assert!(order.cart_items[1].product.is_none());
        assert_eq!(order.formatted_total(), "$1234.50");
    }

    #[test]
    fn test_known_statuses() {
        let paid: PaymentStatus = serde_json::from_str(r#""Paid""#).unwrap();
        assert_eq!(paid, PaymentStatus::Paid);
        let pending: PaymentStatus = serde_json::from_str(r#""Pending""#).unwrap();
        assert_eq!(pending, PaymentStatus::Pending);
    }
}
