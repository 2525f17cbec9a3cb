use bson::DateTime;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "order";
pub const DEFAULT_ETA_MINUTES: i64 = 5;

/// Set once at placement; no endpoint transitions it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "Order Placed")]
    Placed,
    Preparing,
    Ready,
    Delivered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price: f64,
    pub notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl OrderItem {
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity < 1 {
            return Err(format!("item \"{}\": quantity must be at least 1", self.name));
        }
        if self.price < 0.0 {
            return Err(format!("item \"{}\": price must not be negative", self.name));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub table_id: String,
    pub items: Vec<OrderItem>,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    pub estimated_time_min: Option<i64>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

impl Order {
    pub fn place(
        table_id: String,
        items: Vec<OrderItem>,
        special_instructions: Option<String>,
    ) -> Self {
        Self {
            table_id,
            items,
            special_instructions,
            status: OrderStatus::Placed,
            estimated_time_min: Some(DEFAULT_ETA_MINUTES),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> OrderItem {
        OrderItem {
            name: "Coconut Curry Ramen Bowl".into(),
            quantity: 2,
            price: 350.0,
            notes: None,
        }
    }

    #[test]
    fn place_populates_defaults() {
        let o = Order::place("T-03".into(), vec![sample_item()], None);
        assert_eq!(o.table_id, "T-03");
        assert_eq!(o.status, OrderStatus::Placed);
        assert_eq!(o.estimated_time_min, Some(DEFAULT_ETA_MINUTES));
        assert_eq!(o.created_at, None);
        assert_eq!(o.updated_at, None);
    }

    #[test]
    fn status_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Placed).unwrap(),
            "\"Order Placed\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"Preparing\""
        );
        let back: OrderStatus = serde_json::from_str("\"Order Placed\"").unwrap();
        assert_eq!(back, OrderStatus::Placed);
    }

    #[test]
    fn item_quantity_defaults_to_one() {
        let item: OrderItem = serde_json::from_value(json!({
            "name": "Chocolate Brownie",
            "price": 120.0
        }))
        .unwrap();
        assert_eq!(item.quantity, 1);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn item_validation_rejects_zero_quantity_and_negative_price() {
        let mut item = sample_item();
        item.quantity = 0;
        assert!(item.validate().is_err());

        let mut item = sample_item();
        item.price = -1.0;
        assert!(item.validate().is_err());
    }
}
