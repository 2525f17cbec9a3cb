use serde::{Deserialize, Serialize};

/// Example schema kept as a template for new collections; no endpoint uses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn in_stock_defaults_to_true() {
        let product: Product = serde_json::from_value(json!({
            "title": "Gift Card",
            "price": 25.0,
            "category": "Extras"
        }))
        .unwrap();
        assert!(product.in_stock);
        assert_eq!(product.description, None);
    }
}
