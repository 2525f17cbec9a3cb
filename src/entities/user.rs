use serde::{Deserialize, Serialize};

/// Example schema kept as a template for new collections; no endpoint uses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_active_defaults_to_true() {
        let user: User = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "address": "12 Fern St"
        }))
        .unwrap();
        assert!(user.is_active);
        assert_eq!(user.age, None);
    }
}
