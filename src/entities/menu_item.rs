use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "menuitem";

/// A dish available to order. Created only by the seed helper; the API never
/// updates or deletes menu items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}
