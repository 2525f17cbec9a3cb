use actix_web::{web, HttpResponse};
use bson::doc;
use serde_json::json;
use tracing::error;

use crate::entities::menu_item::{self, MenuItem};
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_menu(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;
    let docs = store.find(menu_item::COLLECTION, doc! {}, None).await?;

    let mut items = Vec::with_capacity(docs.len());
    for mut doc in docs {
        doc.remove("_id");
        let item: MenuItem = bson::from_document(doc).map_err(|e| {
            error!(err = %e, "stored menu document does not match the MenuItem shape");
            ApiError::Internal
        })?;
        items.push(item);
    }
    Ok(HttpResponse::Ok().json(items))
}

/// No-op when the menu collection already has documents. The check and the
/// inserts are separate store calls; two concurrent seeds can both pass the
/// emptiness check.
pub async fn seed(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;
    let existing = store.find(menu_item::COLLECTION, doc! {}, Some(1)).await?;
    if !existing.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "seeded": false })));
    }

    for item in default_menu() {
        let doc = bson::to_document(&item).map_err(|e| {
            error!(err = %e, "failed to encode default menu item");
            ApiError::Internal
        })?;
        store.insert(menu_item::COLLECTION, doc).await?;
    }
    Ok(HttpResponse::Ok().json(json!({ "seeded": true })))
}

fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Coconut Curry Ramen Bowl".into(),
            description: Some("Fragrant coconut broth, ramen, veggies".into()),
            price: 350.0,
            category: "Chef's Specials".into(),
            image_url: Some(String::new()),
            is_featured: true,
        },
        MenuItem {
            name: "Classic Cheeseburger".into(),
            description: Some("Juicy patty with cheddar".into()),
            price: 240.0,
            category: "Burgers".into(),
            image_url: None,
            is_featured: false,
        },
        MenuItem {
            name: "Penne Arrabbiata".into(),
            description: Some("Spicy tomato sauce".into()),
            price: 260.0,
            category: "Pasta".into(),
            image_url: None,
            is_featured: false,
        },
        MenuItem {
            name: "Chocolate Brownie".into(),
            description: Some("Gooey chocolate delight".into()),
            price: 120.0,
            category: "Desserts".into(),
            image_url: None,
            is_featured: false,
        },
        MenuItem {
            name: "Ini Salad".into(),
            description: Some("Fresh greens mix".into()),
            price: 180.0,
            category: "Salads".into(),
            image_url: None,
            is_featured: false,
        },
        MenuItem {
            name: "Drinks Mix".into(),
            description: Some("Assorted beverages".into()),
            price: 90.0,
            category: "Drinks".into(),
            image_url: None,
            is_featured: false,
        },
    ]
}
