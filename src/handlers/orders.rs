use actix_web::{web, HttpResponse};
use bson::{doc, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::entities::order::{self, Order, OrderItem, OrderStatus};
use crate::errors::ApiError;
use crate::state::AppState;

const MAX_LISTED_ORDERS: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct PlaceOrderPayload {
    pub table_id: String,
    pub items: Vec<OrderItem>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Serialize)]
struct PlaceOrderReceipt {
    order_id: String,
    status: OrderStatus,
    eta: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub table_id: Option<String>,
}

pub async fn place_order(
    state: web::Data<AppState>,
    payload: web::Json<PlaceOrderPayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    for item in &payload.items {
        item.validate().map_err(ApiError::Validation)?;
    }

    let store = state.store()?;
    let placed = Order::place(
        payload.table_id,
        payload.items,
        payload.special_instructions,
    );
    let doc = bson::to_document(&placed).map_err(|e| {
        error!(err = %e, "failed to encode order");
        ApiError::Internal
    })?;
    let id = store.insert(order::COLLECTION, doc).await?;

    Ok(HttpResponse::Created().json(PlaceOrderReceipt {
        order_id: id,
        status: placed.status,
        eta: placed
            .estimated_time_min
            .unwrap_or(order::DEFAULT_ETA_MINUTES),
    }))
}

pub async fn list_orders(
    state: web::Data<AppState>,
    query: web::Query<ListOrdersQuery>,
) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;
    let filter = match &query.table_id {
        Some(table_id) => doc! { "table_id": table_id },
        None => doc! {},
    };
    let docs = store
        .find(order::COLLECTION, filter, Some(MAX_LISTED_ORDERS))
        .await?;
    let orders: Vec<Document> = docs.into_iter().map(stringify_id).collect();
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;
    let id = path.into_inner();
    let oid = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidOrderId)?;

    // Lookup failures are collapsed into the same 400 as a malformed id.
    let docs = store
        .find(order::COLLECTION, doc! { "_id": oid }, Some(1))
        .await
        .map_err(|_| ApiError::InvalidOrderId)?;
    let doc = docs.into_iter().next().ok_or(ApiError::OrderNotFound)?;
    Ok(HttpResponse::Ok().json(stringify_id(doc)))
}

/// Replaces the store's `_id` with a plain-string `id` field.
fn stringify_id(mut doc: Document) -> Document {
    let id = match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    doc.insert("id", id);
    doc
}
