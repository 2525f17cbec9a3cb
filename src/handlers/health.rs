use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "DineZen API is running" }))
}
