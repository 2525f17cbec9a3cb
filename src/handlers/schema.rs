use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::entities::{menu_item, order};

/// Read-only description of the persisted shapes, consumed by database
/// tooling and the admin frontend.
pub async fn describe() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "collections": [menu_item::COLLECTION, order::COLLECTION],
        "models": {
            "MenuItem": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "description": { "type": "string", "nullable": true },
                    "price": { "type": "number" },
                    "category": { "type": "string" },
                    "image_url": { "type": "string", "nullable": true },
                    "is_featured": { "type": "boolean", "default": false }
                },
                "required": ["name", "price", "category"]
            },
            "Order": {
                "type": "object",
                "properties": {
                    "table_id": {
                        "type": "string",
                        "description": "Table identifier like T-03"
                    },
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "quantity": { "type": "integer", "minimum": 1, "default": 1 },
                                "price": { "type": "number", "minimum": 0 },
                                "notes": { "type": "string", "nullable": true }
                            },
                            "required": ["name", "price"]
                        }
                    },
                    "special_instructions": { "type": "string", "nullable": true },
                    "status": {
                        "type": "string",
                        "enum": ["Order Placed", "Preparing", "Ready", "Delivered"],
                        "default": "Order Placed"
                    },
                    "estimated_time_min": {
                        "type": "integer",
                        "minimum": 0,
                        "default": order::DEFAULT_ETA_MINUTES
                    },
                    "created_at": { "type": "string", "format": "date-time", "nullable": true },
                    "updated_at": { "type": "string", "format": "date-time", "nullable": true }
                },
                "required": ["table_id", "items"]
            }
        }
    }))
}
