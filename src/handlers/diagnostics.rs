use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::state::AppState;

pub async fn test_store(state: web::Data<AppState>) -> impl Responder {
    let mut body = json!({
        "backend": "✅ Running",
        "database": if state.store.is_some() {
            "✅ Connected & Working"
        } else {
            "❌ Not Available"
        },
        "database_url": env_status("DATABASE_URL"),
        "database_name": env_status("DATABASE_NAME"),
        "collections": [],
    });

    if let Some(store) = &state.store {
        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(10);
                body["collections"] = json!(names);
            }
            Err(e) => {
                let detail: String = e.to_string().chars().take(50).collect();
                body["database"] = json!(format!("⚠️  Connected but Error: {detail}"));
            }
        }
    }

    HttpResponse::Ok().json(body)
}

fn env_status(var: &str) -> &'static str {
    if std::env::var(var).is_ok() {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}
