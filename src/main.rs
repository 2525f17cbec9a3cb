use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use dinezen::repositories::mongo::MongoStore;
use dinezen::routes;
use dinezen::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let state = match MongoStore::from_env().await {
        Ok(Some(store)) => {
            tracing::info!("document store configured");
            AppState::new(store)
        }
        Ok(None) => {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set; store disabled");
            AppState::disconnected()
        }
        Err(e) => {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);

    tracing::info!(port, "dinezen api listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
