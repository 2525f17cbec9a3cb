use actix_web::web::{self, ServiceConfig};

use crate::{errors, handlers};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(errors::json_config())
        .route("/", web::get().to(handlers::health::root))
        .route("/schema", web::get().to(handlers::schema::describe))
        .route("/seed", web::post().to(handlers::menu::seed))
        .route("/menu", web::get().to(handlers::menu::list_menu))
        .service(
            web::scope("/orders")
                .route("", web::post().to(handlers::orders::place_order))
                .route("", web::get().to(handlers::orders::list_orders))
                .route("/{id}", web::get().to(handlers::orders::get_order)),
        )
        .route("/test", web::get().to(handlers::diagnostics::test_store));
}
