pub mod signup_handlers;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::templates_structs::NotFoundTemplate;

async fn not_found() -> Result<HttpResponse, AppError> {
    let html = askama::Template::render(&NotFoundTemplate)?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Portal routes. Session middleware and `PortalState` are supplied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(signup_handlers::index))
        .route("/signup", web::post().to(signup_handlers::signup_submit))
        .route("/unregister", web::post().to(signup_handlers::unregister_submit))
        // Default 404 handler (must be registered last)
        .default_service(web::to(not_found));
}
