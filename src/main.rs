use actix_web::{App, HttpServer, middleware};

use signup_portal::auth::session::{load_session_key, session_middleware};
use signup_portal::config::PortalConfig;
use signup_portal::handlers;
use signup_portal::state::PortalState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = PortalConfig::from_env();
    let state = PortalState::from_config(&config)
        .expect("Failed to create activities API client")
        .into_data();
    let secret_key = load_session_key();

    log::info!(
        "Starting portal at http://{} (activities API: {}, locale: {})",
        config.bind,
        state.api.base_url(),
        config.locale.code()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind)?
    .run()
    .await
}
