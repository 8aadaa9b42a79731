//! Catalog server entry point.

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use ct_api::{app, middleware, AppState};
use ct_infra::create_pool;
use ct_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let state = web::Data::new(AppState::postgres(pool));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "starting catalog server");

    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::RequestLog)
            .wrap(middleware::create_cors())
            .app_data(state.clone())
            .app_data(app::json_config())
            .configure(app::configure_routes)
            .default_service(web::route().to(app::not_found))
    })
    .bind(&bind_address)?;

    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.run().await
}
