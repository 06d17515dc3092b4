use actix_web::{web, App, HttpServer, middleware};
use dotenvy::dotenv;
use env_logger::Env;
use log::{debug, error, info};
mod api;
mod config;
mod problem;
mod routes;
mod validation;
use api::minimal_dus;
use clap::Parser;
use config::Settings;

/// Route table shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(minimal_dus::init_routes)
        .default_service(web::route().to(routes::not_found));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Flags override variables from the environment and .env
    let settings = Settings::parse();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(
        Env::default().default_filter_or(settings.environment.default_log_filter()),
    )
    .init();

    info!(
        "Environment: {}, server running at http://{}:{}",
        settings.environment, settings.host, settings.port
    );
    if settings.environment.is_development() {
        debug!("Development environment: debug logging enabled by default");
    }

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .wrap(middleware::NormalizePath::trim())
            .configure(configure)
    });
    if let Some(workers) = settings.workers {
        server = server.workers(usize::from(workers));
    }

    server
        .bind(settings.bind_addr())
        .inspect_err(|e| error!("Failed to bind {}:{}: {}", settings.host, settings.port, e))?
        .run()
        .await
}
