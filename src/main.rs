use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use printdesk::config::Config;
use printdesk::middleware::RequestId;
use printdesk::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("printdesk={},actix_web=info", config.app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting printdesk");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = AppState::from_config(&config.store).context("Failed to initialize record stores")?;

    tracing::info!(
        "Record stores initialized (seeded: {}, list latency: {}ms)",
        config.store.seed_demo_data,
        config.store.list_latency_ms
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(printdesk::cors(&server_config))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
