// src/main.rs

use quiz_backend::config::Config;
use quiz_backend::routes;
use quiz_backend::state::AppState;
use quiz_backend::store::Store;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Some(raw) = &config.invalid_port {
        tracing::warn!("Invalid PORT value {:?}, using {}", raw, config.port);
    }

    let store = Store::connect(&config.database_url)
        .await
        .expect("Failed to open the quiz database");
    tracing::info!("Database opened at {}", config.database_url);

    // Schema and seed must be in place before the listener is bound.
    store
        .initialize()
        .await
        .expect("Failed to initialize the quiz database");

    let port = config.port;
    let state = AppState {
        store,
        config,
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app).await.unwrap();
}
