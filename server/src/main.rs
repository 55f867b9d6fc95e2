mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    // Database is optional: data routes answer 503 until it is configured.
    let pool = match config.database_url.as_deref() {
        Some(url) => match db::init_pool(url, config.db_max_connections).await {
            Ok(pool) => {
                tracing::info!(max_connections = config.db_max_connections, "database pool initialized");
                Some(pool)
            }
            Err(e) => {
                tracing::warn!(error = %e, "database connection failed — annotation routes disabled");
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set — annotation routes disabled");
            None
        }
    };

    let state = state::AppState::new(pool);
    tracing::debug!(database = state.database_configured(), "app state ready");
    let app = routes::app(state);

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "matside listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
