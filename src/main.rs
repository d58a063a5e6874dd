mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr(), "portfolio admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
