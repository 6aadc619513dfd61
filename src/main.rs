mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    match &config.api_upstream {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api requests"),
        None => tracing::warn!("MEMOIR_API_UPSTREAM not set; /api requests will return 503"),
    }

    let state = state::HostState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "memoir listening");
    axum::serve(listener, app).await.expect("server failed");
}
