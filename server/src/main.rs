mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    let port = config.port;
    tracing::info!(
        upstream = %config.api_upstream,
        prefix = %config.api_prefix,
        landing = config.boot.landing.as_str(),
        healthcheck = config.boot.healthcheck.as_str(),
        "gateway configured"
    );

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "mantel gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
