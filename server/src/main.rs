mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "shot spinner failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
    let config = ServerConfig::from_env()?;

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let site_root = config.site_root(&leptos_options);

    let app = routes::app(leptos_options, &site_root);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, site_root = %site_root.display(), "shot spinner listening");
    axum::serve(listener, app).await?;
    Ok(())
}
