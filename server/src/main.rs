#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stackit server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let host = config::HostConfig::from_env().map_err(|e| e.to_string())?;
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;

    let app = routes::app(conf.leptos_options);
    let addr = host.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "stackit listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
