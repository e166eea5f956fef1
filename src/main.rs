mod domain;
mod clients;
mod config;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod roster_actor;
mod web;

use tracing::{error, info};
use crate::app_system::{setup_tracing, RosterSystem};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;
    let activities = config.initial_activities().map_err(|e| {
        error!(error = %e, "Failed to load activity catalog");
        e.to_string()
    })?;

    info!(activities = activities.len(), "Starting activity roster");
    let system = RosterSystem::new(activities, config.channel_capacity);
    let app = web::router(system.roster_client.clone(), &config.static_dir);

    let listener = config.bind().await.map_err(|e| {
        error!(error = %e, "Failed to bind");
        e.to_string()
    })?;
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    // The router and its client clones are gone once serve returns
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
    }
    info!("Shutdown signal received");
}
