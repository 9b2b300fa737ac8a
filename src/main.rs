use std::sync::Arc;

use anyhow::Result;
use log::info;
use rental_manager::config;
use rental_manager::logger::setup_logger;
use rental_manager::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<config::Config> = Arc::new(config::read_config());

    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel::<()>(1);
    tokio::task::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        }
    });

    web::start_http_server(AppState { config }, shutdown_rx).await;

    Ok(())
}
