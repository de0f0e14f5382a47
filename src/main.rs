// calculator-api - Stateless HTTP calculator, greeting and echo service
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use calculator_api::cli::Args;
use calculator_api::config::AppConfig;
use calculator_api::server::create_router;
use calculator_api::utils::logging;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration, CLI flags win
    let config = AppConfig::load(args.config.as_deref())?.apply_args(&args);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting calculator-api v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build router and bind
    let app = create_router(&config);
    let addr = config.server.socket_addr()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 4: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
