use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use journey_server::config::ServerConfig;
use journey_server::domain::Catalog;
use journey_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("journey_server=info,tower_http=info")),
        )
        .init();

    let config =
        ServerConfig::from_env().inspect_err(|e| error!(error = %e, "Bad configuration"))?;

    // A malformed pricing file is fatal
    let pricing = config
        .load_pricing()
        .inspect_err(|e| error!(error = %e, "Failed to load pricing table"))?;
    let source = config
        .pricing_file
        .as_deref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    info!(
        transport_modes = pricing.transport.len(),
        places = pricing.entrance_fees.len(),
        %source,
        "Loaded pricing table"
    );

    let state = AppState::new(Catalog::builtin(), pricing);
    let app = create_router(state, config.cors_origin_header()?);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, cors_origin = %config.cors_origin, "Journey estimator listening");
    info!("  GET  /health       - Health check");
    info!("  GET  /catalog      - Regions, cities, places and transport modes");
    info!("  POST /submit-form  - Estimate an itinerary");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
